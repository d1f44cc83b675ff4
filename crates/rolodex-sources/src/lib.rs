//! rolodex sources — fetch the people pool once per widget lifetime.

pub mod error;
pub mod http;
pub mod sources;

pub use error::{Result, SourceError};
pub use sources::{FileSource, HttpSource, PeopleSource, fetch_or_empty, source_from_config};

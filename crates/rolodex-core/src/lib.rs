pub mod autocomplete;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;

pub use autocomplete::{Autocomplete, DropdownEvent, DropdownRow, Transition, TriggerMode};
pub use config::{AppConfig, DataSourceKind, SourceConfig, UiConfig, WidgetConfig};
pub use error::{Result, RolodexError};
pub use filter::{FilterOptions, filter, filter_with};
pub use models::*;

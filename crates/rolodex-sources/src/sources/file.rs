use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rolodex_core::{PersonRecord, decode_people_str};

use super::PeopleSource;
use crate::error::Result;

/// Reads a people payload from a JSON file on disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl PeopleSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_people(&self) -> Result<Vec<PersonRecord>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(decode_people_str(&text)?)
    }
}

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rolodex_core::{DataSourceKind, PersonRecord, SourceConfig};

use crate::error::Result;
use crate::http::HttpClient;

mod file;
mod http_source;

pub use file::FileSource;
pub use http_source::HttpSource;

/// Data source adapter: yields the full people pool.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch_people(&self) -> Result<Vec<PersonRecord>>;
}

/// Build the configured source.
pub fn source_from_config(config: &SourceConfig) -> Result<Arc<dyn PeopleSource>> {
    match config.kind {
        DataSourceKind::Local | DataSourceKind::Remote => {
            let timeout = (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs));
            let client = HttpClient::new(&config.user_agent, timeout)?;
            Ok(Arc::new(HttpSource::new(client, config.endpoint())))
        }
        DataSourceKind::File => Ok(Arc::new(FileSource::new(&config.file))),
    }
}

/// Fetch once. A failure is logged and yields an empty pool.
pub async fn fetch_or_empty(source: &dyn PeopleSource) -> Vec<PersonRecord> {
    tracing::info!(source = source.name(), "fetching people");
    match source.fetch_people().await {
        Ok(people) => {
            tracing::info!(source = source.name(), count = people.len(), "people loaded");
            people
        }
        Err(err) => {
            tracing::warn!(source = source.name(), error = %err, "people fetch failed, pool left empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;

    struct Failing;

    #[async_trait]
    impl PeopleSource for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        async fn fetch_people(&self) -> Result<Vec<PersonRecord>> {
            Err(SourceError::Parse("boom".to_string()))
        }
    }

    #[tokio::test]
    async fn failure_yields_empty_pool() {
        assert!(fetch_or_empty(&Failing).await.is_empty());
    }

    #[test]
    fn builds_source_per_kind() {
        let mut cfg = SourceConfig::default();
        assert_eq!(source_from_config(&cfg).unwrap().name(), "http");

        cfg.kind = DataSourceKind::File;
        cfg.file = "/tmp/people.json".to_string();
        assert_eq!(source_from_config(&cfg).unwrap().name(), "file");
    }
}

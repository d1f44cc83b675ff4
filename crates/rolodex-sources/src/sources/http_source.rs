use async_trait::async_trait;
use rolodex_core::{PersonRecord, decode_people_str};

use super::PeopleSource;
use crate::error::Result;
use crate::http::HttpClient;

/// GETs a people list from a fixed URL (local mock API or random-user API).
pub struct HttpSource {
    client: HttpClient,
    url: String,
}

impl HttpSource {
    pub fn new(client: HttpClient, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PeopleSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_people(&self) -> Result<Vec<PersonRecord>> {
        let body = self.client.get(&self.url).await?;
        Ok(decode_people_str(&body)?)
    }
}

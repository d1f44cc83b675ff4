use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};

use crate::error::{Result, SourceError};

// ─── HttpClient ───────────────────────────────────────────────────────────────

/// Thin reqwest wrapper: one attempt per request, optional timeout.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .gzip(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// GET `url` and return the body. Non-2xx statuses are errors.
    pub async fn get(&self, url: &str) -> Result<String> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| SourceError::InvalidUrl(format!("{url}: {e}")))?;
        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        resp.text().await.map_err(SourceError::Http)
    }
}

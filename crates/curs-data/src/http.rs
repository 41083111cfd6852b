//! Shared HTTP client.

use crate::error::{DataError, Result};
use curs_core::HttpConfig;
use reqwest::Client;

/// Thin wrapper around a configured `reqwest::Client`.
///
/// One GET per call, no retries.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// GETs `url` and returns the body; non-2xx statuses are errors.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

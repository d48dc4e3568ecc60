//! HTTP transport backed by reqwest

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::HttpConfig;
use crate::version::error::RegistryError;
use crate::version::transport::Transport;

/// Transport implementation issuing plain GET requests
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a new HttpTransport from the HTTP settings
    pub fn new(config: &HttpConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<Option<String>, RegistryError> {
        debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::GONE {
            debug!("Resource not found: {}", url);
            return Ok(None);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(RegistryError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !status.is_success() {
            warn!("Repository returned status {}: {}", status, url);
            return Err(RegistryError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read repository response: {}", e);
            RegistryError::InvalidResponse(e.to_string())
        })?;

        Ok(Some(body))
    }
}

//! HTTP-based page fetcher.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::error::{FetchError, FetchResult};
use crate::traits::PageFetcher;

/// Default per-request timeout, matching the pipeline contract.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Fetches homepages over HTTP with a fixed timeout.
///
/// Suitable for static HTML sites; there is no JavaScript rendering. A
/// browser-like user agent avoids the most common bot blocks.
///
/// # Example
///
/// ```rust,ignore
/// use spotlight::fetchers::HttpFetcher;
///
/// let fetcher = HttpFetcher::new().with_timeout(std::time::Duration::from_secs(5));
/// let html = fetcher.fetch("https://example.com").await?;
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a fetcher with the default 10-second timeout.
    pub fn new() -> Self {
        let user_agent = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

        Self {
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .redirect(reqwest::redirect::Policy::limited(5))
                .build()
                .expect("Failed to create HTTP client"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set a custom per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<String> {
        debug!(url = %url, "Fetching page");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    FetchError::Http {
                        url: url.to_string(),
                        source: e,
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| FetchError::Http {
            url: url.to_string(),
            source: e,
        })
    }
}

//! PageFetcher trait for homepage retrieval.

use async_trait::async_trait;

use crate::error::FetchResult;

/// Retrieves raw HTML for a URL.
///
/// Implementations wrap a specific transport (see
/// [`HttpFetcher`](crate::fetchers::HttpFetcher)). The pipeline treats any
/// error identically: the entity is skipped. No retries.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page body at `url`.
    ///
    /// A non-success HTTP status is an error, not a body.
    async fn fetch(&self, url: &str) -> FetchResult<String>;
}

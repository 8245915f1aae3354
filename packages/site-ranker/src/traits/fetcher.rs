//! Fetcher trait for GET-only page retrieval.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::CrawlResult;
use crate::types::page::FetchedPage;

/// Fetches a single page by URL.
///
/// Implementations must bound every request with a timeout and a redirect
/// limit. Errors are returned, not swallowed; callers decide how to recover.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch a URL with a GET request.
    async fn fetch(&self, url: &str) -> CrawlResult<FetchedPage>;

    /// Name of this fetcher (for logging).
    fn name(&self) -> &str {
        "fetcher"
    }
}

#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for Arc<T> {
    async fn fetch(&self, url: &str) -> CrawlResult<FetchedPage> {
        (**self).fetch(url).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

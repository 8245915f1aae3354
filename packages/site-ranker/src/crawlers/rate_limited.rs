//! Per-host rate-limited fetcher wrapper.
//!
//! Wraps any Fetcher with a keyed leaky bucket from the governor crate, so
//! requests to one host are spaced out while other hosts proceed unhindered.

use async_trait::async_trait;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

use crate::error::CrawlResult;
use crate::traits::fetcher::Fetcher;
use crate::types::page::FetchedPage;

/// A fetcher wrapper that enforces a minimum spacing per host.
///
/// The limiter is shared by clones, so concurrent domain evaluations that
/// hit the same host still respect one budget.
pub struct RateLimitedFetcher<F: Fetcher> {
    inner: F,
    limiter: Option<Arc<DefaultKeyedRateLimiter<String>>>,
}

impl<F: Fetcher> RateLimitedFetcher<F> {
    /// Create a wrapper allowing one request per `spacing` per host.
    ///
    /// A zero spacing disables limiting.
    pub fn new(fetcher: F, spacing: Duration) -> Self {
        Self {
            inner: fetcher,
            limiter: Quota::with_period(spacing).map(|quota| Arc::new(RateLimiter::keyed(quota))),
        }
    }

    /// The wrapped fetcher.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Forget hosts whose bucket has fully refilled.
    ///
    /// Each host seen adds one entry to the limiter; call this between
    /// batches so long runs over many domains stay bounded.
    pub fn prune(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.retain_recent();
            limiter.shrink_to_fit();
        }
    }

    /// Number of hosts currently tracked by the limiter.
    pub fn tracked_hosts(&self) -> usize {
        self.limiter.as_ref().map_or(0, |limiter| limiter.len())
    }

    /// Wait for the host's permit before proceeding.
    async fn wait_for_permit(&self, url: &str) {
        if let Some(limiter) = &self.limiter {
            let key = host_key(url);
            trace!(host = %key, "Waiting for host permit");
            limiter.until_key_ready(&key).await;
        }
    }
}

impl<F: Fetcher + Clone> Clone for RateLimitedFetcher<F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            limiter: self.limiter.clone(),
        }
    }
}

/// Rate-limit bucket key for a URL: its lowercased host, or the raw string
/// when it has none.
fn host_key(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_ascii_lowercase()))
        .unwrap_or_else(|| url.to_string())
}

#[async_trait]
impl<F: Fetcher> Fetcher for RateLimitedFetcher<F> {
    async fn fetch(&self, url: &str) -> CrawlResult<FetchedPage> {
        self.wait_for_permit(url).await;
        self.inner.fetch(url).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Extension trait for easy rate limiting.
pub trait FetcherExt: Fetcher + Sized {
    /// Wrap this fetcher with per-host spacing.
    fn rate_limited_per_host(self, spacing: Duration) -> RateLimitedFetcher<Self> {
        RateLimitedFetcher::new(self, spacing)
    }
}

// Implement for all Fetchers
impl<F: Fetcher + Sized> FetcherExt for F {}

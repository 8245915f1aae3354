//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the ranking library
//! without making real network or embedding calls.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use url::Url;

use crate::embedders::HashingEmbedder;
use crate::error::{CrawlError, CrawlResult, EmbedError, EmbedResult};
use crate::traits::{embedder::Embedder, fetcher::Fetcher};
use crate::types::page::FetchedPage;

/// Parse-and-serialise so `https://a.example` and `https://a.example/` match.
fn url_key(url: &str) -> String {
    Url::parse(url)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| url.to_string())
}

/// A mock fetcher serving predefined pages.
///
/// Unknown URLs answer with a 404 error. Clones share pages and call history,
/// so a clone handed to a pipeline can be inspected afterwards.
#[derive(Default, Clone)]
pub struct MockFetcher {
    /// Predefined pages by URL
    pages: Arc<RwLock<HashMap<String, FetchedPage>>>,

    /// URLs that should fail
    fail_urls: Arc<RwLock<Vec<String>>>,

    /// Requested URLs in call order
    calls: Arc<RwLock<Vec<String>>>,

    /// Simulated response time
    latency: Option<Duration>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve an HTML body at a URL.
    pub fn with_html(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.with_page(FetchedPage::html(url, html))
    }

    /// Add a predefined page, keyed by its URL.
    pub fn with_page(self, page: FetchedPage) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert(url_key(&page.url), page);
        self
    }

    /// Mark a URL as failing with a connection error.
    pub fn fail_url(self, url: impl Into<String>) -> Self {
        self.fail_urls.write().unwrap().push(url_key(&url.into()));
        self
    }

    /// Delay every response.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Get all URLs requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> CrawlResult<FetchedPage> {
        self.calls.write().unwrap().push(url.to_string());

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let key = url_key(url);
        if self.fail_urls.read().unwrap().contains(&key) {
            return Err(CrawlError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "Mock connection refused",
            ))));
        }

        let page = self.pages.read().unwrap().get(&key).cloned();
        match page {
            Some(page) if page.is_success() => Ok(page),
            Some(page) => Err(CrawlError::Status {
                url: url.to_string(),
                status: page.status,
            }),
            None => Err(CrawlError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// A mock embedder with predefined vectors.
///
/// Texts without a predefined vector fall back to a deterministic
/// [`HashingEmbedder`] of the configured dimension.
#[derive(Clone)]
pub struct MockEmbedder {
    /// Predefined embeddings by text
    embeddings: Arc<RwLock<HashMap<String, Vec<f32>>>>,

    /// Texts whose embedding should fail
    fail_texts: Arc<RwLock<Vec<String>>>,

    /// Embedded texts in call order
    calls: Arc<RwLock<Vec<String>>>,

    fallback: HashingEmbedder,
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self {
            embeddings: Arc::default(),
            fail_texts: Arc::default(),
            calls: Arc::default(),
            fallback: HashingEmbedder::new(),
        }
    }

    /// Set the fallback embedding dimension.
    pub fn with_dimension(mut self, dim: usize) -> Self {
        self.fallback = self.fallback.with_dimension(dim);
        self
    }

    /// Add a predefined embedding for text.
    pub fn with_embedding(self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.embeddings
            .write()
            .unwrap()
            .insert(text.into(), embedding);
        self
    }

    /// Make embedding this exact text fail.
    pub fn fail_text(self, text: impl Into<String>) -> Self {
        self.fail_texts.write().unwrap().push(text.into());
        self
    }

    /// Get all texts embedded so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    pub fn embed_call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        self.calls.write().unwrap().push(text.to_string());

        if self.fail_texts.read().unwrap().iter().any(|t| t == text) {
            return Err(EmbedError::Backend("Mock embedding failure".into()));
        }

        let predefined = self.embeddings.read().unwrap().get(text).cloned();
        Ok(predefined.unwrap_or_else(|| self.fallback.vector(text)))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_fetcher() {
        let fetcher = MockFetcher::new()
            .with_html("https://example.com", "<p>hi</p>")
            .with_page(FetchedPage::html("https://example.com/gone", "").with_status(410))
            .fail_url("https://dead.example/");

        let page = fetcher.fetch("https://example.com/").await.unwrap();
        assert_eq!(page.body, "<p>hi</p>");

        assert!(matches!(
            fetcher.fetch("https://example.com/gone").await,
            Err(CrawlError::Status { status: 410, .. })
        ));
        assert!(matches!(
            fetcher.fetch("https://dead.example").await,
            Err(CrawlError::Http(_))
        ));
        assert!(matches!(
            fetcher.fetch("https://example.com/missing").await,
            Err(CrawlError::Status { status: 404, .. })
        ));

        let shared = fetcher.clone();
        assert_eq!(shared.call_count(), 4);
        shared.clear_calls();
        assert_eq!(fetcher.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_embedder() {
        let embedder = MockEmbedder::new()
            .with_dimension(16)
            .with_embedding("fixed", vec![1.0, 0.0])
            .fail_text("broken");

        assert_eq!(embedder.embed("fixed").await.unwrap(), vec![1.0, 0.0]);
        assert_eq!(embedder.embed("other").await.unwrap().len(), 16);
        assert!(embedder.embed("broken").await.is_err());
        assert_eq!(embedder.calls(), vec!["fixed", "other", "broken"]);
    }
}

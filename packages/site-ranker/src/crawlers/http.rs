//! HTTP fetcher backed by reqwest.

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::error::{CrawlError, CrawlResult};
use crate::traits::fetcher::Fetcher;
use crate::types::{config::RankConfig, page::FetchedPage};

/// GET-only fetcher with a bounded timeout and redirect limit.
///
/// # Example
///
/// ```rust,ignore
/// use site_ranker::{HttpFetcher, RankConfig};
///
/// let fetcher = HttpFetcher::from_config(&RankConfig::default())?;
/// let page = fetcher.fetch("https://example.com").await?;
/// ```
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher with default settings (5s timeout, 10 redirects).
    pub fn new() -> CrawlResult<Self> {
        Self::from_config(&RankConfig::default())
    }

    /// Create a fetcher from a ranking config.
    pub fn from_config(config: &RankConfig) -> CrawlResult<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| CrawlError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            timeout: config.request_timeout(),
        })
    }

    /// Configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn map_request_error(url: &str, error: reqwest::Error) -> CrawlError {
    if error.is_timeout() {
        CrawlError::Timeout {
            url: url.to_string(),
        }
    } else if error.is_builder() {
        CrawlError::InvalidUrl {
            url: url.to_string(),
        }
    } else {
        CrawlError::Http(Box::new(error))
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> CrawlResult<FetchedPage> {
        debug!(url = %url, "HTTP fetch starting");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| map_request_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Capture final URL after redirects
        let final_url = response.url().to_string();

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response
            .text()
            .await
            .map_err(|e| map_request_error(url, e))?;

        debug!(url = %url, final_url = %final_url, bytes = body.len(), "HTTP fetch complete");

        Ok(FetchedPage {
            url: url.to_string(),
            final_url,
            status: status.as_u16(),
            content_type,
            body,
        })
    }

    fn name(&self) -> &str {
        "http"
    }
}

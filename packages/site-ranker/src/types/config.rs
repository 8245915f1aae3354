//! Configuration types for crawling and ranking.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for one ranking run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankConfig {
    /// Maximum candidate links kept per domain.
    ///
    /// Default: 30.
    #[serde(default = "default_max_links")]
    pub max_links: usize,

    /// Maximum extracted text length, in characters.
    ///
    /// Default: 3000.
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Minimum spacing between two requests to the same host, in milliseconds.
    ///
    /// Zero disables host rate limiting.
    #[serde(default = "default_host_delay_ms")]
    pub host_delay_ms: u64,

    /// Maximum number of redirects to follow.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Number of domains evaluated at once (1 = sequential).
    #[serde(default = "default_domain_concurrency")]
    pub domain_concurrency: usize,
}

fn default_max_links() -> usize {
    30
}

fn default_max_text_chars() -> usize {
    3000
}

fn default_request_timeout_ms() -> u64 {
    5_000
}

fn default_host_delay_ms() -> u64 {
    500
}

fn default_max_redirects() -> usize {
    10
}

fn default_user_agent() -> String {
    concat!("site-ranker/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_domain_concurrency() -> usize {
    1
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_links: default_max_links(),
            max_text_chars: default_max_text_chars(),
            request_timeout_ms: default_request_timeout_ms(),
            host_delay_ms: default_host_delay_ms(),
            max_redirects: default_max_redirects(),
            user_agent: default_user_agent(),
            domain_concurrency: default_domain_concurrency(),
        }
    }
}

impl RankConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the candidate link cap.
    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.max_links = max_links;
        self
    }

    /// Set the extracted text cap.
    pub fn with_max_text_chars(mut self, max_text_chars: usize) -> Self {
        self.max_text_chars = max_text_chars;
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Set the per-host spacing.
    pub fn with_host_delay(mut self, delay: Duration) -> Self {
        self.host_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set how many domains run concurrently. Values below 1 are clamped.
    pub fn with_domain_concurrency(mut self, concurrency: usize) -> Self {
        self.domain_concurrency = concurrency.max(1);
        self
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Host spacing as a `Duration`.
    pub fn host_delay(&self) -> Duration {
        Duration::from_millis(self.host_delay_ms)
    }
}

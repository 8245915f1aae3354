//! Typed errors for the ranking library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a ranking run.
///
/// Per-page network failures never surface here; they are absorbed at the
/// discovery and extraction boundary.
#[derive(Debug, Error)]
pub enum RankError {
    /// Product or audience text was blank
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Domain list could not be read
    #[error("cannot read domain list {path}: {source}")]
    DomainList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Query embedding failed
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbedError),
}

/// Errors that can occur while fetching a page.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Invalid URL format
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Connection timeout
    #[error("timeout fetching: {url}")]
    Timeout { url: String },
}

/// Errors raised by embedding backends.
#[derive(Debug, Error)]
pub enum EmbedError {
    /// Backend missing configuration (API key, model)
    #[error("embedder configuration: {0}")]
    Config(String),

    /// Backend call failed
    #[error("embedding backend failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Backend returned no vector
    #[error("embedding backend returned no vector")]
    EmptyResponse,
}

/// Result type alias for ranking operations.
pub type Result<T> = std::result::Result<T, RankError>;

/// Result type alias for fetch operations.
pub type CrawlResult<T> = std::result::Result<T, CrawlError>;

/// Result type alias for embedding operations.
pub type EmbedResult<T> = std::result::Result<T, EmbedError>;

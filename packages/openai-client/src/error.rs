//! Errors from the embeddings client.

use thiserror::Error;

/// Result type for embedding requests.
pub type Result<T> = std::result::Result<T, OpenAIError>;

#[derive(Debug, Error)]
pub enum OpenAIError {
    /// Transport failure: connect, timeout, TLS, client construction
    #[error("embedding request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Non-2xx answer, with the message from the API error envelope
    #[error("OpenAI embedding error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Body was not a valid embeddings response
    #[error("invalid embeddings response: {0}")]
    Decode(#[source] reqwest::Error),

    /// Fewer or more vectors than inputs
    #[error("expected {expected} embeddings, got {got}")]
    CountMismatch { expected: usize, got: usize },
}

impl OpenAIError {
    /// Whether the request hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

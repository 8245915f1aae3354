//! Pure OpenAI embeddings REST client
//!
//! A clean, minimal client for the OpenAI embeddings endpoint with no
//! domain-specific logic.
//!
//! # Example
//!
//! ```rust,ignore
//! use openai_client::OpenAIClient;
//!
//! let client = OpenAIClient::new(api_key)?;
//!
//! let embedding = client.create_embedding("text to embed", "text-embedding-3-small").await?;
//! let batch = client.create_embeddings(&["first", "second"], "text-embedding-3-small").await?;
//! ```

pub mod error;
pub mod types;

pub use error::{OpenAIError, Result};
pub use types::*;

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Pure OpenAI API client.
#[derive(Clone)]
pub struct OpenAIClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAIClient {
    /// Create a client with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(OpenAIError::Http)?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
        })
    }

    /// Set a custom base URL (for Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create embedding for text.
    ///
    /// Returns a vector (typically 1536 dimensions for text-embedding-3-small).
    pub async fn create_embedding(&self, text: &str, model: &str) -> Result<Vec<f32>> {
        self.send_embeddings(&EmbeddingRequest::single(model, text))
            .await?
            .into_iter()
            .next()
            .ok_or(OpenAIError::CountMismatch {
                expected: 1,
                got: 0,
            })
    }

    /// Create embeddings for multiple texts in a single request.
    ///
    /// Vectors are returned in the order of `texts`.
    pub async fn create_embeddings(&self, texts: &[&str], model: &str) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let vectors = self
            .send_embeddings(&EmbeddingRequest::batch(model, texts))
            .await?;

        if vectors.len() != texts.len() {
            return Err(OpenAIError::CountMismatch {
                expected: texts.len(),
                got: vectors.len(),
            });
        }
        Ok(vectors)
    }

    /// Send a raw embedding request.
    pub async fn send_embeddings(&self, request: &EmbeddingRequest) -> Result<Vec<Vec<f32>>> {
        debug!(model = %request.model, "Sending embedding request");

        let response = self
            .http_client
            .post(format!("{}/embeddings", self.base_url))
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, timeout = e.is_timeout(), "Embedding request failed");
                OpenAIError::Http(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<types::ErrorEnvelope>(&error_text)
                .map(|e| e.error.message)
                .unwrap_or(error_text);
            warn!(status = %status, error = %message, "OpenAI embedding error");
            return Err(OpenAIError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let embed_response: EmbeddingResponse = response
            .json()
            .await
            .map_err(OpenAIError::Decode)?;

        Ok(embed_response.into_ordered_vectors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builder() {
        let client = OpenAIClient::new("sk-test")
            .unwrap()
            .with_base_url("https://custom.api.com/");

        assert_eq!(client.api_key, "sk-test");
        assert_eq!(client.base_url(), "https://custom.api.com");
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = OpenAIClient::new("sk-secret").unwrap();
        assert!(!format!("{:?}", client).contains("sk-secret"));
    }

    #[tokio::test]
    async fn test_empty_batch_makes_no_request() {
        let client = OpenAIClient::new("sk-test")
            .unwrap()
            .with_base_url("http://127.0.0.1:9");
        let vectors = client.create_embeddings(&[], "m").await.unwrap();
        assert!(vectors.is_empty());
    }

    #[tokio::test]
    async fn test_stalled_server_times_out() {
        // Accepts connections but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = OpenAIClient::with_timeout("sk-test", Duration::from_millis(200))
            .unwrap()
            .with_base_url(format!("http://{}", addr));

        let start = std::time::Instant::now();
        let err = client
            .create_embedding("hello", "text-embedding-3-small")
            .await
            .unwrap_err();

        assert!(err.is_timeout(), "got {err:?}");
        assert!(start.elapsed() < Duration::from_secs(5));
        server.abort();
    }

    #[tokio::test]
    async fn test_error_envelope_becomes_api_error() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let body = r#"{"error":{"message":"Incorrect API key provided"}}"#;
            let response = format!(
                "HTTP/1.1 401 Unauthorized\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });

        let client = OpenAIClient::new("sk-bad")
            .unwrap()
            .with_base_url(format!("http://{}", addr));

        let err = client
            .create_embedding("hello", "text-embedding-3-small")
            .await
            .unwrap_err();

        match &err {
            OpenAIError::Api { status, message } => {
                assert_eq!(*status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
        assert!(!err.is_timeout());
        server.abort();
    }
}

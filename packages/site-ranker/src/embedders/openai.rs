//! OpenAI embeddings backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use site_ranker::embedders::OpenAiEmbedder;
//!
//! let embedder = OpenAiEmbedder::new(SecretString::new(key))?.with_model("text-embedding-3-large");
//! ```

use async_trait::async_trait;
use openai_client::OpenAIClient;
use tracing::debug;

use crate::error::{EmbedError, EmbedResult};
use crate::security::{EmbeddingCredentials, SecretString};
use crate::traits::embedder::Embedder;

/// Default hosted model.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Embedder backed by the OpenAI embeddings endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiEmbedder {
    client: OpenAIClient,
    model: String,
}

impl OpenAiEmbedder {
    /// Create an embedder with the default model.
    pub fn new(api_key: SecretString) -> EmbedResult<Self> {
        Self::from_credentials(EmbeddingCredentials {
            api_key,
            model: DEFAULT_EMBEDDING_MODEL.to_string(),
            base_url: None,
        })
    }

    /// Create from explicit credentials.
    pub fn from_credentials(credentials: EmbeddingCredentials) -> EmbedResult<Self> {
        if credentials.api_key.is_empty() {
            return Err(EmbedError::Config("OpenAI API key is empty".into()));
        }

        let mut client = OpenAIClient::new(credentials.api_key.expose()).map_err(backend_error)?;
        if let Some(url) = credentials.base_url {
            client = client.with_base_url(url);
        }

        Ok(Self {
            client,
            model: credentials.model,
        })
    }

    /// Set the embedding model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for proxies and compatible providers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.client = self.client.with_base_url(url);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

fn backend_error(e: openai_client::OpenAIError) -> EmbedError {
    EmbedError::Backend(Box::new(e))
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        debug!(model = %self.model, chars = text.len(), "Embedding text");
        let vector = self
            .client
            .create_embedding(text, &self.model)
            .await
            .map_err(backend_error)?;

        if vector.is_empty() {
            return Err(EmbedError::EmptyResponse);
        }
        Ok(vector)
    }

    async fn embed_batch(&self, texts: &[&str]) -> EmbedResult<Vec<Vec<f32>>> {
        self.client
            .create_embeddings(texts, &self.model)
            .await
            .map_err(backend_error)
    }

    fn name(&self) -> &str {
        "openai"
    }
}

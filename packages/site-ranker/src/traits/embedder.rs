//! Embedder trait for text-to-vector models.
//!
//! The model is opaque to the pipeline: identical input text must produce
//! an identical vector, and every vector from one embedder has the same
//! dimension.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::EmbedResult;

/// Embedding model abstraction.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for text.
    async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>>;

    /// Generate embeddings for multiple texts (batch operation).
    async fn embed_batch(&self, texts: &[&str]) -> EmbedResult<Vec<Vec<f32>>> {
        // Default implementation calls embed sequentially
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            results.push(self.embed(text).await?);
        }
        Ok(results)
    }

    /// Name of this embedder (for logging).
    fn name(&self) -> &str;
}

#[async_trait]
impl<T: Embedder + ?Sized> Embedder for Arc<T> {
    async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        (**self).embed(text).await
    }

    async fn embed_batch(&self, texts: &[&str]) -> EmbedResult<Vec<Vec<f32>>> {
        (**self).embed_batch(texts).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

//! OpenAI API request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Embeddings
// =============================================================================

/// Embedding input: one text or a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    Single(String),
    Batch(Vec<String>),
}

/// Embedding request.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest {
    /// Model to use (e.g., "text-embedding-3-small")
    pub model: String,

    /// Text to embed
    pub input: EmbeddingInput,

    /// Output dimension (text-embedding-3 models only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,
}

impl EmbeddingRequest {
    /// Request a single embedding.
    pub fn single(model: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: EmbeddingInput::Single(text.into()),
            dimensions: None,
        }
    }

    /// Request embeddings for several texts in one call.
    pub fn batch(model: impl Into<String>, texts: &[&str]) -> Self {
        Self {
            model: model.into(),
            input: EmbeddingInput::Batch(texts.iter().map(|t| t.to_string()).collect()),
            dimensions: None,
        }
    }

    /// Set the output dimension.
    pub fn dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

/// Embedding response.
#[derive(Debug, Deserialize)]
pub struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,

    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingData {
    /// Position of the input this vector belongs to
    #[serde(default)]
    pub index: usize,

    pub embedding: Vec<f32>,
}

impl EmbeddingResponse {
    /// Vectors in input order.
    ///
    /// The API documents `data` as ordered, but each entry carries its own
    /// index, so order by it.
    pub fn into_ordered_vectors(mut self) -> Vec<Vec<f32>> {
        self.data.sort_by_key(|d| d.index);
        self.data.into_iter().map(|d| d.embedding).collect()
    }
}

/// API error envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

//! Deterministic feature-hashing embedder.
//!
//! Each lowercased alphanumeric token is hashed with SHA-256 into one of
//! `dimension` buckets with a hash-derived sign, and the vector is
//! L2-normalised. Texts sharing vocabulary land close together; identical
//! texts produce identical vectors. No model download, no network.

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::error::EmbedResult;
use crate::traits::embedder::Embedder;

/// Default vector size, matching small sentence-transformer models.
pub const DEFAULT_DIMENSION: usize = 384;

/// Local embedder based on the hashing trick.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl HashingEmbedder {
    pub fn new() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }

    /// Set the vector dimension (at least 1).
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension.max(1);
        self
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Compute the vector synchronously.
    pub fn vector(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for token in tokens(text) {
            let hash = Sha256::digest(token.as_bytes());
            let mut bucket = [0u8; 8];
            bucket.copy_from_slice(&hash[..8]);
            let idx = (u64::from_le_bytes(bucket) % self.dimension as u64) as usize;
            let sign = if hash[8] & 1 == 0 { 1.0 } else { -1.0 };
            vector[idx] += sign;
        }

        let norm = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut vector {
                *x /= norm;
            }
        }
        vector
    }
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

#[async_trait]
impl Embedder for HashingEmbedder {
    async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn name(&self) -> &str {
        "hashing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::cosine_similarity;

    #[test]
    fn test_deterministic_and_normalised() {
        let embedder = HashingEmbedder::new();
        let a = embedder.vector("Exclusive watches for men");
        let b = embedder.vector("Exclusive watches for men");

        assert_eq!(a, b);
        assert_eq!(a.len(), DEFAULT_DIMENSION);
        let norm = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let embedder = HashingEmbedder::new();
        let a = embedder.vector("Luxury watches, men 35+");
        let b = embedder.vector("luxury WATCHES men 35");
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let embedder = HashingEmbedder::new().with_dimension(8);
        assert_eq!(embedder.vector("  ...  "), vec![0.0; 8]);
    }

    #[tokio::test]
    async fn test_embed_batch_matches_embed() {
        let embedder = HashingEmbedder::new().with_dimension(64);
        let batch = embedder.embed_batch(&["one", "two"]).await.unwrap();
        assert_eq!(batch[1], embedder.embed("two").await.unwrap());
    }
}

//! Embedding-based relevance scoring.

use crate::error::EmbedResult;
use crate::traits::embedder::Embedder;

/// Cosine similarity between two vectors.
///
/// Returns 0.0 for empty, zero-norm or mismatched vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Scores text against a query vector through an embedder.
///
/// Holds no state beyond the embedder, so one scorer can serve any number
/// of concurrent domain evaluations.
#[derive(Debug, Clone)]
pub struct RelevanceScorer<E> {
    embedder: E,
}

impl<E: Embedder> RelevanceScorer<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Embed text with the underlying model.
    pub async fn embed(&self, text: &str) -> EmbedResult<Vec<f32>> {
        self.embedder.embed(text).await
    }

    /// Similarity of two vectors.
    pub fn similarity(&self, a: &[f32], b: &[f32]) -> f32 {
        cosine_similarity(a, b)
    }

    /// Embed `text` and compare it to `query`.
    pub async fn score(&self, query: &[f32], text: &str) -> EmbedResult<f32> {
        let vector = self.embed(text).await?;
        Ok(self.similarity(query, &vector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedders::HashingEmbedder;

    #[test]
    fn test_cosine_similarity() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.001);

        let c = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &c).abs() < 0.001);

        let d = vec![-1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &d) + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }

    #[tokio::test]
    async fn test_self_similarity_is_maximal() {
        let scorer = RelevanceScorer::new(HashingEmbedder::new());
        let text = "Luxury watches for affluent men";

        let v = scorer.embed(text).await.unwrap();
        assert!((scorer.similarity(&v, &v) - 1.0).abs() < 1e-5);
        assert!((scorer.score(&v, text).await.unwrap() - 1.0).abs() < 1e-5);
    }

    #[tokio::test]
    async fn test_related_text_scores_higher() {
        let scorer = RelevanceScorer::new(HashingEmbedder::new());
        let query = scorer.embed("luxury watches affluent men").await.unwrap();

        let related = scorer
            .score(&query, "Swiss luxury watches for men")
            .await
            .unwrap();
        let unrelated = scorer
            .score(&query, "garden hose repair kit")
            .await
            .unwrap();

        assert!(related > unrelated, "{related} <= {unrelated}");
    }
}

//! Per-domain results and the final ranking.

use serde::{Deserialize, Serialize};

/// Best match found on one domain.
///
/// Created once by the domain evaluator and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainResult {
    /// Domain as given in the input list
    pub domain: String,

    /// Best-matching page, `None` when no page yielded text
    pub best_url: Option<String>,

    /// Cosine similarity of the best page (0.0 when degenerate)
    pub best_score: f32,

    /// Candidates whose extraction yielded non-empty text
    pub texts_found: usize,

    /// Candidates returned by link discovery
    pub candidates_found: usize,
}

impl DomainResult {
    /// A result with no usable content.
    pub fn degenerate(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            best_url: None,
            best_score: 0.0,
            texts_found: 0,
            candidates_found: 0,
        }
    }

    /// Score as a percentage rounded to two decimals.
    pub fn match_percentage(&self) -> f64 {
        (f64::from(self.best_score) * 100.0 * 100.0).round() / 100.0
    }

    /// Whether any candidate produced text.
    pub fn has_content(&self) -> bool {
        self.texts_found > 0
    }

    /// Best URL or the empty string.
    pub fn best_url_or_empty(&self) -> &str {
        self.best_url.as_deref().unwrap_or("")
    }
}

/// Domain results ordered by score, highest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingReport {
    results: Vec<DomainResult>,
}

impl RankingReport {
    /// Build a report from results given in input order.
    ///
    /// The sort is stable, so equal scores keep their input order.
    pub fn from_input_order(mut results: Vec<DomainResult>) -> Self {
        results.sort_by(|a, b| {
            b.best_score
                .partial_cmp(&a.best_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { results }
    }

    /// Ranked results.
    pub fn results(&self) -> &[DomainResult] {
        &self.results
    }

    pub fn iter(&self) -> impl Iterator<Item = &DomainResult> {
        self.results.iter()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Highest-ranked result.
    pub fn top(&self) -> Option<&DomainResult> {
        self.results.first()
    }

    /// Number of domains where at least one page yielded text.
    pub fn domains_with_content(&self) -> usize {
        self.results.iter().filter(|r| r.has_content()).count()
    }

    /// Look up a domain's result.
    pub fn get(&self, domain: &str) -> Option<&DomainResult> {
        self.results.iter().find(|r| r.domain == domain)
    }
}

impl<'a> IntoIterator for &'a RankingReport {
    type Item = &'a DomainResult;
    type IntoIter = std::slice::Iter<'a, DomainResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

//! Per-domain evaluation: discover, extract, score, keep the best.

use tracing::{debug, info, warn};

use crate::crawlers::{LinkDiscoverer, RateLimitedFetcher, TextExtractor};
use crate::scoring::RelevanceScorer;
use crate::traits::{embedder::Embedder, fetcher::Fetcher};
use crate::types::{config::RankConfig, page::ExtractedText, report::DomainResult};

/// Scores one domain's shallow pages against a query vector.
///
/// Every request goes through a per-host limiter built from
/// `config.host_delay()`; a zero delay disables it.
pub struct DomainEvaluator<F: Fetcher, E> {
    fetcher: RateLimitedFetcher<F>,
    scorer: RelevanceScorer<E>,
    config: RankConfig,
}

impl<F: Fetcher, E: Embedder> DomainEvaluator<F, E> {
    pub fn new(fetcher: F, embedder: E, config: RankConfig) -> Self {
        Self {
            fetcher: RateLimitedFetcher::new(fetcher, config.host_delay()),
            scorer: RelevanceScorer::new(embedder),
            config,
        }
    }

    /// The rate-limited fetcher all page requests go through.
    pub fn fetcher(&self) -> &RateLimitedFetcher<F> {
        &self.fetcher
    }

    pub fn scorer(&self) -> &RelevanceScorer<E> {
        &self.scorer
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Find the candidate page that best matches `query`.
    ///
    /// Candidates are visited in discovery order and a later candidate only
    /// replaces the best on a strictly higher score. Never fails: a domain
    /// with no reachable text yields a degenerate result.
    pub async fn evaluate(&self, domain: &str, query: &[f32]) -> DomainResult {
        let links = LinkDiscoverer::new(&self.fetcher)
            .with_max_links(self.config.max_links)
            .discover(domain)
            .await;

        if links.is_empty() {
            info!(domain = %domain, "No candidate links");
            return DomainResult::degenerate(domain);
        }

        let extractor =
            TextExtractor::new(&self.fetcher).with_max_chars(self.config.max_text_chars);

        let mut best: Option<(String, f32)> = None;
        let mut texts_found = 0usize;

        for (idx, link) in links.iter().enumerate() {
            debug!(
                domain = %domain,
                url = %link,
                link = idx + 1,
                of = links.len(),
                "Visiting candidate"
            );

            let text = match extractor.extract(link).await {
                ExtractedText::Text(text) => text,
                ExtractedText::FetchFailed | ExtractedText::Empty => {
                    debug!(url = %link, "No text");
                    continue;
                }
            };
            texts_found += 1;
            let chars = text.chars().count();

            let score = match self.scorer.score(query, &text).await {
                Ok(score) => score,
                Err(e) => {
                    warn!(url = %link, error = %e, "Failed to embed page text");
                    continue;
                }
            };
            debug!(url = %link, chars, score, "Scored candidate");

            let improves = best.as_ref().map_or(true, |(_, current)| score > *current);
            if improves {
                best = Some((link.clone(), score));
            }
        }

        let (best_url, best_score) = match best {
            Some((url, score)) => (Some(url), score),
            None => (None, 0.0),
        };

        info!(
            domain = %domain,
            candidates = links.len(),
            texts_found,
            best_score,
            best_url = best_url.as_deref().unwrap_or(""),
            "Evaluated domain"
        );

        DomainResult {
            domain: domain.to_string(),
            best_url,
            best_score,
            texts_found,
            candidates_found: links.len(),
        }
    }
}

//! Ranking aggregator: evaluate every domain and order the results.

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::error::{RankError, Result};
use crate::pipeline::evaluate::DomainEvaluator;
use crate::pipeline::progress::{Progress, ProgressObserver};
use crate::traits::{embedder::Embedder, fetcher::Fetcher};
use crate::types::{
    config::RankConfig,
    report::{DomainResult, RankingReport},
};

/// Join product and audience into the query text.
pub fn build_query(product: &str, audience: &str) -> String {
    format!("{} {}", product, audience)
}

/// Ranks domains by how well their best page matches a product and audience.
///
/// # Example
///
/// ```rust,ignore
/// let ranker = Ranker::new(fetcher, embedder, RankConfig::default())
///     .with_observer(LogProgress);
/// let report = ranker.rank(&domains, "Luxury watches", "Affluent men").await?;
/// ```
pub struct Ranker<F: Fetcher, E> {
    evaluator: DomainEvaluator<F, E>,
    observer: Option<Arc<dyn ProgressObserver>>,
}

impl<F: Fetcher, E: Embedder> Ranker<F, E> {
    pub fn new(fetcher: F, embedder: E, config: RankConfig) -> Self {
        Self {
            evaluator: DomainEvaluator::new(fetcher, embedder, config),
            observer: None,
        }
    }

    /// Report progress after each domain.
    pub fn with_observer(mut self, observer: impl ProgressObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Rank `domains` against `product` and `audience`.
    ///
    /// Inputs are validated and the query embedded before any page is
    /// fetched. The report holds one row per input domain, sorted by score
    /// descending with ties in input order.
    pub async fn rank(
        &self,
        domains: &[String],
        product: &str,
        audience: &str,
    ) -> Result<RankingReport> {
        if product.trim().is_empty() {
            return Err(RankError::InvalidInput {
                reason: "product description is empty".into(),
            });
        }
        if audience.trim().is_empty() {
            return Err(RankError::InvalidInput {
                reason: "audience description is empty".into(),
            });
        }
        if domains.is_empty() {
            info!("No domains to rank");
            return Ok(RankingReport::default());
        }

        let query = build_query(product, audience);
        let query_vector = self.evaluator.scorer().embed(&query).await?;

        let total = domains.len();
        let concurrency = self.evaluator.config().domain_concurrency.max(1);
        info!(domains = total, concurrency, "Ranking domains");

        let start = Instant::now();
        let query_vector = query_vector.as_slice();
        let mut slots: Vec<Option<DomainResult>> = vec![None; total];
        let mut completed = 0usize;

        let mut evaluations = stream::iter(domains.iter().enumerate())
            .map(|(idx, domain)| async move {
                (idx, self.evaluator.evaluate(domain, query_vector).await)
            })
            .buffer_unordered(concurrency);

        while let Some((idx, result)) = evaluations.next().await {
            completed += 1;
            if let Some(observer) = &self.observer {
                observer.on_domain_done(&Progress::new(completed, total, start.elapsed()), &result);
            }
            slots[idx] = Some(result);
            self.evaluator.fetcher().prune();
        }

        let report = RankingReport::from_input_order(slots.into_iter().flatten().collect());
        info!(
            domains = report.len(),
            with_content = report.domains_with_content(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Ranking complete"
        );
        Ok(report)
    }
}

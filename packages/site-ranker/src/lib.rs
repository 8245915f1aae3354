//! Site Relevance Ranking Library
//!
//! Ranks candidate websites by how well their content matches a product and
//! its target audience. For every domain the homepage is fetched, shallow
//! same-site links are collected, each page's visible text is embedded and
//! compared to the query by cosine similarity, and the best page wins.
//!
//! # Usage
//!
//! ```rust,ignore
//! use site_ranker::{HashingEmbedder, HttpFetcher, RankConfig, Ranker};
//!
//! // Requests to one host are spaced by `config.host_delay()` inside the ranker
//! let config = RankConfig::default();
//! let fetcher = HttpFetcher::from_config(&config)?;
//! let ranker = Ranker::new(fetcher, HashingEmbedder::new(), config);
//!
//! let domains = site_ranker::load_domains("sites.txt")?;
//! let report = ranker.rank(&domains, "Luxury watches", "Affluent men 35+").await?;
//! site_ranker::save_csv(&report, "results.csv")?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator abstractions (Fetcher, Embedder)
//! - [`types`] - Configuration, pages and reports
//! - [`crawlers`] - HTTP fetching, rate limiting, link discovery, text extraction
//! - [`embedders`] - Embedding models and the shared model accessor
//! - [`scoring`] - Cosine similarity and the relevance scorer
//! - [`pipeline`] - Domain evaluation and ranking
//! - [`export`] - CSV output
//! - [`security`] - Credential handling
//! - [`testing`] - Mock implementations for testing

pub mod crawlers;
pub mod embedders;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod scoring;
pub mod security;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{CrawlError, EmbedError, RankError, Result};
pub use traits::{embedder::Embedder, fetcher::Fetcher};
pub use types::{
    config::RankConfig,
    page::{ExtractedText, FetchedPage},
    report::{DomainResult, RankingReport},
};

pub use crawlers::{FetcherExt, HttpFetcher, LinkDiscoverer, RateLimitedFetcher, TextExtractor};
pub use embedders::{shared_embedder, try_shared_embedder, HashingEmbedder};
pub use export::{save_csv, to_csv, write_csv};
pub use pipeline::{
    build_query, load_domains, parse_domains, DomainEvaluator, LogProgress, Progress,
    ProgressObserver, Ranker,
};
pub use scoring::{cosine_similarity, RelevanceScorer};
pub use security::{EmbeddingCredentials, SecretString};

#[cfg(feature = "openai")]
pub use embedders::OpenAiEmbedder;

// Re-export testing utilities
pub use testing::{MockEmbedder, MockFetcher};

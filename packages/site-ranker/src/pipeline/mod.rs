//! Ranking pipeline.
//!
//! - Domain list loading
//! - Per-domain evaluation (discover → extract → score)
//! - Aggregation into a sorted report, with progress reporting

pub mod domains;
pub mod evaluate;
pub mod progress;
pub mod rank;

pub use domains::{load_domains, parse_domains};
pub use evaluate::DomainEvaluator;
pub use progress::{format_duration, LogProgress, Progress, ProgressObserver};
pub use rank::{build_query, Ranker};

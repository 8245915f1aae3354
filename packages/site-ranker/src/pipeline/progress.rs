//! Progress reporting for long ranking runs.

use std::time::Duration;
use tracing::info;

use crate::types::report::DomainResult;

/// Snapshot taken after a domain finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub elapsed: Duration,
}

impl Progress {
    pub fn new(completed: usize, total: usize, elapsed: Duration) -> Self {
        Self {
            completed,
            total,
            elapsed,
        }
    }

    /// Completed share in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed as f64 / self.total as f64
    }

    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }

    /// Remaining time extrapolated from the average time per domain so far.
    pub fn eta(&self) -> Option<Duration> {
        if self.completed == 0 {
            return None;
        }
        Some(
            self.elapsed
                .mul_f64(self.remaining() as f64 / self.completed as f64),
        )
    }

    /// ETA as `"<m> min <s> sec"`, or `"unknown"` before the first domain.
    pub fn eta_display(&self) -> String {
        self.eta()
            .map(format_duration)
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Format whole minutes and seconds, e.g. `"2 min 5 sec"`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{} min {} sec", secs / 60, secs % 60)
}

/// Receives a notification after every evaluated domain.
pub trait ProgressObserver: Send + Sync {
    fn on_domain_done(&self, progress: &Progress, result: &DomainResult);
}

/// Observer that reports progress through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_domain_done(&self, progress: &Progress, result: &DomainResult) {
        info!(
            domain = %result.domain,
            completed = progress.completed,
            total = progress.total,
            percent = (progress.fraction() * 100.0).round() as u64,
            eta = %progress.eta_display(),
            "Domain done"
        );
    }
}

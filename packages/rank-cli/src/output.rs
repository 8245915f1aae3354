//! Terminal rendering: progress line and results table.

use colored::{ColoredString, Colorize};
use std::io::Write;

use site_ranker::{DomainResult, Progress, ProgressObserver, RankingReport};

/// Prints one progress line per finished domain to stderr.
pub struct TerminalProgress;

impl ProgressObserver for TerminalProgress {
    fn on_domain_done(&self, progress: &Progress, result: &DomainResult) {
        let status = if result.has_content() {
            format!("{:.2}%", result.match_percentage()).normal()
        } else {
            "no content".dimmed()
        };

        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "{} {:>3}%  {}  {}  {}",
            format!("[{}/{}]", progress.completed, progress.total).bright_blue(),
            (progress.fraction() * 100.0).round() as u64,
            result.domain,
            status,
            format!("ETA {}", progress.eta_display()).dimmed()
        );
    }
}

fn colored_percent(result: &DomainResult) -> ColoredString {
    let pct = result.match_percentage();
    let text = format!("{:>7.2}%", pct);
    if !result.has_content() {
        text.dimmed()
    } else if pct >= 50.0 {
        text.bright_green().bold()
    } else if pct >= 25.0 {
        text.yellow()
    } else {
        text.normal()
    }
}

/// Print the ranking as a table, optionally only the first `limit` rows.
pub fn print_table(report: &RankingReport, limit: Option<usize>) {
    let width = report
        .iter()
        .map(|r| r.domain.chars().count())
        .max()
        .unwrap_or(0)
        .max("Domain".len());

    println!(
        "{}",
        format!(
            "{:>4}  {:<width$}  {:>8}  {:>5}  {}",
            "#",
            "Domain",
            "Match",
            "Texts",
            "Best URL",
            width = width
        )
        .bold()
    );

    for (rank, result) in report.iter().take(limit.unwrap_or(usize::MAX)).enumerate() {
        println!(
            "{:>4}  {:<width$}  {}  {:>5}  {}",
            rank + 1,
            result.domain,
            colored_percent(result),
            result.texts_found,
            result.best_url_or_empty(),
            width = width
        );
    }
}

/// `"N/M domains had content"` summary line.
pub fn content_summary(report: &RankingReport) -> String {
    format!(
        "{}/{} domains had content",
        report.domains_with_content(),
        report.len()
    )
}

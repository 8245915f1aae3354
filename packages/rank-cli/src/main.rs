//! Site relevance ranking CLI
//!
//! Reads a domain list, ranks every domain against a product and audience
//! description, prints the ranking and writes it as CSV.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_ranker::{
    load_domains, save_csv, Embedder, HttpFetcher, LogProgress, Ranker,
};

mod config;
mod output;

use config::Cli;
use output::{content_summary, print_table, TerminalProgress};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,site_ranker=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

async fn run(cli: Cli) -> Result<()> {
    let domains = load_domains(&cli.sites)?;
    tracing::info!(sites = %cli.sites.display(), count = domains.len(), "Domain list loaded");

    let config = cli.rank_config();
    let embedder = cli.embedder().await?;
    tracing::info!(embedder = embedder.name(), "Embedder ready");

    let fetcher = HttpFetcher::from_config(&config).context("Failed to build HTTP client")?;

    let ranker = Ranker::new(fetcher, embedder, config);
    let ranker = if cli.quiet {
        ranker.with_observer(LogProgress)
    } else {
        ranker.with_observer(TerminalProgress)
    };

    let report = ranker
        .rank(&domains, &cli.product, &cli.audience)
        .await
        .context("Ranking failed")?;

    println!();
    print_table(&report, cli.top);
    println!();
    println!("{}", content_summary(&report).bright_cyan());

    if !cli.no_csv {
        save_csv(&report, &cli.output)
            .with_context(|| format!("Failed to write {}", cli.output.display()))?;
        println!("Results written to {}", cli.output.display().to_string().bold());
    }

    Ok(())
}

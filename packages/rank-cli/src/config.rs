//! Command-line and environment configuration.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use site_ranker::embedders::DEFAULT_EMBEDDING_MODEL;
use site_ranker::{
    shared_embedder, EmbedError, Embedder, EmbeddingCredentials, HashingEmbedder,
    OpenAiEmbedder, RankConfig,
};

/// Embedding backend choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Local feature-hashing embedder (no network)
    Hashing,
    /// OpenAI embeddings API (needs OPENAI_API_KEY)
    Openai,
}

#[derive(Debug, Parser)]
#[command(name = "site-rank")]
#[command(about = "Rank websites by relevance to a product and its audience")]
#[command(version)]
pub struct Cli {
    /// File with one domain per line
    #[arg(short, long, env = "SITES_FILE", default_value = "sites.txt")]
    pub sites: PathBuf,

    /// Product description
    #[arg(short, long, env = "PRODUCT")]
    pub product: String,

    /// Target audience description
    #[arg(short, long, env = "AUDIENCE")]
    pub audience: String,

    /// Where to write the CSV report
    #[arg(short, long, env = "OUTPUT_FILE", default_value = "results.csv")]
    pub output: PathBuf,

    /// Skip writing the CSV report
    #[arg(long)]
    pub no_csv: bool,

    /// Embedding backend
    #[arg(long, env = "EMBEDDING_BACKEND", value_enum, default_value_t = Backend::Hashing)]
    pub backend: Backend,

    /// Embedding model (OpenAI backend)
    #[arg(long, env = "EMBEDDING_MODEL", default_value = DEFAULT_EMBEDDING_MODEL)]
    pub model: String,

    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub openai_api_key: Option<String>,

    /// Maximum candidate links per domain
    #[arg(long, default_value_t = 30)]
    pub max_links: usize,

    /// Maximum characters of text per page
    #[arg(long, default_value_t = 3000)]
    pub max_chars: usize,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub timeout_ms: u64,

    /// Minimum spacing between requests to one host, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub host_delay_ms: u64,

    /// Domains evaluated at once
    #[arg(short = 'j', long, default_value_t = 1)]
    pub concurrency: usize,

    /// Only print the top N rows
    #[arg(long)]
    pub top: Option<usize>,

    /// Hide the progress line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Library config from the command line.
    pub fn rank_config(&self) -> RankConfig {
        RankConfig::default()
            .with_max_links(self.max_links)
            .with_max_text_chars(self.max_chars)
            .with_request_timeout(Duration::from_millis(self.timeout_ms))
            .with_host_delay(Duration::from_millis(self.host_delay_ms))
            .with_domain_concurrency(self.concurrency)
    }

    /// Initialise the process-wide embedder for the chosen backend.
    pub async fn embedder(&self) -> Result<Arc<dyn Embedder>> {
        let backend = self.backend;
        let model = self.model.clone();
        let api_key = self.openai_api_key.clone();

        shared_embedder(|| async move {
            match backend {
                Backend::Hashing => Ok(Arc::new(HashingEmbedder::new()) as Arc<dyn Embedder>),
                Backend::Openai => {
                    let key = api_key
                        .ok_or_else(|| EmbedError::Config("OPENAI_API_KEY not set".into()))?;
                    let embedder =
                        OpenAiEmbedder::from_credentials(EmbeddingCredentials::new(key, model))?;
                    Ok(Arc::new(embedder) as Arc<dyn Embedder>)
                }
            }
        })
        .await
        .context("Failed to initialise embedding model")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from([
            "site-rank",
            "--product",
            "Luxury watches",
            "--audience",
            "Affluent men 35+",
        ])
        .unwrap();

        assert_eq!(cli.product, "Luxury watches");
        assert_eq!(cli.max_links, 30);

        let config = cli.rank_config();
        assert_eq!(config.max_text_chars, 3000);
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.host_delay(), Duration::from_millis(500));
        assert_eq!(config.domain_concurrency, 1);
    }

    #[test]
    fn test_parse_overrides() {
        let cli = Cli::try_parse_from([
            "site-rank",
            "-p",
            "watches",
            "-a",
            "men",
            "--backend",
            "openai",
            "-j",
            "0",
            "--top",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.backend, Backend::Openai);
        assert_eq!(cli.top, Some(5));
        assert_eq!(cli.rank_config().domain_concurrency, 1);
    }
}

//! Newline-delimited domain lists.

use std::path::Path;
use tracing::debug;

use crate::error::{RankError, Result};

/// Split text into seeds: one per non-blank line, trimmed, order preserved.
pub fn parse_domains(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Read and parse a domain list file.
pub fn load_domains(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| RankError::DomainList {
        path: path.to_path_buf(),
        source,
    })?;

    let domains = parse_domains(&text);
    debug!(path = %path.display(), count = domains.len(), "Loaded domain list");
    Ok(domains)
}

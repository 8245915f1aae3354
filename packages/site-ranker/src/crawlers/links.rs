//! Same-site link discovery from a seed page.
//!
//! Only shallow links are kept: the path may have at most
//! [`MAX_PATH_SEGMENTS`] non-empty segments, which approximates "top-level or
//! second-level pages" without crawling deeper.

use indexmap::IndexSet;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::traits::fetcher::Fetcher;

/// Deepest path still considered a candidate.
pub const MAX_PATH_SEGMENTS: usize = 2;

/// Default cap on candidates per domain.
pub const DEFAULT_MAX_LINKS: usize = 30;

/// Add `https://` to seeds given without a scheme.
pub fn normalize_seed(seed: &str) -> String {
    let seed = seed.trim();
    if seed.contains("://") {
        seed.to_string()
    } else {
        format!("https://{}", seed)
    }
}

/// Number of non-empty `/`-separated path segments.
pub fn path_segment_count(url: &Url) -> usize {
    url.path().split('/').filter(|s| !s.is_empty()).count()
}

/// Whether the URL's path is shallow enough to be a candidate.
pub fn is_shallow(url: &Url) -> bool {
    path_segment_count(url) <= MAX_PATH_SEGMENTS
}

/// Whether `url` has the same network location (host and port) as `seed`.
pub fn same_site(url: &Url, seed: &Url) -> bool {
    url.host_str().is_some() && url.host_str() == seed.host_str() && url.port() == seed.port()
}

/// Collect same-site, shallow links from an HTML document.
///
/// Anchors are visited in document order and the first `max_links` distinct
/// matches win. URLs are compared as strings after resolution against `seed`;
/// no other canonicalisation is applied.
pub fn candidate_links(html: &str, seed: &Url, max_links: usize) -> IndexSet<String> {
    let mut links = IndexSet::new();
    if max_links == 0 {
        return links;
    }

    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return links,
    };

    let document = Html::parse_document(html);
    for href in document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
    {
        let resolved = match seed.join(href) {
            Ok(url) => url,
            Err(_) => continue,
        };

        if same_site(&resolved, seed) && is_shallow(&resolved) {
            links.insert(resolved.to_string());
            if links.len() >= max_links {
                break;
            }
        }
    }

    links
}

/// Finds candidate pages linked from a domain's homepage.
///
/// # Example
///
/// ```rust,ignore
/// let discoverer = LinkDiscoverer::new(&fetcher).with_max_links(10);
/// let links = discoverer.discover("https://example.com/").await;
/// ```
pub struct LinkDiscoverer<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
    max_links: usize,
}

impl<'a, F: Fetcher + ?Sized> LinkDiscoverer<'a, F> {
    /// Create a discoverer with the default link cap.
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            fetcher,
            max_links: DEFAULT_MAX_LINKS,
        }
    }

    /// Set the link cap.
    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.max_links = max_links;
        self
    }

    /// Fetch the seed page and return its candidate links.
    ///
    /// Any failure (bad seed, network error, non-2xx, non-textual body)
    /// yields an empty set.
    pub async fn discover(&self, seed_url: &str) -> IndexSet<String> {
        let seed = match Url::parse(&normalize_seed(seed_url)) {
            Ok(url) => url,
            Err(e) => {
                warn!(seed = %seed_url, error = %e, "Invalid seed URL");
                return IndexSet::new();
            }
        };

        let page = match self.fetcher.fetch(seed.as_str()).await {
            Ok(page) => page,
            Err(e) => {
                warn!(seed = %seed, error = %e, "Failed to fetch seed page");
                return IndexSet::new();
            }
        };

        if !page.is_textual() {
            debug!(seed = %seed, content_type = ?page.content_type, "Seed page is not textual");
            return IndexSet::new();
        }

        let links = candidate_links(&page.body, &seed, self.max_links);
        info!(seed = %seed, links = links.len(), "Discovered candidate links");
        links
    }
}

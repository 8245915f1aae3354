//! Fetching, link discovery and text extraction.
//!
//! - `HttpFetcher` - GET-only reqwest fetcher with timeout and redirect limit
//! - `RateLimitedFetcher` - Wrapper that spaces requests per host
//! - `LinkDiscoverer` - Same-site, shallow candidate links from a seed page
//! - `TextExtractor` - Visible text of a page, bounded in length

pub mod http;
pub mod links;
pub mod rate_limited;
pub mod text;

pub use http::HttpFetcher;
pub use links::{candidate_links, normalize_seed, LinkDiscoverer};
pub use rate_limited::{FetcherExt, RateLimitedFetcher};
pub use text::{visible_text, TextExtractor};

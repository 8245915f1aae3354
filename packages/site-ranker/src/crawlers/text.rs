//! Visible-text extraction from fetched pages.

use scraper::{Html, Node};
use tracing::{debug, warn};

use crate::traits::fetcher::Fetcher;
use crate::types::page::ExtractedText;

/// Default cap on extracted text, in characters.
pub const DEFAULT_MAX_TEXT_CHARS: usize = 3000;

/// Elements whose text content is never shown to a reader.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Concatenate the visible text nodes of an HTML document.
///
/// Whitespace inside each node is collapsed, nodes are joined with a single
/// space, and the result holds at most `max_chars` characters.
pub fn visible_text(html: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);
    let mut text = String::new();
    let mut chars = 0usize;

    for node in document.tree.root().descendants() {
        if chars >= max_chars {
            break;
        }

        let fragment = match node.value() {
            Node::Text(fragment) => fragment,
            _ => continue,
        };

        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(el) => HIDDEN_ELEMENTS.contains(&el.name()),
            _ => false,
        });
        if hidden {
            continue;
        }

        let mut words = fragment.split_whitespace().peekable();
        if words.peek().is_none() {
            continue;
        }

        if !text.is_empty() {
            text.push(' ');
            chars += 1;
        }
        for (i, word) in words.enumerate() {
            if i > 0 {
                text.push(' ');
                chars += 1;
            }
            text.push_str(word);
            chars += word.chars().count();
        }
    }

    truncate_chars(text, max_chars)
}

/// Truncate to at most `max_chars` characters.
pub fn truncate_chars(mut text: String, max_chars: usize) -> String {
    let cut = text.char_indices().nth(max_chars).map(|(idx, _)| idx);
    if let Some(idx) = cut {
        text.truncate(idx);
    }
    text
}

/// Fetches pages and returns their visible text.
pub struct TextExtractor<'a, F: Fetcher + ?Sized> {
    fetcher: &'a F,
    max_chars: usize,
}

impl<'a, F: Fetcher + ?Sized> TextExtractor<'a, F> {
    /// Create an extractor with the default text cap.
    pub fn new(fetcher: &'a F) -> Self {
        Self {
            fetcher,
            max_chars: DEFAULT_MAX_TEXT_CHARS,
        }
    }

    /// Set the text cap.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Fetch a URL and classify the outcome.
    ///
    /// Never fails: network and parse problems become `FetchFailed`.
    pub async fn extract(&self, url: &str) -> ExtractedText {
        let page = match self.fetcher.fetch(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to fetch page text");
                return ExtractedText::FetchFailed;
            }
        };

        if !page.is_textual() {
            debug!(url = %url, content_type = ?page.content_type, "Skipping non-textual page");
            return ExtractedText::FetchFailed;
        }

        let extracted = ExtractedText::from_text(visible_text(&page.body, self.max_chars));
        if extracted == ExtractedText::Empty {
            debug!(url = %url, "Page has no visible text");
        }
        extracted
    }

    /// Fetch a URL and return its text, or an empty string when unavailable.
    pub async fn extract_text(&self, url: &str) -> String {
        self.extract(url).await.into_text()
    }
}

//! Page types produced by fetchers and the text extractor.

use serde::{Deserialize, Serialize};

/// A fetched HTTP response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,

    /// URL after redirects
    pub final_url: String,

    /// HTTP status code
    pub status: u16,

    /// Content type from headers
    pub content_type: Option<String>,

    /// Response body as text
    pub body: String,
}

impl FetchedPage {
    /// Create a successful HTML page with no redirect.
    pub fn html(url: impl Into<String>, body: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            final_url: url.clone(),
            url,
            status: 200,
            content_type: Some("text/html; charset=utf-8".to_string()),
            body: body.into(),
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the status code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Whether the fetch returned a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the body can be parsed as markup or text.
    ///
    /// A missing content type is treated as textual.
    pub fn is_textual(&self) -> bool {
        match &self.content_type {
            None => true,
            Some(ct) => {
                let ct = ct.to_ascii_lowercase();
                ct.starts_with("text/") || ct.contains("html") || ct.contains("xml")
            }
        }
    }
}

/// Outcome of extracting visible text from one URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedText {
    /// Non-empty visible text, already truncated
    Text(String),

    /// The page could not be fetched or was not textual
    FetchFailed,

    /// The page was fetched but had no visible text
    Empty,
}

impl ExtractedText {
    /// Wrap a string, mapping blank text to `Empty`.
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(text)
        }
    }

    /// The text, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Collapse into a string where empty means unavailable.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::FetchFailed | Self::Empty => String::new(),
        }
    }
}

//! API keys held in secure memory.
//!
//! Uses the `secrecy` crate so keys never show up in logs or debug output.

use secrecy::{ExposeSecret, SecretBox};
use std::fmt;

/// A secret string that won't be logged or displayed.
pub struct SecretString(SecretBox<str>);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretBox::new(Box::from(value.into().as_str())))
    }

    /// Expose the secret value.
    ///
    /// Only call this at the point of use (building a request header).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().trim().is_empty()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.expose())
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Key, model and endpoint for a hosted embedding model.
#[derive(Clone)]
pub struct EmbeddingCredentials {
    pub api_key: SecretString,
    pub model: String,
    /// Override for proxies and compatible providers
    pub base_url: Option<String>,
}

impl EmbeddingCredentials {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

impl fmt::Debug for EmbeddingCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingCredentials")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_redacted() {
        let secret = SecretString::new("sk-super-secret-key");
        assert_eq!(format!("{:?}", secret), "[REDACTED]");
        assert_eq!(format!("{}", secret), "[REDACTED]");
        assert_eq!(secret.expose(), "sk-super-secret-key");
    }

    #[test]
    fn test_blank_secret() {
        assert!(SecretString::new("   ").is_empty());
        assert!(!SecretString::from("sk-x").is_empty());
    }

    #[test]
    fn test_credentials_debug_hides_key() {
        let creds = EmbeddingCredentials::new("sk-secret", "text-embedding-3-small")
            .with_base_url("http://localhost:8080/v1");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("text-embedding-3-small"));
        assert!(debug.contains("localhost:8080"));
    }
}

//! Credential handling for remote embedding backends.

mod credentials;

pub use credentials::{EmbeddingCredentials, SecretString};

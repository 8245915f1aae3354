//! Embedding model implementations.
//!
//! - `HashingEmbedder` - Deterministic local bag-of-words embedder
//! - `OpenAiEmbedder` - OpenAI embeddings API (requires `openai` feature)
//! - `shared_embedder` - Process-wide, lazily initialised model accessor

mod hashing;
mod shared;

#[cfg(feature = "openai")]
mod openai;

pub use hashing::{HashingEmbedder, DEFAULT_DIMENSION};
pub use shared::{shared_embedder, try_shared_embedder};

#[cfg(feature = "openai")]
pub use openai::{OpenAiEmbedder, DEFAULT_EMBEDDING_MODEL};

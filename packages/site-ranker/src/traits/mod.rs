//! Core trait abstractions for the ranking library.
//!
//! These traits define the collaborators the pipeline depends on:
//! an HTTP fetcher and an embedding model.

pub mod embedder;
pub mod fetcher;

//! Data types shared across the ranking pipeline.

pub mod config;
pub mod page;
pub mod report;

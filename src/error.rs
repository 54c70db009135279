//! Error types for the snapshot loader.
//!
//! The analytics core itself is total — malformed dates and phones degrade to
//! `None`/empty and page indexes clamp. The only fallible surface is parsing
//! the upstream response body before enrichment runs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("empty response body")]
    EmptyBody,

    #[error("invalid snapshot JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

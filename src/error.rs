//! Error handling for alignment operations.
//!
//! All fallible public APIs return [`Result`]. Expected terminal conditions
//! (an exhausted candidate store, no similarity above threshold) are *not*
//! errors: they surface as `Option::None` from the store and end the run.

use std::io;
use thiserror::Error;

/// Result type for grapnel operations.
pub type Result<T> = std::result::Result<T, AlignError>;

/// Errors that can occur while loading inputs or running an alignment.
#[derive(Debug, Error)]
pub enum AlignError {
    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line of an input file could not be parsed.
    #[error("{path}:{line}: {msg}")]
    Parse {
        path: String,
        line: usize,
        msg: String,
    },

    /// A node name referenced by the seed or similarity file does not
    /// appear in the corresponding edge list.
    #[error("unknown node {name:?} in {path}")]
    UnknownNode { name: String, path: String },

    /// A non-finite similarity was presented for insertion. Rejected at the
    /// store boundary rather than silently ordered by `total_cmp`.
    #[error("malformed similarity score: {0}")]
    MalformedScore(f64),

    /// The seed file's two columns resolved to sequences of unequal length.
    #[error("seed list mismatch: {left} entries for graph 1, {right} for graph 2")]
    SeedMismatch { left: usize, right: usize },

    /// Rejected configuration, such as a promotion probability outside (0, 1).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The JSON report could not be serialized.
    #[error("report serialization: {0}")]
    Report(#[from] serde_json::Error),
}

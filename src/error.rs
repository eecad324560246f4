//! Error types for WordGraph.
//!
//! Query operations never fail: unknown vertices degrade to empty or
//! sentinel results. Errors only arise when construction input cannot be
//! interpreted (bad JSON, empty word list) or from CLI I/O.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T, E = WordGraphError> = std::result::Result<T, E>;

/// All errors the crate can produce.
#[derive(Debug, Error)]
pub enum WordGraphError {
    /// Construction input could not be interpreted as a graph description.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Underlying I/O failure (word list or adjacency file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure on CLI output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

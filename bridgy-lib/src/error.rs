//! Error types for Bridgy

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Bridgy operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or configuring the engine.
///
/// Retrieval itself is total: scoring, ranking and answer composition never fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read a corpus file
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Corpus data is not in a recognised JSON shape
    #[error("corpus parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two documents share the same id
    #[error("duplicate document id: {0}")]
    DuplicateId(String),

    /// A document is missing a required field
    #[error("invalid document {id:?}: {reason}")]
    InvalidDocument { id: String, reason: String },

    /// Invalid input provided
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

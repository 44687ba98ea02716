//! Error types for Historial
//!
//! Every failure surfaces directly to the caller; there is no local
//! recovery, retry, or suppression.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Historial error types
#[derive(Error, Debug)]
pub enum Error {
    /// A payload value cannot be represented as JSON
    #[error("run record cannot be serialized to JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    /// History file cannot be opened, written, or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored line is non-blank but is not a valid run record
    #[error("history file line {line} is not a valid run record: {source}")]
    Parse {
        /// 1-based line number of the malformed line
        line: usize,
        /// Underlying JSON parse failure
        source: serde_json::Error,
    },
}

//! Error types for JSON file storage.

use std::path::PathBuf;

/// Errors that can occur while reading or writing a store file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file does not exist.
    #[error("store file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A filesystem operation failed.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

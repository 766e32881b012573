//! Error types for the wellness log.

/// Errors that can occur while appending to the wellness log.
#[derive(Debug, thiserror::Error)]
pub enum WellnessError {
    /// Writing the log file failed.
    #[error("failed to write wellness log: {0}")]
    Store(#[from] voxdesk_store::StoreError),
}

//! Error types for the order store.

/// Errors that can occur while persisting an order.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// Writing the order file failed.
    #[error("failed to save order: {0}")]
    Store(#[from] voxdesk_store::StoreError),
}

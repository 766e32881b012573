//! Error types for the fraud case store.

use voxdesk_types::CaseStatus;

/// Errors that can occur while resolving a fraud case.
#[derive(Debug, thiserror::Error)]
pub enum FraudError {
    /// Resolution was attempted before any case was looked up.
    #[error("no active fraud case; look the customer up first")]
    NoActiveCase,

    /// The requested status change is not part of the case lifecycle.
    #[error("cannot move case from {from} to {to}")]
    InvalidTransition { from: CaseStatus, to: CaseStatus },

    /// The active case no longer exists in the case file.
    #[error("case for {0} is not in the case file")]
    CaseNotInStore(String),

    /// Reading or writing the case file failed.
    #[error("fraud case storage error: {0}")]
    Storage(#[from] voxdesk_store::StoreError),
}

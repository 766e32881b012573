//! Fraud case store for the bank fraud-verification agent.
//!
//! Cases live in a single JSON array file. The agent looks a customer's
//! case up by name, holds it as the session's active case while it walks
//! the customer through the flagged transaction, and then resolves it as
//! safe or fraudulent. Resolution rewrites the whole file with only the
//! active case's status and notes changed.
//!
//! # Case lifecycle
//!
//! | From | To |
//! |------|----|
//! | `pending_review` | `confirmed_safe` |
//! | `pending_review` | `confirmed_fraud` |
//!
//! Both targets are terminal.

mod error;
mod seed;
mod session;
mod store;

pub use error::FraudError;
pub use seed::sample_cases;
pub use session::FraudSession;
pub use store::FraudCaseStore;
pub use voxdesk_types::{CaseStatus, FraudCase};

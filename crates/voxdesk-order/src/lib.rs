//! Coffee order store for the barista agent.
//!
//! Holds one customer's order for the length of a voice session, reports
//! what is still missing, and writes the finished order to its own JSON
//! file exactly once.
//!
//! # Usage
//!
//! ```rust,ignore
//! use voxdesk_order::{FinalizeOutcome, OrderSession, OrderUpdate};
//!
//! let mut session = OrderSession::new("orders");
//! let status = session.update(OrderUpdate {
//!     drink_type: Some("latte".into()),
//!     size: Some("large".into()),
//!     ..OrderUpdate::default()
//! });
//! assert_eq!(status.missing_fields.len(), 2);
//!
//! match session.finalize()? {
//!     FinalizeOutcome::Incomplete { missing_fields } => { /* ask again */ }
//!     FinalizeOutcome::Finalized { summary, saved_to, .. } => { /* read back */ }
//! }
//! ```

mod error;
mod file;
mod session;

pub use error::OrderError;
pub use file::{order_filename, sanitize_customer_name, SavedOrder};
pub use session::{order_summary, FinalizeOutcome, OrderSession, OrderStatus, OrderUpdate, Persistence};

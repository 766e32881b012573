//! Append-only wellness check-in log for the wellness agent.
//!
//! Each daily check-in becomes one [`WellnessEntry`] appended to a single
//! JSON array file. Entries are never edited or removed, so file order is
//! chronological order. The most recent entry is summarised into a short
//! sentence the agent can use to open the next conversation.

mod error;
mod log;

pub use error::WellnessError;
pub use log::{summarize_last, NewEntry, WellnessLog};
pub use voxdesk_types::WellnessEntry;

#[cfg(test)]
mod tests;

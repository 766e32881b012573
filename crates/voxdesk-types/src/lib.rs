//! Shared record types for the voxdesk agents.
//!
//! This crate provides the data model persisted by the three agent stores:
//! the coffee order record, the wellness check-in entry, and the fraud case
//! record. Field names on the wire match the JSON files the stores write,
//! so the structs here are the single source of truth for those formats.
//!
//! No store crate depends on another; they only share `voxdesk-types`.

pub mod de;
pub mod fraud;
pub mod order;
pub mod wellness;

pub use fraud::{CaseStatus, FraudCase, ParseCaseStatusError};
pub use order::{OrderField, OrderRecord};
pub use wellness::WellnessEntry;

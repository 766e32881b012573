//! JSON file storage shared by the voxdesk agent stores.
//!
//! Every store in voxdesk keeps its data in a plain UTF-8 JSON file that is
//! read whole and rewritten whole. This crate holds the three primitives
//! they build on: a tolerant array load, a strict load, and a pretty-printed
//! write.
//!
//! # Design decisions
//!
//! - **Whole-file read-modify-write**: record volume per file is small (one
//!   order, a personal check-in log, a handful of cases), so there is no
//!   index, no partial write and no file lock. Two sessions writing the same
//!   file concurrently race and the last writer wins.
//! - **Corruption reads as absence**: [`load_array_or_empty`] never fails.
//!   A missing or unparsable file yields an empty sequence and a warning in
//!   the log. [`load_records_or_empty`] narrows this to single records, so
//!   one malformed record does not hide its siblings. Callers that must not
//!   silently lose data use [`read_json`].
//! - **Rewrites keep what they do not model**: stores that rewrite a file
//!   edit it as raw JSON values, so unknown keys and untouched records are
//!   written back as they were read (`serde_json` keeps key order).
//! - **Human-readable output**: files are pretty-printed with a trailing
//!   newline so they diff cleanly and can be inspected by hand.

mod error;
mod file;
mod timestamp;

pub use error::StoreError;
pub use file::{load_array_or_empty, load_records_or_empty, read_json, write_json_pretty};
pub use timestamp::utc_timestamp;

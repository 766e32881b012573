//! Persistence operations for the fraud case file.
//!
//! Reads for lookup are tolerant: a missing or corrupt file simply has no
//! cases in it, and a malformed record is skipped without hiding the others.
//! Resolution is strict: it must read the current file to rewrite it, so
//! any read or write failure is returned to the caller. It edits the file as
//! raw JSON and touches only the two outcome keys of one record.

use std::path::{Path, PathBuf};

use serde_json::Value;
use voxdesk_types::{CaseStatus, FraudCase};

use crate::error::FraudError;
use crate::seed::sample_cases;

const USER_NAME_KEY: &str = "userName";
const STATUS_KEY: &str = "case_status";
const NOTES_KEY: &str = "notes";

/// Handle to the fraud case file.
#[derive(Debug, Clone)]
pub struct FraudCaseStore {
    path: PathBuf,
}

impl FraudCaseStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes [`sample_cases`] if the case file does not exist yet.
    ///
    /// Returns `true` if the file was created. Call once at startup.
    ///
    /// # Errors
    ///
    /// Returns `FraudError::Storage` if the seed file cannot be written.
    pub fn seed_if_absent(&self) -> Result<bool, FraudError> {
        self.seed_with_if_absent(&sample_cases())
    }

    /// Writes `cases` if the case file does not exist yet.
    pub fn seed_with_if_absent(&self, cases: &[FraudCase]) -> Result<bool, FraudError> {
        if self.path.exists() {
            tracing::debug!(path = %self.path.display(), "fraud case file present, skipping seed");
            return Ok(false);
        }
        voxdesk_store::write_json_pretty(&self.path, cases)?;
        tracing::info!(
            path = %self.path.display(),
            count = cases.len(),
            "seeded fraud case file"
        );
        Ok(true)
    }

    /// All readable cases in file order; empty if the file is missing or corrupt.
    pub fn load(&self) -> Vec<FraudCase> {
        voxdesk_store::load_records_or_empty(&self.path)
    }

    /// Finds the first case whose `userName` equals `name`, ignoring case.
    pub fn lookup(&self, name: &str) -> Option<FraudCase> {
        let needle = name.to_lowercase();
        let found = self
            .load()
            .into_iter()
            .find(|case| case.user_name.to_lowercase() == needle);
        tracing::info!(user_name = name, found = found.is_some(), "fraud case lookup");
        found
    }

    /// Records the outcome for the active case and persists it.
    ///
    /// `active` must be a case previously returned by [`lookup`](Self::lookup)
    /// that is still pending, and `status` must be terminal. Only
    /// `case_status` and `notes` of the stored record whose `userName`
    /// matches exactly are set; every other key and record is written back
    /// as read. `active` is only updated once the file has been rewritten.
    ///
    /// # Errors
    ///
    /// - `FraudError::NoActiveCase` if `active` is `None`.
    /// - `FraudError::InvalidTransition` for a non-terminal target or an
    ///   already resolved case.
    /// - `FraudError::CaseNotInStore` if the file has no matching record.
    /// - `FraudError::Storage` if the file cannot be read or written.
    pub fn resolve(
        &self,
        active: Option<&mut FraudCase>,
        status: CaseStatus,
        notes: &str,
    ) -> Result<FraudCase, FraudError> {
        let active = active.ok_or(FraudError::NoActiveCase)?;
        if active.case_status.is_terminal() || !status.is_terminal() {
            return Err(FraudError::InvalidTransition {
                from: active.case_status,
                to: status,
            });
        }

        let mut resolved = active.clone();
        resolved.case_status = status;
        resolved.notes = notes.to_string();

        let mut cases: Vec<Value> = voxdesk_store::read_json(&self.path)?;
        let record = cases
            .iter_mut()
            .filter_map(Value::as_object_mut)
            .find(|record| {
                record.get(USER_NAME_KEY).and_then(Value::as_str)
                    == Some(resolved.user_name.as_str())
            })
            .ok_or_else(|| FraudError::CaseNotInStore(resolved.user_name.clone()))?;
        record.insert(STATUS_KEY.to_string(), Value::from(status.as_str()));
        record.insert(NOTES_KEY.to_string(), Value::from(notes));

        voxdesk_store::write_json_pretty(&self.path, &cases)?;
        tracing::info!(
            user_name = %resolved.user_name,
            status = %status,
            "fraud case resolved"
        );

        *active = resolved.clone();
        Ok(resolved)
    }
}

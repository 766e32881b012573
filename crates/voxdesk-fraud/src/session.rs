//! Per-call session state for the fraud agent.

use voxdesk_types::{CaseStatus, FraudCase};

use crate::error::FraudError;
use crate::store::FraudCaseStore;

/// One verification call: the store plus the case currently being discussed.
#[derive(Debug, Clone)]
pub struct FraudSession {
    store: FraudCaseStore,
    active: Option<FraudCase>,
}

impl FraudSession {
    pub fn new(store: FraudCaseStore) -> Self {
        Self {
            store,
            active: None,
        }
    }

    pub fn active_case(&self) -> Option<&FraudCase> {
        self.active.as_ref()
    }

    /// Looks the customer up and, on a match, makes it the active case.
    ///
    /// A miss leaves any previously active case in place.
    pub fn lookup(&mut self, name: &str) -> Option<&FraudCase> {
        if let Some(case) = self.store.lookup(name) {
            self.active = Some(case);
            self.active.as_ref()
        } else {
            None
        }
    }

    /// Checks the caller's answer against the active case's security
    /// identifier, ignoring surrounding whitespace and case.
    pub fn verify_security_answer(&self, answer: &str) -> Result<bool, FraudError> {
        let case = self.active.as_ref().ok_or(FraudError::NoActiveCase)?;
        let verified = case
            .security_identifier
            .trim()
            .eq_ignore_ascii_case(answer.trim());
        tracing::info!(user_name = %case.user_name, verified, "security answer checked");
        Ok(verified)
    }

    /// Resolves the active case. See [`FraudCaseStore::resolve`].
    pub fn resolve(&mut self, status: CaseStatus, notes: &str) -> Result<FraudCase, FraudError> {
        self.store.resolve(self.active.as_mut(), status, notes)
    }
}

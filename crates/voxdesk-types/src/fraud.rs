//! Fraud case record and case status.
//!
//! Transaction details are fixed when a case is created. Only `case_status`
//! and `notes` change, and only once: a case moves from `pending_review` to
//! one of the two terminal statuses.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::de::null_as_default;

/// Review status of a fraud case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Awaiting confirmation from the customer.
    #[default]
    PendingReview,
    /// The customer recognised the transaction.
    ConfirmedSafe,
    /// The customer denied the transaction.
    ConfirmedFraud,
}

impl CaseStatus {
    /// Returns the canonical string label for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingReview => "pending_review",
            Self::ConfirmedSafe => "confirmed_safe",
            Self::ConfirmedFraud => "confirmed_fraud",
        }
    }

    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::PendingReview)
    }
}

impl std::fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CaseStatus {
    type Err = ParseCaseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending_review" => Ok(Self::PendingReview),
            "confirmed_safe" => Ok(Self::ConfirmedSafe),
            "confirmed_fraud" => Ok(Self::ConfirmedFraud),
            _ => Err(ParseCaseStatusError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown case status string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case status: {0}")]
pub struct ParseCaseStatusError(pub String);

/// A customer's fraud case as stored in the case file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudCase {
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "securityIdentifier")]
    pub security_identifier: String,
    #[serde(rename = "cardEnding")]
    pub card_ending: String,
    #[serde(rename = "transactionName")]
    pub transaction_name: String,
    #[serde(rename = "transactionAmount")]
    pub transaction_amount: String,
    #[serde(rename = "transactionTime")]
    pub transaction_time: String,
    #[serde(rename = "transactionSource")]
    pub transaction_source: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub case_status: CaseStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_str() {
        for status in [
            CaseStatus::PendingReview,
            CaseStatus::ConfirmedSafe,
            CaseStatus::ConfirmedFraud,
        ] {
            assert_eq!(status.as_str().parse::<CaseStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "escalated".parse::<CaseStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown case status: escalated");
    }

    #[test]
    fn only_pending_review_is_non_terminal() {
        assert!(!CaseStatus::PendingReview.is_terminal());
        assert!(CaseStatus::ConfirmedSafe.is_terminal());
        assert!(CaseStatus::ConfirmedFraud.is_terminal());
    }

    #[test]
    fn case_uses_mixed_wire_names() {
        let json = r#"{
            "userName": "John",
            "securityIdentifier": "12345",
            "cardEnding": "4242",
            "transactionName": "ABC Industry",
            "transactionAmount": "$1,249.00",
            "transactionTime": "2025-11-25 02:14 UTC",
            "transactionSource": "alibaba.com",
            "case_status": "confirmed_safe",
            "notes": "recognised"
        }"#;
        let case: FraudCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.user_name, "John");
        assert_eq!(case.case_status, CaseStatus::ConfirmedSafe);

        let value = serde_json::to_value(&case).unwrap();
        assert_eq!(value["cardEnding"], "4242");
        assert_eq!(value["case_status"], "confirmed_safe");
    }

    #[test]
    fn missing_or_null_outcome_fields_default() {
        let json = r#"{
            "userName": "Sarah",
            "securityIdentifier": "77590",
            "cardEnding": "9181",
            "transactionName": "Nimbus Electronics",
            "transactionAmount": "$389.99",
            "transactionTime": "2025-11-24 21:47 UTC",
            "transactionSource": "nimbus-electronics.shop",
            "notes": null
        }"#;
        let case: FraudCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.case_status, CaseStatus::PendingReview);
        assert_eq!(case.notes, "");
    }
}

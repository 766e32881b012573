//! Sample cases written to a fresh case file.

use voxdesk_types::{CaseStatus, FraudCase};

/// The two demo customers every new deployment starts with.
pub fn sample_cases() -> Vec<FraudCase> {
    vec![
        FraudCase {
            user_name: "John".to_string(),
            security_identifier: "48213".to_string(),
            card_ending: "4242".to_string(),
            transaction_name: "ABC Industry".to_string(),
            transaction_amount: "$1,249.00".to_string(),
            transaction_time: "2025-11-25 02:14 UTC".to_string(),
            transaction_source: "alibaba.com".to_string(),
            case_status: CaseStatus::PendingReview,
            notes: String::new(),
        },
        FraudCase {
            user_name: "Sarah".to_string(),
            security_identifier: "77590".to_string(),
            card_ending: "9181".to_string(),
            transaction_name: "Nimbus Electronics".to_string(),
            transaction_amount: "$389.99".to_string(),
            transaction_time: "2025-11-24 21:47 UTC".to_string(),
            transaction_source: "nimbus-electronics.shop".to_string(),
            case_status: CaseStatus::PendingReview,
            notes: String::new(),
        },
    ]
}

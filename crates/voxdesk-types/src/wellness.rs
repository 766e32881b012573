//! Wellness check-in entry.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// One immutable check-in in the append-only wellness log.
///
/// Every field defaults when absent or `null` so that an older or
/// hand-edited entry still loads instead of being discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessEntry {
    /// ISO 8601 UTC timestamp with a trailing `Z`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mood: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub energy: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stressors: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub objectives: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub self_care: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub agent_summary: String,
}

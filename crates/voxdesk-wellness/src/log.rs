//! Load, append and summarise operations on the wellness log file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use voxdesk_store::StoreError;
use voxdesk_types::WellnessEntry;

use crate::error::WellnessError;

/// Shown in place of goals when the last check-in recorded none.
const NO_GOALS: &str = "no specific goals";

/// Caller-supplied fields of a new check-in. The timestamp is added on append.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEntry {
    pub mood: String,
    pub energy: String,
    #[serde(default)]
    pub stressors: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub self_care: Vec<String>,
    #[serde(default)]
    pub agent_summary: String,
}

impl NewEntry {
    fn stamp(self, timestamp: String) -> WellnessEntry {
        WellnessEntry {
            timestamp,
            mood: self.mood,
            energy: self.energy,
            stressors: self.stressors,
            objectives: self.objectives,
            self_care: self.self_care,
            agent_summary: self.agent_summary,
        }
    }
}

/// Handle to the wellness log file.
#[derive(Debug, Clone)]
pub struct WellnessLog {
    path: PathBuf,
}

impl WellnessLog {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every entry in insertion order.
    ///
    /// A missing or unparsable file yields an empty history. A single entry
    /// that is not an object is skipped.
    pub fn load(&self) -> Vec<WellnessEntry> {
        voxdesk_store::load_records_or_empty(&self.path)
    }

    /// Summary of the most recent check-in, if there is one.
    pub fn last_summary(&self) -> Option<String> {
        summarize_last(&self.load())
    }

    /// Appends a check-in stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `WellnessError::Store` if the log cannot be written.
    pub fn append(&self, entry: NewEntry) -> Result<WellnessEntry, WellnessError> {
        self.append_at(entry, Utc::now())
    }

    /// Appends a check-in stamped with `now`.
    ///
    /// Existing entries are carried over as raw JSON, so fields this
    /// version does not know about survive. Only a file that is not a JSON
    /// array at all is replaced by a log holding just the new entry.
    pub fn append_at(
        &self,
        entry: NewEntry,
        now: DateTime<Utc>,
    ) -> Result<WellnessEntry, WellnessError> {
        let mut entries: Vec<Value> = voxdesk_store::load_array_or_empty(&self.path);
        let entry = entry.stamp(voxdesk_store::utc_timestamp(now));
        entries.push(serde_json::to_value(&entry).map_err(StoreError::from)?);

        voxdesk_store::write_json_pretty(&self.path, &entries)?;
        tracing::info!(
            path = %self.path.display(),
            count = entries.len(),
            mood = %entry.mood,
            "wellness check-in appended"
        );
        Ok(entry)
    }
}

/// Formats a one-sentence recap of the last entry, or `None` when empty.
pub fn summarize_last(entries: &[WellnessEntry]) -> Option<String> {
    let last = entries.last()?;
    let goals = if last.objectives.is_empty() {
        NO_GOALS.to_string()
    } else {
        last.objectives.join(", ")
    };
    Some(format!(
        "Last check-in (UTC {}): mood={}, energy={}, goals={}.",
        last.timestamp, last.mood, last.energy, goals
    ))
}

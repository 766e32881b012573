//! Unit tests for the wellness log.

use chrono::{Duration, TimeZone, Utc};
use voxdesk_types::WellnessEntry;

use crate::log::{summarize_last, NewEntry, WellnessLog};

fn checkin(mood: &str, energy: &str, objectives: &[&str]) -> NewEntry {
    NewEntry {
        mood: mood.to_string(),
        energy: energy.to_string(),
        stressors: "deadline at work".to_string(),
        objectives: objectives.iter().map(|s| s.to_string()).collect(),
        self_care: vec!["10 minute walk".to_string()],
        agent_summary: "Feeling stretched but motivated.".to_string(),
    }
}

// ── load ─────────────────────────────────────────────────────────────

#[test]
fn load_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let log = WellnessLog::new(dir.path().join("wellness_log.json"));
    assert!(log.load().is_empty());
}

#[test]
fn load_corrupt_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wellness_log.json");
    std::fs::write(&path, "{ this is not an array").unwrap();

    let log = WellnessLog::new(&path);
    assert!(log.load().is_empty());
}

#[test]
fn load_fills_missing_entry_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wellness_log.json");
    std::fs::write(&path, r#"[{"timestamp": "2025-11-20T08:00:00Z", "mood": "ok"}]"#).unwrap();

    let entries = WellnessLog::new(&path).load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mood, "ok");
    assert_eq!(entries[0].energy, "");
    assert!(entries[0].objectives.is_empty());
}

// ── append ───────────────────────────────────────────────────────────

#[test]
fn append_stamps_zulu_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let log = WellnessLog::new(dir.path().join("wellness_log.json"));
    let now = Utc.with_ymd_and_hms(2025, 11, 23, 7, 30, 0).unwrap();

    let entry = log.append_at(checkin("calm", "high", &["finish report"]), now).unwrap();

    assert_eq!(entry.timestamp, "2025-11-23T07:30:00.000000Z");
    assert_eq!(entry.mood, "calm");
}

#[test]
fn appended_entries_load_in_insertion_order() {
    let dir = tempfile::tempdir().unwrap();
    let log = WellnessLog::new(dir.path().join("wellness_log.json"));
    let start = Utc.with_ymd_and_hms(2025, 11, 20, 9, 0, 0).unwrap();

    let mut written = Vec::new();
    for (i, mood) in ["tired", "anxious", "hopeful"].into_iter().enumerate() {
        let at = start + Duration::days(i as i64);
        written.push(log.append_at(checkin(mood, "medium", &[]), at).unwrap());
    }

    let loaded = log.load();
    assert_eq!(loaded, written);
    let moods: Vec<&str> = loaded.iter().map(|e| e.mood.as_str()).collect();
    assert_eq!(moods, vec!["tired", "anxious", "hopeful"]);
}

#[test]
fn append_over_corrupt_log_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wellness_log.json");
    std::fs::write(&path, "garbage").unwrap();
    let log = WellnessLog::new(&path);

    log.append(checkin("fine", "low", &[])).unwrap();

    assert_eq!(log.load().len(), 1);
}

#[test]
fn append_keeps_entries_with_null_and_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wellness_log.json");
    std::fs::write(
        &path,
        r#"[
  {"timestamp": "2025-11-20T08:00:00Z", "mood": "low", "energy": "low", "stressors": null},
  {"timestamp": "2025-11-21T08:00:00Z", "mood": "better", "energy": "medium", "coach": "Ria"}
]"#,
    )
    .unwrap();
    let log = WellnessLog::new(&path);
    assert_eq!(log.load().len(), 2);

    log.append(checkin("good", "high", &["stretch"])).unwrap();

    let raw: Vec<serde_json::Value> =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw.len(), 3);
    assert!(raw[0]["stressors"].is_null());
    assert_eq!(raw[1]["coach"], "Ria");
    assert_eq!(raw[2]["mood"], "good");

    let moods: Vec<String> = log.load().into_iter().map(|e| e.mood).collect();
    assert_eq!(moods, vec!["low", "better", "good"]);
}

#[test]
fn load_skips_only_malformed_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wellness_log.json");
    std::fs::write(
        &path,
        r#"[{"mood": "calm"}, "not an entry", {"mood": "bright", "objectives": ["read"]}]"#,
    )
    .unwrap();

    let entries = WellnessLog::new(&path).load();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].objectives, vec!["read".to_string()]);
}

#[test]
fn append_preserves_unicode_text_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let log = WellnessLog::new(dir.path().join("wellness_log.json"));
    let entry = NewEntry {
        mood: "un peu fatigué 😴".to_string(),
        energy: "low-ish \"but ok\"".to_string(),
        stressors: "line one\nline two".to_string(),
        objectives: vec!["réviser".to_string()],
        self_care: Vec::new(),
        agent_summary: String::new(),
    };

    let written = log.append(entry).unwrap();
    assert_eq!(log.load(), vec![written]);
}

#[test]
fn append_fails_when_log_path_is_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    // The log path is an existing directory.
    let log = WellnessLog::new(dir.path());
    assert!(log.append(checkin("ok", "ok", &[])).is_err());
}

// ── summarize_last ───────────────────────────────────────────────────

#[test]
fn summarize_empty_is_none() {
    assert_eq!(summarize_last(&[]), None);
}

#[test]
fn summarize_uses_last_entry() {
    let entries = vec![
        WellnessEntry {
            timestamp: "2025-11-20T09:00:00Z".to_string(),
            mood: "tired".to_string(),
            energy: "low".to_string(),
            ..WellnessEntry::default()
        },
        WellnessEntry {
            timestamp: "2025-11-21T09:00:00Z".to_string(),
            mood: "upbeat".to_string(),
            energy: "high".to_string(),
            objectives: vec!["gym".to_string(), "call mom".to_string()],
            ..WellnessEntry::default()
        },
    ];

    assert_eq!(
        summarize_last(&entries).as_deref(),
        Some("Last check-in (UTC 2025-11-21T09:00:00Z): mood=upbeat, energy=high, goals=gym, call mom.")
    );
}

#[test]
fn summarize_without_objectives_uses_placeholder() {
    let entries = vec![WellnessEntry {
        timestamp: "t".to_string(),
        mood: "meh".to_string(),
        energy: "medium".to_string(),
        ..WellnessEntry::default()
    }];
    let summary = summarize_last(&entries).unwrap();
    assert!(summary.ends_with("goals=no specific goals."), "got {summary}");
}

#[test]
fn last_summary_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let log = WellnessLog::new(dir.path().join("wellness_log.json"));
    assert_eq!(log.last_summary(), None);

    log.append(checkin("steady", "medium", &["sleep by 11"])).unwrap();
    let summary = log.last_summary().unwrap();
    assert!(summary.contains("mood=steady"));
    assert!(summary.contains("energy=medium"));
    assert!(summary.contains("goals=sleep by 11."));
}

use voxdesk_wellness::{summarize_last, NewEntry, WellnessLog};

#[test]
fn history_survives_reopening_the_log() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("wellness_log.json");

    for day in 1..=5 {
        let log = WellnessLog::new(&path);
        log.append(NewEntry {
            mood: format!("mood-{day}"),
            energy: format!("energy-{day}"),
            objectives: vec![format!("goal-{day}")],
            ..NewEntry::default()
        })
        .expect("append should succeed");
    }

    let entries = WellnessLog::new(&path).load();
    assert_eq!(entries.len(), 5);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.mood, format!("mood-{}", i + 1));
        assert!(entry.timestamp.ends_with('Z'));
    }
    assert!(entries.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    let summary = summarize_last(&entries).expect("non-empty history has a summary");
    assert!(summary.contains("mood=mood-5"));
    assert!(summary.contains("energy=energy-5"));

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(5));
    assert!(raw.ends_with('\n'));
}

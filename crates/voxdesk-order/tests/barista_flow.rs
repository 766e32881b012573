use voxdesk_order::{FinalizeOutcome, OrderSession, OrderUpdate, SavedOrder};

#[test]
fn order_built_over_several_turns_is_saved_once() {
    let dir = tempfile::tempdir().unwrap();
    let orders_dir = dir.path().join("orders");
    let mut session = OrderSession::new(&orders_dir);

    // "Can I get a regular coffee?"
    let status = session.update(OrderUpdate {
        drink_type: Some("drip coffee".to_string()),
        ..OrderUpdate::default()
    });
    assert_eq!(status.missing_fields.len(), 3);

    // "Medium, with almond milk."
    session.update(OrderUpdate {
        size: Some("medium".to_string()),
        milk: Some("almond".to_string()),
        ..OrderUpdate::default()
    });

    // Premature finalize from the model.
    assert!(matches!(
        session.finalize().unwrap(),
        FinalizeOutcome::Incomplete { .. }
    ));

    // "It's for Ana-Sofía."
    let status = session.update(OrderUpdate {
        name: Some("Ana-Sofía".to_string()),
        ..OrderUpdate::default()
    });
    assert!(status.is_complete);

    let path = match session.finalize().unwrap() {
        FinalizeOutcome::Finalized {
            summary,
            saved_to: Some(path),
            ..
        } => {
            assert_eq!(summary, "medium drip coffee with almond milk for Ana-Sofía");
            path
        }
        other => panic!("expected saved order, got {other:?}"),
    };

    let file_name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(file_name.starts_with("order_"));
    assert!(file_name.ends_with("_Ana-Sofía.json"), "got {file_name}");
    assert!(!file_name.contains(':'));

    let saved: SavedOrder = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved.order.milk.as_deref(), Some("almond"));
    assert!(saved.timestamp.ends_with('Z'));

    assert!(matches!(
        session.finalize().unwrap(),
        FinalizeOutcome::Finalized { saved_to: None, .. }
    ));
    assert_eq!(std::fs::read_dir(&orders_dir).unwrap().count(), 1);
}

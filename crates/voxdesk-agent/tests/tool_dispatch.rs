use voxdesk_agent::{
    AgentContext, AgentError, AgentKind, AgentSession, ToolCall, ToolError, ToolOutcome,
    ToolResult,
};
use voxdesk_fraud::FraudCaseStore;
use voxdesk_types::{CaseStatus, OrderField};
use voxdesk_wellness::WellnessLog;

fn context(dir: &std::path::Path) -> AgentContext {
    let fraud_cases = FraudCaseStore::new(dir.join("fraud_cases.json"));
    fraud_cases.seed_if_absent().unwrap();
    AgentContext {
        orders_dir: dir.join("orders"),
        wellness_log: WellnessLog::new(dir.join("wellness_log.json")),
        fraud_cases,
        brand_name: "Nebula Coffee Co.".to_string(),
        bank_name: "Nebula Bank".to_string(),
    }
}

fn call(session: &mut AgentSession, json: &str) -> ToolOutcome {
    let call: ToolCall = serde_json::from_str(json).expect("tool call should parse");
    session.call(call).expect("tool should be available")
}

#[test]
fn barista_tools_drive_order_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());
    let mut session = AgentSession::start(AgentKind::Barista, &ctx);

    let outcome = call(
        &mut session,
        r#"{"tool": "update_order", "drinkType": "flat white", "size": "small"}"#,
    );
    match outcome {
        ToolOutcome::Ok {
            result: ToolResult::OrderStatus(status),
        } => {
            assert!(!status.is_complete);
            assert_eq!(status.missing_fields, vec![OrderField::Milk, OrderField::Name]);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let outcome = call(&mut session, r#"{"tool": "finalize_order"}"#);
    assert_eq!(
        outcome,
        ToolOutcome::error(ToolError::IncompleteOrder {
            missing_fields: vec![OrderField::Milk, OrderField::Name],
        })
    );

    call(
        &mut session,
        r#"{"tool": "update_order", "milk": "whole", "name": "Lee", "extras": ["extra shot"]}"#,
    );
    let outcome = call(&mut session, r#"{"tool": "finalize_order"}"#);
    let saved_to = match outcome {
        ToolOutcome::Ok {
            result:
                ToolResult::OrderFinalized {
                    summary, saved_to, ..
                },
        } => {
            assert_eq!(summary, "small flat white with whole milk, extras: extra shot for Lee");
            saved_to.expect("first finalize saves")
        }
        other => panic!("unexpected outcome: {other:?}"),
    };
    assert!(std::path::Path::new(&saved_to).exists());

    let outcome = call(&mut session, r#"{"tool": "finalize_order"}"#);
    assert!(matches!(
        outcome,
        ToolOutcome::Ok {
            result: ToolResult::OrderFinalized { saved_to: None, .. }
        }
    ));
}

#[test]
fn wellness_tools_append_and_recall() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());
    let mut session = AgentSession::start(AgentKind::Wellness, &ctx);

    let outcome = call(&mut session, r#"{"tool": "last_checkin"}"#);
    assert_eq!(
        outcome,
        ToolOutcome::ok(ToolResult::LastCheckin { summary: None })
    );

    let outcome = call(
        &mut session,
        r#"{
            "tool": "log_checkin",
            "mood": "a bit low",
            "energy": "medium",
            "stressors": "exams",
            "objectives": ["revise chapter 3", "go for a run"],
            "self_care": ["early night"],
            "agent_summary": "Low mood from exam stress, two small goals."
        }"#,
    );
    assert!(outcome.is_ok());

    let outcome = call(&mut session, r#"{"tool": "last_checkin"}"#);
    match outcome {
        ToolOutcome::Ok {
            result: ToolResult::LastCheckin {
                summary: Some(summary),
            },
        } => {
            assert!(summary.contains("mood=a bit low"));
            assert!(summary.contains("goals=revise chapter 3, go for a run."));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    // The next session's instructions carry the recap.
    let instructions = ctx.instructions(AgentKind::Wellness);
    assert!(instructions.contains("mood=a bit low"));
}

#[test]
fn fraud_tools_resolve_active_case() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());
    let mut session = AgentSession::start(AgentKind::Fraud, &ctx);

    let outcome = call(
        &mut session,
        r#"{"tool": "resolve_case", "status": "confirmed_safe", "notes": "early"}"#,
    );
    assert_eq!(outcome, ToolOutcome::error(ToolError::NoActiveCase));

    let outcome = call(&mut session, r#"{"tool": "lookup_case", "name": "Nobody"}"#);
    match &outcome {
        ToolOutcome::Error { error, message } => {
            assert_eq!(
                error,
                &ToolError::CaseNotFound {
                    name: "Nobody".to_string()
                }
            );
            assert_eq!(message, "No fraud case found for Nobody");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let outcome = call(&mut session, r#"{"tool": "lookup_case", "name": "john"}"#);
    assert!(matches!(
        outcome,
        ToolOutcome::Ok {
            result: ToolResult::CaseFound { ref case }
        } if case.user_name == "John"
    ));

    let outcome = call(
        &mut session,
        r#"{"tool": "verify_security_answer", "answer": "48213"}"#,
    );
    assert_eq!(
        outcome,
        ToolOutcome::ok(ToolResult::SecurityAnswer { verified: true })
    );

    let outcome = call(
        &mut session,
        r#"{"tool": "resolve_case", "status": "stolen", "notes": ""}"#,
    );
    assert!(matches!(
        outcome,
        ToolOutcome::Error {
            error: ToolError::InvalidStatus { .. },
            ..
        }
    ));

    let outcome = call(
        &mut session,
        r#"{"tool": "resolve_case", "status": "confirmed_fraud", "notes": "customer denied charge"}"#,
    );
    assert!(outcome.is_ok());

    let john = ctx.fraud_cases.lookup("John").unwrap();
    assert_eq!(john.case_status, CaseStatus::ConfirmedFraud);
    assert_eq!(john.notes, "customer denied charge");
    assert_eq!(
        ctx.fraud_cases.lookup("Sarah").unwrap().case_status,
        CaseStatus::PendingReview
    );
}

#[test]
fn tool_from_another_agent_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());
    let mut session = AgentSession::start(AgentKind::Barista, &ctx);

    let err = session
        .call(ToolCall::LookupCase {
            name: "John".to_string(),
        })
        .unwrap_err();

    assert!(matches!(
        err,
        AgentError::ToolNotAvailable {
            agent: AgentKind::Barista,
            tool: "lookup_case",
        }
    ));
}

#[test]
fn outcome_serializes_with_status_tag() {
    let ok = serde_json::to_value(ToolOutcome::ok(ToolResult::SecurityAnswer {
        verified: false,
    }))
    .unwrap();
    assert_eq!(ok["status"], "ok");
    assert_eq!(ok["result"]["kind"], "security_answer");
    assert_eq!(ok["result"]["verified"], false);

    let err = serde_json::to_value(ToolOutcome::error(ToolError::IncompleteOrder {
        missing_fields: vec![OrderField::DrinkType],
    }))
    .unwrap();
    assert_eq!(err["status"], "error");
    assert_eq!(err["error"]["kind"], "incomplete_order");
    assert_eq!(err["error"]["missing_fields"][0], "drinkType");
    assert_eq!(err["message"], "Order is not complete yet; missing drinkType");
}

#[test]
fn agent_kinds_parse_and_list_their_tools() {
    for kind in AgentKind::ALL {
        assert_eq!(kind.as_str().parse::<AgentKind>().unwrap(), kind);
        assert!(!kind.tools().is_empty());
    }
    assert!(matches!(
        "pirate".parse::<AgentKind>(),
        Err(AgentError::UnknownAgent(name)) if name == "pirate"
    ));
    assert!(AgentKind::Fraud.tools().contains(&"resolve_case"));
}

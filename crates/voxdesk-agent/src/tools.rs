//! Tool calls, their results, and dispatch to the stores.
//!
//! A tool call arrives from the language model as JSON with a `tool` tag
//! and the tool's arguments alongside it:
//!
//! ```json
//! {"tool": "update_order", "drinkType": "latte", "size": "large"}
//! ```
//!
//! Every call produces a [`ToolOutcome`], serialised with a `status` tag of
//! `ok` or `error` so the caller can branch without reading message text.

use serde::{Deserialize, Serialize};
use voxdesk_fraud::{FraudError, FraudSession};
use voxdesk_order::{FinalizeOutcome, OrderSession, OrderStatus, OrderUpdate};
use voxdesk_types::{CaseStatus, FraudCase, OrderField, OrderRecord, WellnessEntry};
use voxdesk_wellness::{NewEntry, WellnessLog};

use crate::agent::AgentKind;

/// A tool invocation with its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum ToolCall {
    /// Merge newly heard order details into the current order.
    UpdateOrder(OrderUpdate),
    /// Save the order if it is complete.
    FinalizeOrder,
    /// Append today's check-in to the wellness log.
    LogCheckin(NewEntry),
    /// Recap the most recent check-in.
    LastCheckin,
    /// Find the caller's fraud case and make it active.
    LookupCase { name: String },
    /// Check the caller's security identifier against the active case.
    VerifySecurityAnswer { answer: String },
    /// Record the caller's answer on the active case.
    ResolveCase {
        status: String,
        #[serde(default)]
        notes: String,
    },
}

/// Successful tool results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolResult {
    OrderStatus(OrderStatus),
    OrderFinalized {
        order: OrderRecord,
        summary: String,
        saved_to: Option<String>,
    },
    CheckinLogged {
        entry: WellnessEntry,
    },
    LastCheckin {
        summary: Option<String>,
    },
    CaseFound {
        case: FraudCase,
    },
    SecurityAnswer {
        verified: bool,
    },
    CaseResolved {
        case: FraudCase,
    },
}

/// Tool failures the model is expected to handle conversationally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolError {
    /// The order was finalized before every required field was known.
    IncompleteOrder { missing_fields: Vec<OrderField> },
    /// No fraud case matched the given name.
    CaseNotFound { name: String },
    /// A fraud tool was called before a successful lookup.
    NoActiveCase,
    /// The requested case status is not a known status.
    InvalidStatus { status: String },
    /// The requested status change is not allowed.
    InvalidTransition { from: CaseStatus, to: CaseStatus },
    /// A store file could not be read or written.
    Storage { detail: String },
}

impl ToolError {
    /// Plain-language description for the model to relay.
    pub fn message(&self) -> String {
        match self {
            Self::IncompleteOrder { missing_fields } => {
                let names: Vec<&str> = missing_fields.iter().map(|f| f.as_str()).collect();
                format!("Order is not complete yet; missing {}", names.join(", "))
            }
            Self::CaseNotFound { name } => format!("No fraud case found for {name}"),
            Self::NoActiveCase => {
                "No active fraud case. Look up the customer first.".to_string()
            }
            Self::InvalidStatus { status } => format!(
                "Unknown case status '{status}'; use confirmed_safe or confirmed_fraud"
            ),
            Self::InvalidTransition { from, to } => {
                format!("Case cannot move from {from} to {to}")
            }
            Self::Storage { detail } => format!("Could not access stored records: {detail}"),
        }
    }
}

impl From<FraudError> for ToolError {
    fn from(e: FraudError) -> Self {
        match e {
            FraudError::NoActiveCase => Self::NoActiveCase,
            FraudError::InvalidTransition { from, to } => Self::InvalidTransition { from, to },
            FraudError::CaseNotInStore(name) => Self::CaseNotFound { name },
            FraudError::Storage(e) => Self::Storage {
                detail: e.to_string(),
            },
        }
    }
}

/// The result of one tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolOutcome {
    Ok { result: ToolResult },
    Error { error: ToolError, message: String },
}

impl ToolOutcome {
    pub fn ok(result: ToolResult) -> Self {
        Self::Ok { result }
    }

    pub fn error(error: ToolError) -> Self {
        let message = error.message();
        Self::Error { error, message }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

impl From<Result<ToolResult, ToolError>> for ToolOutcome {
    fn from(result: Result<ToolResult, ToolError>) -> Self {
        match result {
            Ok(result) => Self::ok(result),
            Err(error) => Self::error(error),
        }
    }
}

impl ToolCall {
    /// The tool's name as the model sees it.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UpdateOrder(_) => "update_order",
            Self::FinalizeOrder => "finalize_order",
            Self::LogCheckin(_) => "log_checkin",
            Self::LastCheckin => "last_checkin",
            Self::LookupCase { .. } => "lookup_case",
            Self::VerifySecurityAnswer { .. } => "verify_security_answer",
            Self::ResolveCase { .. } => "resolve_case",
        }
    }

    /// The agent this tool belongs to.
    pub fn agent(&self) -> AgentKind {
        match self {
            Self::UpdateOrder(_) | Self::FinalizeOrder => AgentKind::Barista,
            Self::LogCheckin(_) | Self::LastCheckin => AgentKind::Wellness,
            Self::LookupCase { .. }
            | Self::VerifySecurityAnswer { .. }
            | Self::ResolveCase { .. } => AgentKind::Fraud,
        }
    }

    pub(crate) fn run_barista(self, session: &mut OrderSession) -> ToolOutcome {
        let result = match self {
            Self::UpdateOrder(update) => Ok(ToolResult::OrderStatus(session.update(update))),
            Self::FinalizeOrder => match session.finalize() {
                Ok(FinalizeOutcome::Incomplete { missing_fields }) => {
                    Err(ToolError::IncompleteOrder { missing_fields })
                }
                Ok(FinalizeOutcome::Finalized {
                    order,
                    summary,
                    saved_to,
                }) => Ok(ToolResult::OrderFinalized {
                    order,
                    summary,
                    saved_to: saved_to.map(|p| p.display().to_string()),
                }),
                Err(e) => Err(ToolError::Storage {
                    detail: e.to_string(),
                }),
            },
            other => unreachable!("{} is not a barista tool", other.name()),
        };
        result.into()
    }

    pub(crate) fn run_wellness(self, log: &WellnessLog) -> ToolOutcome {
        let result = match self {
            Self::LogCheckin(entry) => log
                .append(entry)
                .map(|entry| ToolResult::CheckinLogged { entry })
                .map_err(|e| ToolError::Storage {
                    detail: e.to_string(),
                }),
            Self::LastCheckin => Ok(ToolResult::LastCheckin {
                summary: log.last_summary(),
            }),
            other => unreachable!("{} is not a wellness tool", other.name()),
        };
        result.into()
    }

    pub(crate) fn run_fraud(self, session: &mut FraudSession) -> ToolOutcome {
        let result = match self {
            Self::LookupCase { name } => match session.lookup(&name) {
                Some(case) => Ok(ToolResult::CaseFound { case: case.clone() }),
                None => Err(ToolError::CaseNotFound { name }),
            },
            Self::VerifySecurityAnswer { answer } => session
                .verify_security_answer(&answer)
                .map(|verified| ToolResult::SecurityAnswer { verified })
                .map_err(ToolError::from),
            Self::ResolveCase { status, notes } => match status.parse::<CaseStatus>() {
                Ok(status) => session
                    .resolve(status, &notes)
                    .map(|case| ToolResult::CaseResolved { case })
                    .map_err(ToolError::from),
                Err(_) => Err(ToolError::InvalidStatus { status }),
            },
            other => unreachable!("{} is not a fraud tool", other.name()),
        };
        result.into()
    }
}

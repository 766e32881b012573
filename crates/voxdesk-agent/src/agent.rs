use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;
use voxdesk_fraud::{FraudCaseStore, FraudSession};
use voxdesk_order::OrderSession;
use voxdesk_wellness::WellnessLog;

use crate::error::AgentError;
use crate::prompts;
use crate::tools::{ToolCall, ToolOutcome};

/// The three voice agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Takes a coffee order.
    Barista,
    /// Runs a daily wellness check-in.
    Wellness,
    /// Verifies a flagged card transaction with the customer.
    Fraud,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [Self::Barista, Self::Wellness, Self::Fraud];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Barista => "barista",
            Self::Wellness => "wellness",
            Self::Fraud => "fraud",
        }
    }

    /// Names of the tools this agent's model may call.
    pub fn tools(self) -> &'static [&'static str] {
        match self {
            Self::Barista => &["update_order", "finalize_order"],
            Self::Wellness => &["log_checkin", "last_checkin"],
            Self::Fraud => &["lookup_case", "verify_security_answer", "resolve_case"],
        }
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "barista" => Ok(Self::Barista),
            "wellness" => Ok(Self::Wellness),
            "fraud" => Ok(Self::Fraud),
            _ => Err(AgentError::UnknownAgent(s.to_string())),
        }
    }
}

/// Storage locations and branding shared by every session.
#[derive(Debug, Clone)]
pub struct AgentContext {
    pub orders_dir: PathBuf,
    pub wellness_log: WellnessLog,
    pub fraud_cases: FraudCaseStore,
    pub brand_name: String,
    pub bank_name: String,
}

impl AgentContext {
    /// Instructions for a new session of `kind`.
    ///
    /// The wellness prompt embeds a recap of the most recent check-in.
    pub fn instructions(&self, kind: AgentKind) -> String {
        match kind {
            AgentKind::Barista => prompts::barista(&self.brand_name),
            AgentKind::Wellness => prompts::wellness(self.wellness_log.last_summary().as_deref()),
            AgentKind::Fraud => prompts::fraud(&self.bank_name),
        }
    }
}

/// Tool-call state for one live conversation.
#[derive(Debug)]
pub enum AgentSession {
    Barista(OrderSession),
    Wellness(WellnessLog),
    Fraud(FraudSession),
}

impl AgentSession {
    /// Starts a fresh session: an empty order, or no active fraud case.
    pub fn start(kind: AgentKind, ctx: &AgentContext) -> Self {
        info!(agent = %kind, "starting agent session");
        match kind {
            AgentKind::Barista => Self::Barista(OrderSession::new(&ctx.orders_dir)),
            AgentKind::Wellness => Self::Wellness(ctx.wellness_log.clone()),
            AgentKind::Fraud => Self::Fraud(FraudSession::new(ctx.fraud_cases.clone())),
        }
    }

    pub fn kind(&self) -> AgentKind {
        match self {
            Self::Barista(_) => AgentKind::Barista,
            Self::Wellness(_) => AgentKind::Wellness,
            Self::Fraud(_) => AgentKind::Fraud,
        }
    }

    /// Runs one tool call against this session.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::ToolNotAvailable` if the tool belongs to a
    /// different agent. Failures inside a tool are reported in the
    /// returned [`ToolOutcome`] instead.
    pub fn call(&mut self, call: ToolCall) -> Result<ToolOutcome, AgentError> {
        let tool = call.name();
        info!(agent = %self.kind(), tool, "tool call");

        let outcome = match (self, call) {
            (Self::Barista(session), call) if call.agent() == AgentKind::Barista => {
                call.run_barista(session)
            }
            (Self::Wellness(log), call) if call.agent() == AgentKind::Wellness => {
                call.run_wellness(log)
            }
            (Self::Fraud(session), call) if call.agent() == AgentKind::Fraud => {
                call.run_fraud(session)
            }
            (session, _) => {
                return Err(AgentError::ToolNotAvailable {
                    agent: session.kind(),
                    tool,
                })
            }
        };

        if let ToolOutcome::Error { error, .. } = &outcome {
            tracing::warn!(tool, error = ?error, "tool call failed");
        }
        Ok(outcome)
    }
}

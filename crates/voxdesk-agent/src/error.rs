use thiserror::Error;

use crate::agent::AgentKind;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("tool '{tool}' is not available to the {agent} agent")]
    ToolNotAvailable { agent: AgentKind, tool: &'static str },

    #[error("unknown agent: {0}")]
    UnknownAgent(String),
}

//! Tool-calling layer for the voxdesk voice agents.
//!
//! Speech recognition, language-model turns, speech synthesis and turn
//! detection all belong to the external real-time voice framework. This
//! crate supplies what the framework needs from us: each agent's
//! instructions, the tools its model may call, and the per-session state
//! those tools act on.
//!
//! Three agents are defined:
//!
//! | Agent | Tools | Store |
//! |-------|-------|-------|
//! | `barista` | `update_order`, `finalize_order` | one JSON file per order |
//! | `wellness` | `log_checkin`, `last_checkin` | append-only check-in log |
//! | `fraud` | `lookup_case`, `verify_security_answer`, `resolve_case` | fraud case file |
//!
//! Tool results are explicit tagged values ([`ToolOutcome`]); a failed tool
//! call is data the model can relay, never a panic.

pub mod agent;
pub mod config;
pub mod error;
mod prompts;
pub mod tools;

pub use agent::{AgentContext, AgentKind, AgentSession};
pub use config::VoicePipeline;
pub use error::AgentError;
pub use tools::{ToolCall, ToolError, ToolOutcome, ToolResult};

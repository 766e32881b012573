//! voxdesk tool host library logic.
//!
//! The external voice framework opens a session per call, receives the
//! agent's instructions and pipeline settings, and then forwards each tool
//! call its language model makes to this server.

pub mod api;
pub mod background;
pub mod config;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, TryLockError};
use std::time::{Duration, Instant};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;
use voxdesk_agent::{AgentContext, AgentSession, VoicePipeline};
use voxdesk_fraud::FraudCaseStore;
use voxdesk_wellness::WellnessLog;

use crate::config::Config;

/// An open agent session and when a client last used it.
#[derive(Debug)]
pub struct LiveSession {
    pub session: AgentSession,
    pub last_used: Instant,
}

impl LiveSession {
    pub fn new(session: AgentSession) -> Self {
        Self {
            session,
            last_used: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_used = Instant::now();
    }
}

/// Live agent sessions keyed by session id.
///
/// The outer lock only guards brief map operations; each session has its own
/// mutex, held for the duration of one tool call.
pub type SessionMap = Arc<RwLock<HashMap<Uuid, Arc<Mutex<LiveSession>>>>>;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store locations and branding for new sessions.
    pub agents: Arc<AgentContext>,
    /// Voice pipeline settings returned with each new session.
    pub pipeline: Arc<VoicePipeline>,
    /// Active sessions.
    pub sessions: SessionMap,
}

impl AppState {
    pub fn new(agents: AgentContext, pipeline: VoicePipeline) -> Self {
        Self {
            agents: Arc::new(agents),
            pipeline: Arc::new(pipeline),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Builds state from configuration without touching disk.
    pub fn from_config(config: &Config) -> Self {
        let agents = AgentContext {
            orders_dir: config.storage.orders_dir.clone(),
            wellness_log: WellnessLog::new(&config.storage.wellness_log),
            fraud_cases: FraudCaseStore::new(&config.storage.fraud_cases),
            brand_name: config.agents.brand_name.clone(),
            bank_name: config.agents.bank_name.clone(),
        };
        Self::new(agents, config.pipeline.clone())
    }

    /// Drops sessions nobody has used for at least `max_idle`.
    ///
    /// A session busy with a tool call is never dropped. Returns the number
    /// of sessions removed.
    pub fn evict_idle_sessions(&self, max_idle: Duration) -> usize {
        let mut sessions = self.sessions.write().unwrap_or_else(|e| e.into_inner());
        let before = sessions.len();
        sessions.retain(|session_id, live| match live.try_lock() {
            Ok(live) => live.last_used.elapsed() < max_idle,
            Err(TryLockError::WouldBlock) => true,
            Err(TryLockError::Poisoned(_)) => {
                tracing::warn!(%session_id, "dropping poisoned session");
                false
            }
        });
        before - sessions.len()
    }
}

/// Maximum request body size (256 KiB). Tool arguments are short text.
const MAX_REQUEST_BODY_BYTES: usize = 256 * 1024;

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/agents", get(api::list_agents_handler))
        .route("/api/sessions", post(api::create_session_handler))
        .route("/api/sessions/{session_id}", delete(api::end_session_handler))
        .route(
            "/api/sessions/{session_id}/tools",
            post(api::tool_call_handler),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}

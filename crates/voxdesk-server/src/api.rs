//! API handlers for the voxdesk tool host.

use crate::{AppState, LiveSession};
use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;
use voxdesk_agent::{AgentError, AgentKind, AgentSession, ToolCall, ToolOutcome, VoicePipeline};

/// One entry of `GET /api/agents`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AgentInfo {
    pub agent: AgentKind,
    pub tools: Vec<String>,
}

/// Request body for starting a session.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// Agent name: `barista`, `wellness` or `fraud`.
    pub agent: String,
}

/// Response body for a new session.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    pub session_id: Uuid,
    pub agent: AgentKind,
    /// System instructions for the language model.
    pub instructions: String,
    pub tools: Vec<String>,
    pub pipeline: VoicePipeline,
}

/// API error type mapping to HTTP status codes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl From<AgentError> for ApiError {
    fn from(e: AgentError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

fn tool_names(kind: AgentKind) -> Vec<String> {
    kind.tools().iter().map(|t| t.to_string()).collect()
}

fn find_session(
    state: &AppState,
    session_id: Uuid,
) -> Result<Arc<Mutex<LiveSession>>, ApiError> {
    let sessions = state
        .sessions
        .read()
        .map_err(|_| ApiError::InternalServerError("session map lock poisoned".to_string()))?;
    sessions
        .get(&session_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("session not found: {}", session_id)))
}

/// Handler for `GET /api/agents`.
pub async fn list_agents_handler() -> Json<Vec<AgentInfo>> {
    Json(
        AgentKind::ALL
            .into_iter()
            .map(|agent| AgentInfo {
                agent,
                tools: tool_names(agent),
            })
            .collect(),
    )
}

/// Handler for `POST /api/sessions`.
pub async fn create_session_handler(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<CreateSessionResponse>), ApiError> {
    let kind: AgentKind = payload.agent.parse()?;

    // The wellness prompt reads the check-in log.
    let ctx = state.agents.clone();
    let instructions = tokio::task::spawn_blocking(move || ctx.instructions(kind))
        .await
        .map_err(|e| ApiError::InternalServerError(format!("task join error: {}", e)))?;

    let session = AgentSession::start(kind, &state.agents);
    let session_id = Uuid::new_v4();
    state
        .sessions
        .write()
        .map_err(|_| ApiError::InternalServerError("session map lock poisoned".to_string()))?
        .insert(session_id, Arc::new(Mutex::new(LiveSession::new(session))));

    tracing::info!(%session_id, agent = %kind, "session opened");

    Ok((
        StatusCode::CREATED,
        Json(CreateSessionResponse {
            session_id,
            agent: kind,
            instructions,
            tools: tool_names(kind),
            pipeline: (*state.pipeline).clone(),
        }),
    ))
}

/// Handler for `POST /api/sessions/{session_id}/tools`.
pub async fn tool_call_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
    Json(call): Json<ToolCall>,
) -> Result<Json<ToolOutcome>, ApiError> {
    let session = find_session(&state, session_id)?;

    let outcome = tokio::task::spawn_blocking(move || {
        let mut live = session
            .lock()
            .map_err(|_| ApiError::InternalServerError("session lock poisoned".to_string()))?;
        live.touch();
        live.session.call(call).map_err(ApiError::from)
    })
    .await
    .map_err(|e| ApiError::InternalServerError(format!("task join error: {}", e)))??;

    Ok(Json(outcome))
}

/// Handler for `DELETE /api/sessions/{session_id}`.
pub async fn end_session_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let removed = state
        .sessions
        .write()
        .map_err(|_| ApiError::InternalServerError("session map lock poisoned".to_string()))?
        .remove(&session_id);

    match removed {
        Some(_) => {
            tracing::info!(%session_id, "session closed");
            Ok(StatusCode::NO_CONTENT)
        }
        None => Err(ApiError::NotFound(format!(
            "session not found: {}",
            session_id
        ))),
    }
}

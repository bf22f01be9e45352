//! HTTP surface for the agent — REST endpoints over the workflow.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use uuid::Uuid;

use crate::pipeline::state::AgentState;
use crate::pipeline::workflow::EmailWorkflow;
use crate::pipeline::Category;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub workflow: Arc<EmailWorkflow>,
}

/// Build the Axum router for the agent API.
pub fn agent_routes(workflow: Arc<EmailWorkflow>) -> Router {
    let state = AppState { workflow };

    Router::new()
        .route("/agent/run", post(run_agent))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Wire types ──────────────────────────────────────────────────────

/// Request body for `POST /agent/run`.
#[derive(Debug, Deserialize)]
pub struct RunRequest {
    /// The inbound email body.
    pub input: String,
    /// Prior conversation context. Optional, defaults to empty.
    #[serde(default)]
    pub history: String,
}

/// Response body for `POST /agent/run`.
///
/// Serializes as `{"status": "success", ...}` or `{"status": "error", ...}`.
/// Both are HTTP 200 — failures degrade, they don't change the status code.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunResponse {
    Success { category: Category, reply: String },
    Error { detail: String },
}

// ── Handlers ────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "inbox-agent"
    }))
}

/// Main endpoint: run an email through the workflow.
async fn run_agent(State(state): State<AppState>, Json(req): Json<RunRequest>) -> Json<RunResponse> {
    let request_id = Uuid::new_v4();
    let preview: String = req.input.chars().take(50).collect();
    info!(%request_id, preview = %preview, "Processing email");

    let initial = AgentState::new(req.input, req.history);

    match state.workflow.run(initial).await {
        Ok(done) => Json(RunResponse::Success {
            category: done.category,
            reply: done.reply,
        }),
        Err(e) => {
            error!(%request_id, error = %e, "Workflow failed");
            Json(RunResponse::Error {
                detail: e.to_string(),
            })
        }
    }
}

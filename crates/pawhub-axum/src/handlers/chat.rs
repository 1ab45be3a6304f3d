//! Chat history handlers, scoped to the caller.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use pawhub_core::{ChatHistory, UserPrincipal};
use serde::Deserialize;

use crate::error::HttpError;
use crate::state::AppState;

/// Request body for recording an exchange.
#[derive(Debug, Deserialize)]
pub struct AppendChatRequest {
    pub prompt: String,
    #[serde(default)]
    pub reply: String,
}

/// The caller's chat history, newest first.
/// GET /api/chat/history
pub async fn history(
    State(state): State<AppState>,
    Extension(principal): Extension<UserPrincipal>,
) -> Result<Json<Vec<ChatHistory>>, HttpError> {
    let history = state.core.chat_history().history_for(&principal).await?;
    Ok(Json(history))
}

/// Record a prompt and its reply for the caller.
/// POST /api/chat/history
pub async fn append(
    State(state): State<AppState>,
    Extension(principal): Extension<UserPrincipal>,
    Json(req): Json<AppendChatRequest>,
) -> Result<(StatusCode, Json<ChatHistory>), HttpError> {
    let entry = state
        .core
        .chat_history()
        .append(&principal, req.prompt, req.reply)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

//! Identity echo, mounted by every service.

use axum::extract::State;
use axum::{Extension, Json};
use pawhub_core::{Principal, UserPrincipal};
use serde::Serialize;

use crate::state::AppState;

/// Response body for `GET /api/whoami`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmI {
    pub service: &'static str,
    pub username: String,
    pub user_id: i64,
    pub authorities: Vec<String>,
}

/// GET /api/whoami
pub async fn whoami(
    State(state): State<AppState>,
    Extension(principal): Extension<UserPrincipal>,
) -> Json<WhoAmI> {
    Json(WhoAmI {
        service: state.service.as_str(),
        username: principal.name().to_string(),
        user_id: principal.user_id(),
        authorities: principal.authorities().iter().cloned().collect(),
    })
}

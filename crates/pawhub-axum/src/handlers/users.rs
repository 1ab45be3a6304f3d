//! User profile and address handlers.
//!
//! Everything here is relative to the caller (`/users/me/...`). Address ids
//! belonging to other users answer 404, same as ids that do not exist.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use pawhub_core::{Address, AddressInput, CoreError, RepositoryError, UserPrincipal, UserProfile};
use serde::{Deserialize, Serialize};

use crate::error::HttpError;
use crate::state::AppState;

/// Request body for creating a profile.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub display_name: String,
}

/// Response body for `GET /api/users/me`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    #[serde(flatten)]
    pub principal: UserPrincipal,
    pub profile: Option<UserProfile>,
}

/// The caller's identity and profile, if one exists.
/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    Extension(principal): Extension<UserPrincipal>,
) -> Result<Json<MeResponse>, HttpError> {
    let profile = match state.core.profiles().profile_for(&principal).await {
        Ok(profile) => Some(profile),
        Err(CoreError::Repository(RepositoryError::NotFound(_))) => None,
        Err(e) => return Err(e.into()),
    };

    Ok(Json(MeResponse { principal, profile }))
}

/// GET /api/users/me/profile
pub async fn profile(
    State(state): State<AppState>,
    Extension(principal): Extension<UserPrincipal>,
) -> Result<Json<UserProfile>, HttpError> {
    Ok(Json(state.core.profiles().profile_for(&principal).await?))
}

/// POST /api/users/me/profile
pub async fn create_profile(
    State(state): State<AppState>,
    Extension(principal): Extension<UserPrincipal>,
    Json(req): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<UserProfile>), HttpError> {
    let profile = state
        .core
        .profiles()
        .create_profile(&principal, req.display_name)
        .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/users/me/addresses
pub async fn addresses(
    State(state): State<AppState>,
    Extension(principal): Extension<UserPrincipal>,
) -> Result<Json<Vec<Address>>, HttpError> {
    Ok(Json(state.core.profiles().addresses(&principal).await?))
}

/// POST /api/users/me/addresses
pub async fn add_address(
    State(state): State<AppState>,
    Extension(principal): Extension<UserPrincipal>,
    Json(input): Json<AddressInput>,
) -> Result<(StatusCode, Json<Address>), HttpError> {
    let address = state.core.profiles().add_address(&principal, input).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

/// GET /api/users/me/addresses/{id}
pub async fn address(
    State(state): State<AppState>,
    Extension(principal): Extension<UserPrincipal>,
    Path(id): Path<i64>,
) -> Result<Json<Address>, HttpError> {
    Ok(Json(state.core.profiles().address(&principal, id).await?))
}

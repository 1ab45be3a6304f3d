//! Bearer token authentication for `/api` routes.
//!
//! The middleware resolves `Authorization: Bearer <token>` through the auth
//! service and stores the resulting `UserPrincipal` in the request
//! extensions, where handlers pick it up with `Extension<UserPrincipal>`.
//! Principals without [`REQUIRED_AUTHORITY`] are turned away with 403.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use pawhub_core::Principal;

use crate::error::HttpError;
use crate::state::AppState;

/// Authority every `/api` caller must hold.
pub const REQUIRED_AUTHORITY: &str = "ROLE_USER";

/// Extract the token from an `Authorization` header value.
///
/// The scheme is matched case-insensitively. Empty tokens are rejected.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Auth middleware: resolve the bearer token to a principal.
///
/// Returns 401 with a JSON error body and `WWW-Authenticate: Bearer` when
/// the header is missing, malformed or names an unknown token.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, HttpError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned);

    let Some(token) = token else {
        tracing::warn!(
            path = %req.uri().path(),
            "Unauthorized API request - missing bearer token"
        );
        return Err(HttpError::Unauthorized(
            "missing bearer token".to_string(),
        ));
    };

    let Some(principal) = state.core.auth().authenticate(&token).await? else {
        tracing::warn!(
            path = %req.uri().path(),
            "Unauthorized API request - unknown token"
        );
        return Err(HttpError::Unauthorized("invalid bearer token".to_string()));
    };

    if !principal.has_authority(REQUIRED_AUTHORITY) {
        tracing::warn!(
            path = %req.uri().path(),
            user_id = principal.user_id(),
            "Forbidden API request - missing {REQUIRED_AUTHORITY}"
        );
        return Err(HttpError::Forbidden(format!(
            "{REQUIRED_AUTHORITY} authority required"
        )));
    }

    req.extensions_mut().insert(principal);
    Ok(next.run(req).await)
}

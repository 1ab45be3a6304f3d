//! HTTP error responses.
//!
//! Every failure leaves the server as `{"error": ..., "status": ...}`.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use pawhub_core::{CoreError, RepositoryError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("404: {0}")]
    NotFound(String),

    #[error("400: {0}")]
    BadRequest(String),

    #[error("409: {0}")]
    Conflict(String),

    /// Missing or unknown bearer token.
    #[error("401: {0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed.
    #[error("403: {0}")]
    Forbidden(String),

    /// Logged in full, reported with its message.
    #[error("500: {0}")]
    Internal(String),
}

impl HttpError {
    /// Status code this error is reported with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::NotFound(msg)
            | Self::BadRequest(msg)
            | Self::Conflict(msg)
            | Self::Unauthorized(msg)
            | Self::Forbidden(msg) => msg,
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                msg
            }
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        let mut response = (status, axum::Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<CoreError> for HttpError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => repo_err.into(),
            CoreError::Settings(settings_err) => Self::BadRequest(settings_err.to_string()),
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::Internal(msg) => Self::Internal(msg),
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(msg) => Self::NotFound(msg),
            RepositoryError::AlreadyExists(msg) => Self::Conflict(msg),
            RepositoryError::Storage(msg) => Self::Internal(format!("Storage: {msg}")),
            RepositoryError::Serialization(msg) => {
                Self::Internal(format!("Serialization: {msg}"))
            }
            RepositoryError::Constraint(msg) => Self::BadRequest(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_status_codes() {
        let cases = [
            (RepositoryError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (RepositoryError::AlreadyExists("x".into()), StatusCode::CONFLICT),
            (RepositoryError::Constraint("x".into()), StatusCode::BAD_REQUEST),
            (
                RepositoryError::Storage("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(HttpError::from(CoreError::from(err)).status(), expected);
        }
    }

    #[test]
    fn unauthorized_response_advertises_bearer_scheme() {
        let response = HttpError::Unauthorized("missing token".into()).into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }
}

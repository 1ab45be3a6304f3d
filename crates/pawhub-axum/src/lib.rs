//! HTTP adapter for the pawhub services.
//!
//! Each service process is an Axum router over a shared `AppCore`,
//! selected by [`ServiceKind`]. All `/api` routes
//! require a bearer token; `/health` is open.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies only used by the integration tests
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod scheduler;
pub mod service;
pub mod state;

// Entry points used by the CLI and tests
pub use bootstrap::{AxumContext, CorsConfig, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use scheduler::{JobScheduler, jobs_for};
pub use service::{ParseServiceKindError, ServiceKind};
pub use state::AppState;

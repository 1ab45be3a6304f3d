//! Core services that orchestrate the repository ports.
//!
//! Each service covers one service area of the platform and is reachable
//! through [`AppCore`].

mod app_core;
mod auth;
mod blockchain;
mod chat_history;
pub mod jobs;
mod profile;

pub use app_core::AppCore;
pub use auth::AuthService;
pub use blockchain::{BlockchainService, payload_digest};
pub use chat_history::ChatHistoryService;
pub use jobs::{ChatRetentionJob, HeartbeatJob, ScheduledJob};
pub use profile::ProfileService;

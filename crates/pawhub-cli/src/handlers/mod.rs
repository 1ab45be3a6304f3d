//! Command handlers that delegate to `AppCore` or the Axum adapter.
//!
//! Handlers are thin wrappers that:
//! 1. Turn CLI arguments into adapter or core inputs
//! 2. Call into the composed application
//! 3. Format output for the terminal

pub mod issue_token;
pub mod paths;
pub mod revoke_token;
pub mod serve;

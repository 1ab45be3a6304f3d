//! Command-line entry points for pawhub.
//!
//! `pawhub serve <service>` runs one deployable service; the remaining
//! commands are small admin tools sharing the same data directory.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;

// Used by the binary only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Public surface for main.rs and tests
pub use bootstrap::{CliContext, bootstrap};
pub use commands::{Commands, IssueTokenArgs, RevokeTokenArgs, ServeArgs};
pub use error::CliError;
pub use parser::Cli;

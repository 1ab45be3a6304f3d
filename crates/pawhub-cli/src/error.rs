//! Command failures and their process exit codes.

use pawhub_core::{CoreError, PathError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Core(String),

    /// Arguments clap accepted but the command rejected.
    #[error("bad arguments: {0}")]
    Arguments(String),

    #[error("i/o failure: {0}")]
    Io(String),

    /// Data directory or scheduler settings are unusable.
    #[error("bad configuration: {0}")]
    Config(String),

    #[error("database failure: {0}")]
    Database(String),
}

impl CliError {
    /// Exit code, following `sysexits.h` where one fits.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => 1,
            CliError::Arguments(_) => 2, // EX_USAGE
            CliError::Io(_) => 74,       // EX_IOERR
            CliError::Config(_) => 78,   // EX_CONFIG
            CliError::Database(_) => 73, // EX_CANTCREAT
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => CliError::Database(repo_err.to_string()),
            CoreError::Settings(settings_err) => CliError::Config(settings_err.to_string()),
            CoreError::Validation(msg) => CliError::Arguments(msg),
            CoreError::Internal(msg) => CliError::Core(msg),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err.to_string())
    }
}

/// Exit code for an error returned from a command.
///
/// Errors that are not a `CliError` are general failures.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

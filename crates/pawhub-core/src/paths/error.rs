//! Errors raised while locating or preparing the data directory.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    /// Neither `PAWHUB_DATA_DIR` nor a platform data directory is available.
    #[error("no data directory: set PAWHUB_DATA_DIR or a platform data dir")]
    NoDataDir,

    #[error("data path {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("could not create {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },
}

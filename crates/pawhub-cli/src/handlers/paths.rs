//! `pawhub paths`.
//!
//! Displays the resolved data directory and database file in
//! `key = value` format.

use std::path::{Path, PathBuf};

use anyhow::Result;
use pawhub_core::paths::{DATA_DIR_ENV, data_root, database_path_in};

use crate::error::CliError;

/// Print the resolved data root and database file.
pub fn execute() -> Result<()> {
    let root = data_root().map_err(CliError::from)?;
    let db = database_in(&root)?;
    print!("{}", render(&root, &db));
    Ok(())
}

fn database_in(root: &Path) -> Result<PathBuf, CliError> {
    Ok(database_path_in(root)?)
}

fn render(root: &Path, db: &Path) -> String {
    format!(
        "data_root = {}\ndatabase_path = {}\n# override with {DATA_DIR_ENV}\n",
        root.display(),
        db.display()
    )
}

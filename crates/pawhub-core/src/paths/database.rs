//! Location of the `SQLite` file inside the data root.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{data_root, ensure_dir};

/// File name of the database inside `<data root>/data`.
pub const DATABASE_FILE_NAME: &str = "pawhub.db";

/// `<data root>/data/pawhub.db`, creating `data/` on the way.
pub fn database_path() -> Result<PathBuf, PathError> {
    database_path_in(&data_root()?)
}

/// Database path below an explicit data root.
pub fn database_path_in(root: &Path) -> Result<PathBuf, PathError> {
    let data_dir = root.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}

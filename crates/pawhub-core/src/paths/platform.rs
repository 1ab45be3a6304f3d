//! Data root resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PathError;

/// Environment variable overriding the data root.
pub const DATA_DIR_ENV: &str = "PAWHUB_DATA_DIR";

/// `PAWHUB_DATA_DIR` if set, else `<platform data dir>/pawhub`
/// (`~/.local/share/pawhub` on Linux). Created when missing.
pub fn data_root() -> Result<PathBuf, PathError> {
    let override_dir = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    let root = resolve_data_root(override_dir, dirs::data_local_dir())?;
    ensure_dir(&root)?;
    Ok(root)
}

/// Pure resolution step of [`data_root`], without touching the filesystem.
pub fn resolve_data_root(
    override_dir: Option<PathBuf>,
    system_data_dir: Option<PathBuf>,
) -> Result<PathBuf, PathError> {
    if let Some(dir) = override_dir.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(dir);
    }

    system_data_dir
        .map(|dir| dir.join("pawhub"))
        .ok_or(PathError::NoDataDir)
}

pub(super) fn ensure_dir(path: &Path) -> Result<(), PathError> {
    if path.exists() {
        if !path.is_dir() {
            return Err(PathError::NotADirectory(path.to_path_buf()));
        }
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| PathError::CreateFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_wins() {
        let root = resolve_data_root(
            Some(PathBuf::from("/srv/pawhub")),
            Some(PathBuf::from("/home/u/.local/share")),
        )
        .unwrap();
        assert_eq!(root, PathBuf::from("/srv/pawhub"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let root = resolve_data_root(
            Some(PathBuf::new()),
            Some(PathBuf::from("/home/u/.local/share")),
        )
        .unwrap();
        assert_eq!(root, PathBuf::from("/home/u/.local/share/pawhub"));
    }

    #[test]
    fn no_candidates_is_an_error() {
        assert!(matches!(
            resolve_data_root(None, None),
            Err(PathError::NoDataDir)
        ));
    }

    #[test]
    fn ensure_dir_rejects_files() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert!(matches!(
            ensure_dir(tmp.path()),
            Err(PathError::NotADirectory(_))
        ));
    }
}

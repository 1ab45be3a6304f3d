//! Where pawhub keeps its data.
//!
//! All service processes on a host resolve the same data root, so they
//! share one database file. `PAWHUB_DATA_DIR` overrides the platform default.

mod database;
mod error;
mod platform;

pub use database::{DATABASE_FILE_NAME, database_path, database_path_in};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, resolve_data_root};

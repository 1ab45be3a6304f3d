//! CLI bootstrap - the composition root for admin commands.
//!
//! `serve` builds its own context through `pawhub_axum::bootstrap`; every
//! other command that needs storage goes through [`bootstrap`] here.

use anyhow::Result;
use pawhub_core::AppCore;
use pawhub_core::paths::database_path;
use pawhub_db::{CoreFactory, setup_database};

use crate::error::CliError;

/// Storage-backed context for the admin commands.
pub struct CliContext {
    /// Services over the resolved database.
    pub app: AppCore,
}

impl CliContext {
    /// Access the AppCore.
    pub const fn app(&self) -> &AppCore {
        &self.app
    }
}

/// Open the database at the resolved data root and compose `AppCore`.
pub async fn bootstrap() -> Result<CliContext> {
    let db_path = database_path().map_err(CliError::from)?;
    tracing::debug!(
        target: "pawhub.paths",
        database_path = %db_path.display(),
        "CLI bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    Ok(CliContext {
        app: CoreFactory::build_app_core(pool),
    })
}

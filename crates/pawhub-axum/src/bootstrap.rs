//! Startup for one HTTP service process.
//!
//! Resolves the data directory, opens the shared database, builds the
//! router and runs it alongside the background jobs until cancelled.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use pawhub_core::paths::{data_root, database_path, database_path_in};
use pawhub_core::{AppCore, SchedulerSettings, validate_settings};
use pawhub_db::{CoreFactory, setup_database};
use tokio_util::sync::CancellationToken;

use crate::scheduler::{JobScheduler, jobs_for};
use crate::service::ServiceKind;

#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Any origin. Used when no `--cors-origin` is given.
    #[default]
    AllowAll,
    AllowOrigins(Vec<String>),
}

/// Everything needed to start one service process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Service this process runs as.
    pub service: ServiceKind,
    pub port: u16,
    /// Data directory override. `None` uses the platform data root.
    pub data_dir: Option<PathBuf>,
    pub cors: CorsConfig,
    /// Background job settings.
    pub scheduler: SchedulerSettings,
}

impl ServerConfig {
    /// The service's default port, platform data root, permissive CORS.
    pub fn with_defaults(service: ServiceKind) -> Self {
        Self {
            service,
            port: service.default_port(),
            data_dir: None,
            cors: CorsConfig::default(),
            scheduler: SchedulerSettings::with_defaults(),
        }
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Keep the database under `dir` instead of the platform data root.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Restrict CORS to `origins`. Unparseable entries are dropped.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// Replace the background job settings.
    #[must_use]
    pub fn with_scheduler(mut self, scheduler: SchedulerSettings) -> Self {
        self.scheduler = scheduler;
        self
    }
}

/// Shared by every handler of one process.
pub struct AxumContext {
    /// Services over the shared database.
    pub core: Arc<AppCore>,
    /// Service whose routes are mounted.
    pub service: ServiceKind,
}

impl AxumContext {
    /// Wrap an already composed core.
    pub const fn new(core: Arc<AppCore>, service: ServiceKind) -> Self {
        Self { core, service }
    }
}

/// Bootstrap the database and core services for one service process.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    validate_settings(&config.scheduler)?;

    let (root, db_path) = match &config.data_dir {
        Some(dir) => (dir.clone(), database_path_in(dir)?),
        None => (data_root()?, database_path()?),
    };

    tracing::info!(
        target: "pawhub.paths",
        service = %config.service,
        data_root = %root.display(),
        database_path = %db_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&db_path).await?;
    let core = Arc::new(CoreFactory::build_app_core(pool));

    Ok(AxumContext::new(core, config.service))
}

/// Start the web server and its background jobs.
///
/// Runs until `shutdown` is cancelled, then stops accepting connections,
/// drains in-flight requests and waits for the jobs to finish.
pub async fn start_server(config: ServerConfig, shutdown: CancellationToken) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;

    let mut scheduler = JobScheduler::new(shutdown.child_token());
    for job in jobs_for(config.service, &config.scheduler, &ctx.core) {
        scheduler.spawn(job);
    }

    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(
        service = %config.service,
        jobs = scheduler.len(),
        "pawhub {} service listening on http://{}",
        config.service,
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!(service = %config.service, "HTTP server stopped, waiting for jobs");
    scheduler.shutdown().await;
    Ok(())
}

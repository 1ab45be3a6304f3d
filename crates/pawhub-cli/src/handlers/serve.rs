//! `pawhub serve <service>`.
//!
//! Runs one service until Ctrl-C, then shuts the HTTP server and the
//! background jobs down gracefully.

use anyhow::Result;
use pawhub_axum::{ServerConfig, start_server};
use pawhub_core::{SchedulerSettings, validate_settings};
use tokio_util::sync::CancellationToken;

use crate::commands::ServeArgs;
use crate::error::CliError;

/// Run the service until Ctrl-C.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = server_config(&args)?;

    println!();
    println!("  pawhub {} service starting...", config.service);
    println!();
    println!("  API:     http://localhost:{}/api", config.port);
    println!("  Health:  http://localhost:{}/health", config.port);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(shutdown.clone()));

    start_server(config, shutdown).await
}

/// Build the server configuration from command-line arguments.
fn server_config(args: &ServeArgs) -> Result<ServerConfig, CliError> {
    let defaults = SchedulerSettings::with_defaults();
    let scheduler = SchedulerSettings {
        heartbeat_secs: args.heartbeat_secs.or(defaults.heartbeat_secs),
        chat_retention_days: args.chat_retention_days,
        ..defaults
    };
    validate_settings(&scheduler).map_err(|e| CliError::Config(e.to_string()))?;

    let mut config = ServerConfig::with_defaults(args.service).with_scheduler(scheduler);
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if !args.cors_origins.is_empty() {
        config = config.with_allowed_origins(args.cors_origins.clone());
    }
    Ok(config)
}

async fn cancel_on_ctrl_c(shutdown: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl-C, shutting down"),
    }
    shutdown.cancel();
}

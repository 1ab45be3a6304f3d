//! Scheduled job contracts and the jobs the services register.
//!
//! Jobs are policy-free units of periodic work. The runtime that drives them
//! (interval ticking, cancellation) lives in the adapter crate.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::AppCore;
use crate::ports::CoreError;

/// A unit of periodic background work.
#[async_trait]
pub trait ScheduledJob: Send + Sync {
    /// Stable name used in logs.
    fn name(&self) -> &str;

    /// Time between two runs.
    fn interval(&self) -> Duration;

    /// Execute one run. Errors are reported by the runner and do not stop the job.
    async fn run(&self) -> Result<(), CoreError>;
}

/// Logs that a service process is alive.
pub struct HeartbeatJob {
    service: String,
    interval: Duration,
    started: Instant,
}

impl HeartbeatJob {
    /// Create a heartbeat for the named service.
    pub fn new(service: impl Into<String>, interval: Duration) -> Self {
        Self {
            service: service.into(),
            interval,
            started: Instant::now(),
        }
    }
}

#[async_trait]
impl ScheduledJob for HeartbeatJob {
    fn name(&self) -> &str {
        "heartbeat"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn run(&self) -> Result<(), CoreError> {
        tracing::info!(
            target: "pawhub.scheduler",
            service = %self.service,
            uptime_secs = self.started.elapsed().as_secs(),
            "heartbeat"
        );
        Ok(())
    }
}

/// Deletes chat history past the retention window.
pub struct ChatRetentionJob {
    core: Arc<AppCore>,
    retention_days: u32,
    interval: Duration,
}

impl ChatRetentionJob {
    /// Create a retention job keeping `retention_days` days of history.
    pub fn new(core: Arc<AppCore>, retention_days: u32, interval: Duration) -> Self {
        Self {
            core,
            retention_days,
            interval,
        }
    }
}

#[async_trait]
impl ScheduledJob for ChatRetentionJob {
    fn name(&self) -> &str {
        "chat-retention"
    }

    fn interval(&self) -> Duration {
        self.interval
    }

    async fn run(&self) -> Result<(), CoreError> {
        let removed = self
            .core
            .chat_history()
            .prune_older_than(self.retention_days)
            .await?;

        if removed > 0 {
            tracing::info!(
                target: "pawhub.scheduler",
                removed,
                retention_days = self.retention_days,
                "Pruned chat history"
            );
        }
        Ok(())
    }
}

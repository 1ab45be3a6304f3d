//! Scheduler settings and validation.
//!
//! These are pure domain types with no infrastructure dependencies. Adapters
//! fill them from the environment and hand them to the job runner.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default interval between heartbeat log lines.
pub const DEFAULT_HEARTBEAT_SECS: u64 = 60;

/// Default interval between chat retention sweeps (one hour).
pub const DEFAULT_RETENTION_SWEEP_SECS: u64 = 3600;

/// Upper bound for chat retention (ten years).
pub const MAX_CHAT_RETENTION_DAYS: u32 = 3650;

/// Upper bound for any job interval (one week).
pub const MAX_INTERVAL_SECS: u64 = 7 * 24 * 3600;

/// Settings for the background jobs of a service process.
///
/// All fields are optional so partial configuration falls back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SchedulerSettings {
    /// Seconds between heartbeat runs.
    pub heartbeat_secs: Option<u64>,

    /// Keep chat history for this many days. `None` disables pruning.
    pub chat_retention_days: Option<u32>,

    /// Seconds between chat retention sweeps.
    pub retention_sweep_secs: Option<u64>,
}

impl SchedulerSettings {
    /// Hourly retention sweeps, a heartbeat every minute, no pruning.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            heartbeat_secs: Some(DEFAULT_HEARTBEAT_SECS),
            chat_retention_days: None,
            retention_sweep_secs: Some(DEFAULT_RETENTION_SWEEP_SECS),
        }
    }

    /// Effective heartbeat interval.
    #[must_use]
    pub const fn heartbeat_interval(&self) -> Duration {
        match self.heartbeat_secs {
            Some(secs) => Duration::from_secs(secs),
            None => Duration::from_secs(DEFAULT_HEARTBEAT_SECS),
        }
    }

    /// Effective retention sweep interval.
    #[must_use]
    pub const fn retention_sweep_interval(&self) -> Duration {
        match self.retention_sweep_secs {
            Some(secs) => Duration::from_secs(secs),
            None => Duration::from_secs(DEFAULT_RETENTION_SWEEP_SECS),
        }
    }
}

/// Settings validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Interval must be at least one second: {field}")]
    ZeroInterval { field: &'static str },

    #[error("Interval {field} must be at most {max} seconds, got {value}")]
    IntervalTooLong {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("Chat retention must be between 1 and {max} days, got {value}")]
    InvalidRetention { value: u32, max: u32 },
}

/// Validate scheduler settings.
pub fn validate_settings(settings: &SchedulerSettings) -> Result<(), SettingsError> {
    check_interval("heartbeat_secs", settings.heartbeat_secs)?;
    check_interval("retention_sweep_secs", settings.retention_sweep_secs)?;

    if let Some(days) = settings.chat_retention_days {
        if days == 0 || days > MAX_CHAT_RETENTION_DAYS {
            return Err(SettingsError::InvalidRetention {
                value: days,
                max: MAX_CHAT_RETENTION_DAYS,
            });
        }
    }

    Ok(())
}

fn check_interval(field: &'static str, secs: Option<u64>) -> Result<(), SettingsError> {
    match secs {
        Some(0) => Err(SettingsError::ZeroInterval { field }),
        Some(value) if value > MAX_INTERVAL_SECS => Err(SettingsError::IntervalTooLong {
            field,
            value,
            max: MAX_INTERVAL_SECS,
        }),
        _ => Ok(()),
    }
}

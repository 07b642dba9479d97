//! Configuration types.

use std::path::PathBuf;
use std::time::Duration;

use crate::worker::{WorkerSpec, default_roster};

/// Default persistent log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "process_log.txt";

/// Simulation configuration.
///
/// Every delay is expressed in unscaled seconds and multiplied by
/// `time_scale` when slept.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Path of the append-only log file.
    pub log_file: PathBuf,
    /// Whether records are mirrored to the console.
    pub console: bool,
    /// Multiplier applied to every sleep (1.0 = real time).
    pub time_scale: f64,
    /// Pause between two process launches.
    pub launch_stagger_secs: f64,
    /// Monitor polling interval.
    pub monitor_interval_secs: f64,
    /// Pause after each shutdown step.
    pub shutdown_step_secs: f64,
    /// Processes launched at startup, in launch order.
    pub roster: Vec<WorkerSpec>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            console: true,
            time_scale: 1.0,
            launch_stagger_secs: 0.5,
            monitor_interval_secs: 1.0,
            shutdown_step_secs: 0.5,
            roster: default_roster(),
        }
    }
}

impl SimConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// - `BOOTSIM_LOG_FILE`: log file path
    /// - `BOOTSIM_TIME_SCALE`: delay multiplier (finite, >= 0)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let log_file = std::env::var("BOOTSIM_LOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_file.clone());

        let time_scale = match std::env::var("BOOTSIM_TIME_SCALE") {
            Ok(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => v,
                _ => {
                    tracing::warn!(value = %raw, "Ignoring invalid BOOTSIM_TIME_SCALE");
                    defaults.time_scale
                }
            },
            Err(_) => defaults.time_scale,
        };

        Self {
            log_file,
            time_scale,
            ..defaults
        }
    }

    /// Same config with a different time scale.
    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Convert unscaled seconds into a sleep duration.
    pub fn scaled(&self, secs: f64) -> Duration {
        scale(secs, self.time_scale)
    }
}

/// `secs × factor` as a duration, clamped to `[0, Duration::MAX]`.
pub(crate) fn scale(secs: f64, factor: f64) -> Duration {
    let value = secs * factor;
    if value.is_nan() || value <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(value).unwrap_or(Duration::MAX)
}

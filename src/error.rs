//! Error types for the boot simulation.

use std::path::PathBuf;

/// Top-level error type for a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Logging error: {0}")]
    Log(#[from] LogError),

    #[error("Failed to launch process {name}: {reason}")]
    Launch { name: String, reason: String },

    #[error("Failed to join process {name}: {source}")]
    Join {
        name: String,
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("Process {name} failed: {source}")]
    Worker {
        name: String,
        #[source]
        source: LogError,
    },
}

/// Log sink errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: tracing_appender::rolling::InitError,
    },

    #[error("Log file path has no file name: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Failed to write log record: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type alias for the simulation.
pub type Result<T> = std::result::Result<T, SimError>;

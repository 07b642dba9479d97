//! Explicitly constructed logging context.

use std::sync::Arc;

use tracing::Level;

use crate::config::SimConfig;
use crate::error::LogError;
use crate::logging::record::LogRecord;
use crate::logging::sink::{ConsoleSink, FileSink, LogSink};

/// Source name used for records emitted by the driver itself.
pub const MAIN_PROCESS: &str = "MainProcess";

/// Fans each record out to every configured sink.
///
/// Sinks are fixed at construction. There is no cross-sink lock, so two
/// concurrent writers may land in a different order in each sink.
#[derive(Default)]
pub struct Logger {
    sinks: Vec<Box<dyn LogSink>>,
}

impl Logger {
    /// A logger with no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink.
    pub fn with_sink(mut self, sink: impl LogSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// File sink at `config.log_file`, plus the console when enabled.
    pub fn from_config(config: &SimConfig) -> Result<Self, LogError> {
        let mut logger = Self::new().with_sink(FileSink::open(&config.log_file)?);
        if config.console {
            logger = logger.with_sink(ConsoleSink::new());
        }
        Ok(logger)
    }

    /// Number of configured sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Write `message` from `source` to every sink.
    ///
    /// Every sink is attempted; the first failure is returned.
    pub fn record(
        &self,
        source: &str,
        level: Level,
        message: impl Into<String>,
    ) -> Result<(), LogError> {
        let record = LogRecord::new(source, level, message);
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = sink.write(&record) {
                tracing::warn!(sink = sink.name(), error = %e, "Log sink write failed");
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Scope this logger to a source name.
    pub fn scoped(self: &Arc<Self>, source: impl Into<Arc<str>>) -> ProcessLog {
        ProcessLog {
            source: source.into(),
            logger: Arc::clone(self),
        }
    }

    /// Scope this logger to the driver.
    pub fn main_process(self: &Arc<Self>) -> ProcessLog {
        self.scoped(MAIN_PROCESS)
    }
}

/// A logger bound to one source name.
#[derive(Clone)]
pub struct ProcessLog {
    source: Arc<str>,
    logger: Arc<Logger>,
}

impl ProcessLog {
    /// Source name written in each line.
    pub fn name(&self) -> &str {
        &self.source
    }

    pub fn info(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.logger.record(&self.source, Level::INFO, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.logger.record(&self.source, Level::ERROR, message)
    }

    /// Horizontal rule used around section banners.
    pub fn rule(&self) -> Result<(), LogError> {
        self.info("=".repeat(60))
    }
}

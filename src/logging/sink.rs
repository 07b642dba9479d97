//! Log sinks: durable file, live console, in-memory capture.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_appender::non_blocking::{NonBlocking, NonBlockingBuilder, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

use crate::error::LogError;
use crate::logging::record::LogRecord;

/// Destination for formatted log records.
///
/// A sink writes one complete line per call; concurrent callers never
/// interleave inside a line.
pub trait LogSink: Send + Sync {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Append a single record.
    fn write(&self, record: &LogRecord) -> Result<(), LogError>;
}

// ── File ────────────────────────────────────────────────────────────

/// Append-only log file, never rotated.
///
/// Lines are handed to a background writer thread; the held guard flushes
/// the remaining lines when the sink is dropped.
pub struct FileSink {
    writer: Mutex<NonBlocking>,
    _guard: WorkerGuard,
}

impl FileSink {
    /// Open (or create) `path` for appending. Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LogError::InvalidPath(path.clone()))?
            .to_string();
        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name)
            .build(&dir)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;

        let (writer, guard) = NonBlockingBuilder::default()
            .lossy(false)
            .thread_name("boot-sim-log")
            .finish(appender);

        tracing::debug!(path = %path.display(), "Opened log file");

        Ok(Self {
            writer: Mutex::new(writer),
            _guard: guard,
        })
    }
}

impl LogSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn write(&self, record: &LogRecord) -> Result<(), LogError> {
        let mut line = record.line();
        line.push('\n');
        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writer.write_all(line.as_bytes())?;
        Ok(())
    }
}

// ── Console ─────────────────────────────────────────────────────────

/// Live console stream (stderr).
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn write(&self, record: &LogRecord) -> Result<(), LogError> {
        let mut line = record.line();
        line.push('\n');
        let mut stderr = std::io::stderr().lock();
        stderr.write_all(line.as_bytes())?;
        Ok(())
    }
}

// ── Memory ──────────────────────────────────────────────────────────

/// In-memory capture of every record, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured records, in write order.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Snapshot of all captured messages, in write order.
    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }
}

impl LogSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write(&self, record: &LogRecord) -> Result<(), LogError> {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(record.clone());
        Ok(())
    }
}

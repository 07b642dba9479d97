//! Boot log — timestamped records fanned out to a file and the console.
//!
//! - `record` — `LogRecord` and the line format
//! - `sink` — `LogSink` trait with file, console and memory sinks
//! - `logger` — `Logger` and the per-source `ProcessLog` handle

pub mod logger;
pub mod record;
pub mod sink;

pub use logger::{Logger, MAIN_PROCESS, ProcessLog};
pub use record::LogRecord;
pub use sink::{ConsoleSink, FileSink, LogSink, MemorySink};

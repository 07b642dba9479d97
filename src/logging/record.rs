//! A single log record and its line format.

use chrono::{DateTime, Local};
use tracing::Level;

/// Timestamp layout used in every line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One timestamped message from a named source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    /// Worker name, or `MainProcess` for the driver.
    pub source: String,
    pub level: Level,
    pub message: String,
}

impl LogRecord {
    /// Create a record stamped with the current local time.
    pub fn new(source: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            source: source.into(),
            level,
            message: message.into(),
        }
    }

    /// `<YYYY-MM-DD HH:MM:SS> - <source> - <message>`, without a trailing newline.
    pub fn line(&self) -> String {
        format!(
            "{} - {} - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.source,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn line_format() {
        let mut record = LogRecord::new("Boot-Loader", Level::INFO, "🟢 Boot-Loader STARTED");
        record.timestamp = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(
            record.line(),
            "2024-03-09 07:05:01 - Boot-Loader - 🟢 Boot-Loader STARTED"
        );
    }
}

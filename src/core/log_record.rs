//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// A single event captured by a [`Logger`](super::Logger).
///
/// Records are cloned into the delivery queue for asynchronous sinks, so
/// every field is owned.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub name: String,
    pub message: String,
}

impl LogRecord {
    pub fn new(level: LogLevel, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }
}

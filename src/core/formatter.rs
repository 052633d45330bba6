//! JSON line formatter
//!
//! Every emitted line is a compact JSON object with exactly four keys, in
//! this order: `timestamp`, `level`, `name`, `message`.
//!
//! ```text
//! {"timestamp":"2025-01-08 10:30:45","level":"INFO","name":"APP","message":"started"}
//! ```

use super::log_record::LogRecord;
use serde::Serialize;
use std::fmt::Write;

/// Default strftime pattern for the `timestamp` field
pub const DEFAULT_DATEFMT: &str = "%Y-%m-%d %H:%M:%S";

/// Placeholder emitted for any field that cannot be rendered
pub const UNRENDERABLE: &str = "<unrenderable>";

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: &'a str,
    level: &'static str,
    name: &'a str,
    message: &'a str,
}

/// Renders [`LogRecord`]s as single-line JSON.
///
/// Formatting never fails: a bad date pattern yields [`UNRENDERABLE`] in the
/// `timestamp` field instead of aborting the log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormatter {
    datefmt: String,
}

impl JsonFormatter {
    pub fn new(datefmt: impl Into<String>) -> Self {
        Self {
            datefmt: datefmt.into(),
        }
    }

    pub fn datefmt(&self) -> &str {
        &self.datefmt
    }

    /// Render the record's timestamp with the configured pattern
    pub fn format_time(&self, record: &LogRecord) -> String {
        let mut out = String::new();
        // chrono reports unknown specifiers as a fmt::Error rather than panicking
        // when driven through write!
        match write!(out, "{}", record.timestamp.format(&self.datefmt)) {
            Ok(()) => out,
            Err(_) => UNRENDERABLE.to_string(),
        }
    }

    pub fn format(&self, record: &LogRecord) -> String {
        let timestamp = self.format_time(record);
        let line = JsonLine {
            timestamp: &timestamp,
            level: record.level.to_str(),
            name: &record.name,
            message: &record.message,
        };

        serde_json::to_string(&line).unwrap_or_else(|_| {
            format!(
                r#"{{"timestamp":"{}","level":"{}","name":"{}","message":"{}"}}"#,
                UNRENDERABLE,
                record.level.to_str(),
                UNRENDERABLE,
                UNRENDERABLE
            )
        })
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_DATEFMT)
    }
}

//! Handlers: a severity threshold and the shared formatter in front of an
//! [`Appender`].

use super::{
    appender::Appender, error::Result, formatter::JsonFormatter, log_level::LogLevel,
    log_record::LogRecord, metrics::LoggerMetrics,
};
use std::sync::Arc;

pub struct Handler {
    level: LogLevel,
    formatter: Arc<JsonFormatter>,
    appender: Box<dyn Appender>,
}

impl Handler {
    pub fn new(level: LogLevel, formatter: Arc<JsonFormatter>, appender: Box<dyn Appender>) -> Self {
        Self {
            level,
            formatter,
            appender,
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn name(&self) -> &str {
        self.appender.name()
    }

    /// Whether a record of `level` passes this handler's threshold
    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    /// Format and write the record if it meets the threshold.
    pub fn handle(&mut self, record: &LogRecord) -> Result<()> {
        if !self.accepts(record.level) {
            return Ok(());
        }
        let line = self.formatter.format(record);
        self.appender.append(&line)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.appender.flush()
    }
}

impl std::fmt::Debug for Handler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handler")
            .field("name", &self.appender.name())
            .field("level", &self.level)
            .finish()
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Hand a record to every handler.
///
/// Each handler is isolated: an error or a panic in one is reported on
/// stderr and the remaining handlers still run. Every write a handler
/// accepts counts once in `metrics`, as delivered or dropped; records below
/// a handler's threshold are not counted. Returns `true` if any handler
/// failed.
pub fn dispatch(handlers: &mut [Handler], record: &LogRecord, metrics: &LoggerMetrics) -> bool {
    let mut has_error = false;

    for handler in handlers.iter_mut() {
        if !handler.accepts(record.level) {
            continue;
        }

        let result =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler.handle(record)));

        match result {
            Ok(Ok(())) => {
                metrics.record_delivered();
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Handler '{}' failed: {}", handler.name(), e);
                metrics.record_dropped();
                has_error = true;
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Handler '{}' panicked: {}. \
                     Other handlers continue to function.",
                    handler.name(),
                    panic_message(panic_info.as_ref())
                );
                metrics.record_dropped();
                has_error = true;
            }
        }
    }

    has_error
}

/// Flush every handler, reporting failures without stopping early.
pub fn flush_all(handlers: &mut [Handler]) -> Result<()> {
    let mut first_error = None;

    for handler in handlers.iter_mut() {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| handler.flush()));
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Handler '{}' flush failed: {}", handler.name(), e);
                first_error.get_or_insert(e);
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] Handler '{}' panicked during flush: {}",
                    handler.name(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

//! Named logger handle

use super::{
    error::Result,
    handler::{dispatch, flush_all, Handler},
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    queue::QueueHandler,
};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// A named logger with synchronous handlers and at most one queue handler.
///
/// Synchronous handlers run on the calling thread. When a queue handler is
/// attached, every record passing the logger threshold is also enqueued for
/// the background [`Listener`](super::Listener).
///
/// `Logger` is `Send + Sync`; wrap it in an `Arc` to share it.
///
/// # Example
///
/// ```
/// use rust_logger_setup::{Logger, LogLevel};
///
/// let logger = Logger::new("APP");
/// assert_eq!(logger.level(), LogLevel::Debug);
/// logger.info("no handlers attached, nothing is written");
/// ```
pub struct Logger {
    name: String,
    level: RwLock<LogLevel>,
    handlers: Mutex<Vec<Handler>>,
    queue: Option<QueueHandler>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Create a logger that captures every level and has no handlers.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_metrics(name, Arc::new(LoggerMetrics::new()))
    }

    /// Create a logger sharing `metrics` with a queue and listener.
    #[must_use]
    pub fn with_metrics(name: impl Into<String>, metrics: Arc<LoggerMetrics>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(LogLevel::Debug),
            handlers: Mutex::new(Vec::new()),
            queue: None,
            metrics,
        }
    }

    pub fn add_handler(&mut self, handler: Handler) {
        self.handlers.get_mut().push(handler);
    }

    /// Attach the queue handler. A logger carries at most one; returns
    /// `false` and keeps the existing one if already attached.
    pub fn attach_queue(&mut self, queue: QueueHandler) -> bool {
        if self.queue.is_some() {
            return false;
        }
        self.queue = Some(queue);
        true
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    #[inline]
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        level >= *self.level.read()
    }

    /// Number of handlers attached directly to the logger
    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }

    pub fn has_queue(&self) -> bool {
        self.queue.is_some()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled_for(level) {
            return;
        }

        let record = LogRecord::new(level, self.name.as_str(), message);

        {
            let mut handlers = self.handlers.lock();
            if !handlers.is_empty() {
                dispatch(&mut handlers, &record, &self.metrics);
                let _ = flush_all(&mut handlers);
            }
        }

        if let Some(ref queue) = self.queue {
            queue.enqueue(record);
        }
    }

    /// Flush the synchronous handlers. Queued records are flushed by the
    /// listener when it drains or stops.
    pub fn flush(&self) -> Result<()> {
        flush_all(&mut self.handlers.lock())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = flush_all(self.handlers.get_mut()) {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("handlers", &*self.handlers.lock())
            .field("queue", &self.queue.is_some())
            .finish()
    }
}

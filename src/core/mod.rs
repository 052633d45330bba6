//! Core logger types and traits

pub mod appender;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod queue;

pub use appender::Appender;
pub use error::{LoggerError, Result};
pub use formatter::{JsonFormatter, DEFAULT_DATEFMT, UNRENDERABLE};
pub use handler::Handler;
pub use log_level::{LevelFilter, LogLevel};
pub use log_record::LogRecord;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use queue::{delivery_queue, Listener, QueueHandler, DEFAULT_SHUTDOWN_TIMEOUT};

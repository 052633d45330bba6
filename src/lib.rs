//! # Rust Logger Setup
//!
//! Configuration-driven structured logging. A YAML `logger` section selects
//! console, rotating file and remote HTTP sinks; each one is delivered either
//! inline on the calling thread or through a shared queue drained by a
//! background listener.
//!
//! ## Features
//!
//! - **JSON lines**: `{"timestamp","level","name","message"}` on every sink
//! - **Per-sink delivery**: `async: true` moves a sink behind the queue
//! - **Rotating files**: size threshold with a bounded number of backups
//! - **Remote**: HTTP POST of each record, failures never reach the caller
//!
//! ```no_run
//! use rust_logger_setup::prelude::*;
//!
//! let (logger, mut listeners) = init_from_path("config.yaml")?;
//! logger.warning("disk usage above 90%");
//! for listener in &mut listeners {
//!     listener.stop()?;
//! }
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;
pub mod setup;

pub mod prelude {
    pub use crate::appenders::{
        ConsoleAppender, ConsoleStream, HttpAppender, RotatingFileAppender, RotationPolicy,
    };
    pub use crate::core::{
        Appender, Handler, JsonFormatter, LevelFilter, Listener, LogLevel, LogRecord, Logger,
        LoggerError, LoggerMetrics, Result, DEFAULT_SHUTDOWN_TIMEOUT,
    };
    pub use crate::setup::{init_from_path, setup, LoggerConfig, LoggingSetup};
}

pub use crate::appenders::{ConsoleAppender, HttpAppender, RotatingFileAppender};
pub use crate::core::{
    Appender, Handler, JsonFormatter, LevelFilter, Listener, LogLevel, LogRecord, Logger,
    LoggerError, LoggerMetrics, Result, DEFAULT_SHUTDOWN_TIMEOUT,
};
pub use crate::setup::{init_from_path, setup, LoggerConfig, LoggingSetup};

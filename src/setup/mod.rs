//! Logger assembly from configuration
//!
//! Builds console, file and remote sinks in that order and routes each one
//! either directly onto the logger (synchronous) or behind the shared
//! delivery queue (asynchronous). All asynchronous sinks share one queue,
//! one queue handler on the logger and one listener that fans every queued
//! record out to each of them.
//!
//! # Example
//!
//! ```no_run
//! use rust_logger_setup::setup::init_from_path;
//!
//! let (logger, mut listeners) = init_from_path("config.yaml").unwrap();
//! logger.info("service started");
//!
//! for listener in &mut listeners {
//!     listener.stop().unwrap();
//! }
//! ```

pub mod config;
pub mod sinks;

pub use config::{ConsoleConfig, FileConfig, LoggerConfig, RemoteConfig};
pub use sinks::{build_sink, BuiltSink, DeliveryMode, SinkKind};

use crate::core::{
    delivery_queue, JsonFormatter, Listener, LogLevel, Logger, LoggerMetrics, Result,
};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Builder turning a [`LoggerConfig`] into a logger and its listeners
pub struct LoggingSetup {
    config: LoggerConfig,
    console_writer: Option<Box<dyn Write + Send>>,
}

impl LoggingSetup {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config,
            console_writer: None,
        }
    }

    /// Send console sink output to `writer` instead of the configured stream
    #[must_use = "builder methods return a new value"]
    pub fn console_writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.console_writer = Some(Box::new(writer));
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Build every sink, attach it, and start the listener.
    ///
    /// Returns the logger and the started listeners (zero or one). The caller
    /// must stop the listeners at shutdown to flush queued records.
    ///
    /// # Errors
    ///
    /// Returns error if a sink cannot be constructed (log file cannot be
    /// opened, remote URL is invalid) or the listener thread cannot start.
    pub fn init(mut self) -> Result<(Logger, Vec<Listener>)> {
        let config = &self.config;
        let formatter = Arc::new(JsonFormatter::new(config.logger_datefmt.as_str()));
        let metrics = Arc::new(LoggerMetrics::new());

        let mut logger = Logger::with_metrics(config.logger_name.as_str(), Arc::clone(&metrics));
        logger.set_level(LogLevel::Debug);

        let mut listener: Option<Listener> = None;

        for kind in SinkKind::ORDER {
            let Some(sink) = build_sink(kind, config, &formatter, &mut self.console_writer)? else {
                continue;
            };

            match sink.mode {
                DeliveryMode::Synchronous => logger.add_handler(sink.handler),
                DeliveryMode::Asynchronous => {
                    if listener.is_none() {
                        let (queue, new_listener) =
                            delivery_queue(config.queue_capacity(), Arc::clone(&metrics));
                        logger.attach_queue(queue);
                        listener = Some(new_listener);
                    }
                    if let Some(listener) = listener.as_mut() {
                        listener.add_handler(sink.handler);
                    }
                }
            }
        }

        let mut listeners = Vec::new();
        if let Some(mut listener) = listener {
            listener.start()?;
            listeners.push(listener);
        }

        Ok((logger, listeners))
    }
}

impl std::fmt::Debug for LoggingSetup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggingSetup")
            .field("config", &self.config)
            .field("console_writer", &self.console_writer.is_some())
            .finish()
    }
}

/// Build a logger from an already loaded configuration.
///
/// # Errors
///
/// See [`LoggingSetup::init`].
pub fn setup(config: &LoggerConfig) -> Result<(Logger, Vec<Listener>)> {
    LoggingSetup::new(config.clone()).init()
}

/// Load `path` with the tolerant loader and build a logger from it.
///
/// A missing or malformed file is reported on stderr and yields a logger
/// with default name and no sinks.
///
/// # Errors
///
/// See [`LoggingSetup::init`].
pub fn init_from_path(path: impl AsRef<Path>) -> Result<(Logger, Vec<Listener>)> {
    setup(&LoggerConfig::load(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_builds_bare_logger() {
        let (logger, listeners) = setup(&LoggerConfig::default()).unwrap();

        assert_eq!(logger.name(), "APP");
        assert_eq!(logger.level(), LogLevel::Debug);
        assert_eq!(logger.handler_count(), 0);
        assert!(!logger.has_queue());
        assert!(listeners.is_empty());

        logger.critical("goes nowhere");
    }

    #[test]
    fn test_async_sinks_share_one_queue_and_listener() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig {
            console: Some(ConsoleConfig {
                is_async: true,
                ..ConsoleConfig::default()
            }),
            file: Some(FileConfig {
                is_async: true,
                file_name: dir.path().join("app.log"),
                ..FileConfig::default()
            }),
            ..LoggerConfig::default()
        };

        let (logger, mut listeners) = LoggingSetup::new(config)
            .console_writer(Vec::<u8>::new())
            .init()
            .unwrap();

        assert_eq!(logger.handler_count(), 0);
        assert!(logger.has_queue());
        assert_eq!(listeners.len(), 1);
        assert!(listeners[0].is_running());

        for listener in &mut listeners {
            listener.stop().unwrap();
        }
    }

    #[test]
    fn test_mixed_modes_route_separately() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggerConfig {
            console: Some(ConsoleConfig::default()),
            file: Some(FileConfig {
                is_async: true,
                file_name: dir.path().join("app.log"),
                ..FileConfig::default()
            }),
            ..LoggerConfig::default()
        };

        let (logger, listeners) = LoggingSetup::new(config)
            .console_writer(Vec::<u8>::new())
            .init()
            .unwrap();

        assert_eq!(logger.handler_count(), 1);
        assert!(logger.has_queue());
        assert_eq!(listeners.len(), 1);
    }
}

//! Logging macros with `format!`-style arguments.
//!
//! # Examples
//!
//! ```
//! use rust_logger_setup::prelude::*;
//! use rust_logger_setup::info;
//!
//! let logger = Logger::new("APP");
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// ```
/// # use rust_logger_setup::prelude::*;
/// # let logger = Logger::new("APP");
/// use rust_logger_setup::log;
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use rust_logger_setup::prelude::*;
/// # let logger = Logger::new("APP");
/// use rust_logger_setup::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Appender, Handler, JsonFormatter, LogLevel, Logger, Result};
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Collect(Arc<Mutex<Vec<String>>>);

    impl Appender for Collect {
        fn append(&mut self, line: &str) -> Result<()> {
            self.0.lock().push(line.to_string());
            Ok(())
        }
        fn flush(&mut self) -> Result<()> {
            Ok(())
        }
        fn name(&self) -> &str {
            "collect"
        }
    }

    #[test]
    fn test_macros_format_messages() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let mut logger = Logger::new("APP");
        logger.add_handler(Handler::new(
            LogLevel::Debug,
            Arc::new(JsonFormatter::default()),
            Box::new(Collect(Arc::clone(&sink))),
        ));

        log!(logger, LogLevel::Info, "Formatted: {}", 42);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        critical!(logger, "Critical failure: {}", "system");

        let lines = sink.lock();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("Formatted: 42"));
        assert!(lines[3].contains("Retry 1 of 3"));
        assert!(lines[5].contains("\"level\":\"CRITICAL\""));
    }
}

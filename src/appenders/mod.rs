//! Appender implementations

pub mod console;
pub mod http;
pub mod rotating_file;

pub use console::{ConsoleAppender, ConsoleStream};
pub use http::HttpAppender;
pub use rotating_file::{RotatingFileAppender, RotationPolicy};

pub use crate::core::Appender;

//! Appender trait for log output destinations

use super::error::Result;

/// Performs the side effect of a sink for one already-formatted line.
pub trait Appender: Send {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

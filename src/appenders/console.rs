//! Console appender implementation

use crate::core::{Appender, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Standard stream the console sink writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleStream {
    #[default]
    Stderr,
    Stdout,
}

enum Target {
    Stream(ConsoleStream),
    Writer(Box<dyn Write + Send>),
}

/// Writes each JSON line to a standard stream, or to an injected writer.
pub struct ConsoleAppender {
    target: Target,
}

impl ConsoleAppender {
    /// Console appender on stderr
    pub fn new() -> Self {
        Self::with_stream(ConsoleStream::Stderr)
    }

    pub fn with_stream(stream: ConsoleStream) -> Self {
        Self {
            target: Target::Stream(stream),
        }
    }

    /// Send output to `writer` instead of a standard stream.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_logger_setup::appenders::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::with_writer(Vec::<u8>::new());
    /// ```
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            target: Target::Writer(Box::new(writer)),
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        match &mut self.target {
            Target::Stream(ConsoleStream::Stderr) => {
                writeln!(std::io::stderr().lock(), "{}", line)?;
            }
            Target::Stream(ConsoleStream::Stdout) => {
                writeln!(std::io::stdout().lock(), "{}", line)?;
            }
            Target::Writer(writer) => {
                writeln!(writer, "{}", line)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match &mut self.target {
            Target::Stream(ConsoleStream::Stderr) => std::io::stderr().flush()?,
            Target::Stream(ConsoleStream::Stdout) => std::io::stdout().flush()?,
            Target::Writer(writer) => writer.flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_target_gets_one_line_per_append() {
        let buf = SharedBuf::default();
        let mut appender = ConsoleAppender::with_writer(buf.clone());

        appender.append(r#"{"message":"a"}"#).unwrap();
        appender.append(r#"{"message":"b"}"#).unwrap();
        appender.flush().unwrap();

        let out = String::from_utf8(buf.0.lock().clone()).unwrap();
        assert_eq!(out, "{\"message\":\"a\"}\n{\"message\":\"b\"}\n");
    }

    #[test]
    fn test_stream_deserializes_lowercase() {
        let stream: ConsoleStream = serde_yaml::from_str("stdout").unwrap();
        assert_eq!(stream, ConsoleStream::Stdout);
        assert_eq!(ConsoleStream::default(), ConsoleStream::Stderr);
    }
}

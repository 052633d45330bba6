//! Sink builders
//!
//! One builder per [`SinkKind`]. Each reads its own section, attaches the
//! shared formatter and returns `Ok(None)` when the sink is absent.

use super::config::{ConsoleConfig, FileConfig, LoggerConfig, RemoteConfig};
use crate::appenders::{ConsoleAppender, HttpAppender, RotatingFileAppender, RotationPolicy};
use crate::core::{Handler, JsonFormatter, Result};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
    Remote,
}

impl SinkKind {
    /// Order in which sinks are built and attached
    pub const ORDER: [SinkKind; 3] = [SinkKind::Console, SinkKind::File, SinkKind::Remote];

    pub fn section_name(&self) -> &'static str {
        match self {
            SinkKind::Console => "console",
            SinkKind::File => "file",
            SinkKind::Remote => "remote",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Handler attached to the logger, runs on the calling thread
    Synchronous,
    /// Handler owned by the listener behind the shared queue
    Asynchronous,
}

impl DeliveryMode {
    pub fn from_async_flag(is_async: bool) -> Self {
        if is_async {
            DeliveryMode::Asynchronous
        } else {
            DeliveryMode::Synchronous
        }
    }
}

/// A constructed sink ready for routing
#[derive(Debug)]
pub struct BuiltSink {
    pub kind: SinkKind,
    pub mode: DeliveryMode,
    pub handler: Handler,
}

pub fn build_console(
    config: &ConsoleConfig,
    formatter: &Arc<JsonFormatter>,
    writer: Option<Box<dyn Write + Send>>,
) -> Result<Option<Handler>> {
    let Some(level) = config.level.level() else {
        return Ok(None);
    };

    let appender = match writer {
        Some(writer) => ConsoleAppender::with_writer(writer),
        None => ConsoleAppender::with_stream(config.stream),
    };

    Ok(Some(Handler::new(level, Arc::clone(formatter), Box::new(appender))))
}

pub fn build_file(config: &FileConfig, formatter: &Arc<JsonFormatter>) -> Result<Option<Handler>> {
    let Some(level) = config.level.level() else {
        return Ok(None);
    };

    let policy = RotationPolicy::new()
        .with_max_bytes(config.max_bytes)
        .with_backup_count(config.backup_count);
    let appender = RotatingFileAppender::with_policy(&config.file_name, policy)?;

    Ok(Some(Handler::new(level, Arc::clone(formatter), Box::new(appender))))
}

/// Built only when a URL is configured and the level is not `NONE`.
pub fn build_remote(config: &RemoteConfig, formatter: &Arc<JsonFormatter>) -> Result<Option<Handler>> {
    let (Some(level), Some(url)) = (config.level.level(), config.target_url()) else {
        return Ok(None);
    };

    let appender =
        HttpAppender::from_url_with_timeout(url, Duration::from_secs(config.timeout_secs))?;

    Ok(Some(Handler::new(level, Arc::clone(formatter), Box::new(appender))))
}

/// Build the sink of `kind` from its section, if the section is present.
///
/// `console_writer` is consumed by the console sink when set.
pub fn build_sink(
    kind: SinkKind,
    config: &LoggerConfig,
    formatter: &Arc<JsonFormatter>,
    console_writer: &mut Option<Box<dyn Write + Send>>,
) -> Result<Option<BuiltSink>> {
    let built = match kind {
        SinkKind::Console => match &config.console {
            Some(section) => build_console(section, formatter, console_writer.take())?
                .map(|h| (section.is_async, h)),
            None => None,
        },
        SinkKind::File => match &config.file {
            Some(section) => build_file(section, formatter)?.map(|h| (section.is_async, h)),
            None => None,
        },
        SinkKind::Remote => match &config.remote {
            Some(section) => build_remote(section, formatter)?.map(|h| (section.is_async, h)),
            None => None,
        },
    };

    Ok(built.map(|(is_async, handler)| BuiltSink {
        kind,
        mode: DeliveryMode::from_async_flag(is_async),
        handler,
    }))
}

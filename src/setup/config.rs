//! Logger configuration model and loader
//!
//! The configuration lives under the top-level `logger` key of a YAML
//! document:
//!
//! ```yaml
//! logger:
//!   logger_name: APP
//!   logger_datefmt: "%Y-%m-%d %H:%M:%S"
//!   console:
//!     async: false
//!     logger_console_handler_level: INFO
//!   file:
//!     async: true
//!     logger_file_handler_level: DEBUG
//!     logger_file_name: app.log
//!     logger_max_bytes: 10485760
//!     logger_backup_count: 3
//!   remote:
//!     async: true
//!     logger_remote_handler_level: WARNING
//!     logger_remote_logging_url: http://localhost:8080/log
//! ```
//!
//! A missing section disables that sink; a present section with missing
//! keys uses the defaults below.

use crate::appenders::console::ConsoleStream;
use crate::appenders::rotating_file::{DEFAULT_BACKUP_COUNT, DEFAULT_MAX_BYTES};
use crate::core::{LevelFilter, LogLevel, LoggerError, Result, DEFAULT_DATEFMT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOGGER_NAME: &str = "APP";
pub const DEFAULT_FILE_NAME: &str = "app.log";
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub logger_name: String,
    pub logger_datefmt: String,
    /// Bound on the shared delivery queue; absent or `0` means unbounded
    pub logger_queue_capacity: Option<usize>,
    pub console: Option<ConsoleConfig>,
    pub file: Option<FileConfig>,
    pub remote: Option<RemoteConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            logger_name: DEFAULT_LOGGER_NAME.to_string(),
            logger_datefmt: DEFAULT_DATEFMT.to_string(),
            logger_queue_capacity: None,
            console: None,
            file: None,
            remote: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    #[serde(rename = "async")]
    pub is_async: bool,
    #[serde(rename = "logger_console_handler_level")]
    pub level: LevelFilter,
    #[serde(rename = "logger_console_stream")]
    pub stream: ConsoleStream,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            is_async: false,
            level: LevelFilter::Level(LogLevel::Info),
            stream: ConsoleStream::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    #[serde(rename = "async")]
    pub is_async: bool,
    #[serde(rename = "logger_file_handler_level")]
    pub level: LevelFilter,
    #[serde(rename = "logger_file_name")]
    pub file_name: PathBuf,
    #[serde(rename = "logger_max_bytes")]
    pub max_bytes: u64,
    #[serde(rename = "logger_backup_count")]
    pub backup_count: usize,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            is_async: false,
            level: LevelFilter::Level(LogLevel::Debug),
            file_name: PathBuf::from(DEFAULT_FILE_NAME),
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    #[serde(rename = "async")]
    pub is_async: bool,
    #[serde(rename = "logger_remote_handler_level")]
    pub level: LevelFilter,
    #[serde(rename = "logger_remote_logging_url")]
    pub url: Option<String>,
    #[serde(rename = "logger_remote_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            is_async: false,
            level: LevelFilter::Level(LogLevel::Warning),
            url: None,
            timeout_secs: DEFAULT_REMOTE_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    /// The configured URL, treating a blank string as absent
    pub fn target_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}

impl LoggerConfig {
    /// Parse the `logger` section of a YAML document.
    ///
    /// A `logger:` key with no value is the empty configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the document is not valid YAML, has no `logger`
    /// key, or contains values of the wrong type.
    pub fn from_yaml_str(document: &str) -> Result<Self> {
        let root: serde_yaml::Value = serde_yaml::from_str(document)?;
        let section = root.get("logger").ok_or(LoggerError::MissingLoggerSection)?;
        if section.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_value(section.clone())?)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| LoggerError::config_file(path.display().to_string(), e))?;
        Self::from_yaml_str(&content)
    }

    /// Read a configuration file, falling back to the empty configuration.
    ///
    /// Any failure is reported on stderr and never returned.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading logger configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Queue capacity to use, `None` for unbounded
    pub fn queue_capacity(&self) -> Option<usize> {
        self.logger_queue_capacity.filter(|&c| c > 0)
    }
}

//! Rotating file appender
//!
//! Appends JSON lines to a file and rolls it over once the next line would
//! push it past `max_bytes`. Backups are named `<file>.1` (newest) through
//! `<file>.<backup_count>` (oldest); anything older is deleted.

use crate::core::appender::Appender;
use crate::core::error::{LoggerError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default size threshold: 10 MiB
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of rotated files to keep
pub const DEFAULT_BACKUP_COUNT: usize = 3;

/// When to rotate and how many backups to keep
///
/// # Examples
///
/// ```
/// use rust_logger_setup::appenders::RotationPolicy;
///
/// let policy = RotationPolicy::new()
///     .with_max_bytes(50 * 1024 * 1024)
///     .with_backup_count(7);
/// assert_eq!(policy.backup_count, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Size threshold in bytes; `0` never rotates
    pub max_bytes: u64,
    /// Rotated files to keep; `0` disables rollover
    pub backup_count: usize,
}

impl Default for RotationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
        }
    }
}

impl RotationPolicy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_backup_count(mut self, count: usize) -> Self {
        self.backup_count = count;
        self
    }
}

/// Size-based rotating file appender
///
/// # Examples
///
/// ```no_run
/// use rust_logger_setup::appenders::{RotatingFileAppender, RotationPolicy};
///
/// let policy = RotationPolicy::new().with_max_bytes(1024 * 1024).with_backup_count(5);
/// let appender = RotatingFileAppender::with_policy("/var/log/app.log", policy).unwrap();
/// ```
pub struct RotatingFileAppender {
    base_path: PathBuf,
    policy: RotationPolicy,
    writer: Option<BufWriter<File>>,
    current_size: u64,
}

impl RotatingFileAppender {
    /// Open `path` for appending with the default policy
    ///
    /// # Errors
    ///
    /// Returns error if the file or its parent directory cannot be created
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_policy(path, RotationPolicy::default())
    }

    /// Open `path` for appending with a custom policy
    ///
    /// # Errors
    ///
    /// Returns error if the file or its parent directory cannot be created
    pub fn with_policy<P: AsRef<Path>>(path: P, policy: RotationPolicy) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();

        if let Some(parent) = base_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "create log directory",
                    format!("Failed to create directory '{}'", parent.display()),
                    e,
                )
            })?;
        }

        let (file, current_size) = Self::open_append(&base_path)?;

        Ok(Self {
            base_path,
            policy,
            writer: Some(BufWriter::new(file)),
            current_size,
        })
    }

    fn open_append(path: &Path) -> Result<(File, u64)> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::file_appender(path.display().to_string(), format!("Failed to open: {}", e))
            })?;

        let size = file
            .metadata()
            .map_err(|e| {
                LoggerError::file_appender(
                    path.display().to_string(),
                    format!("Cannot access file metadata: {}", e),
                )
            })?
            .len();

        Ok((file, size))
    }

    /// Whether writing `incoming` more bytes calls for a rollover first.
    ///
    /// A zero `max_bytes` or zero `backup_count` disables rollover.
    fn should_rotate(&self, incoming: u64) -> bool {
        self.policy.max_bytes > 0
            && self.policy.backup_count > 0
            && self.current_size > 0
            && self.current_size + incoming > self.policy.max_bytes
    }

    fn rotate(&mut self) -> Result<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to flush before rotation: {}", e),
                )
            })?;
        }

        let oldest = self.backup_path(self.policy.backup_count);
        if oldest.exists() {
            if let Err(e) = fs::remove_file(&oldest) {
                eprintln!("[LOGGER WARNING] Failed to remove oldest backup {}: {}", oldest.display(), e);
            }
        }

        for i in (1..self.policy.backup_count).rev() {
            let old_path = self.backup_path(i);
            if !old_path.exists() {
                continue;
            }
            let new_path = self.backup_path(i + 1);
            if fs::rename(&old_path, &new_path).is_err() {
                // Some platforms refuse to rename over an existing file
                let _ = fs::remove_file(&new_path);
                fs::rename(&old_path, &new_path).map_err(|e| {
                    LoggerError::file_rotation(
                        old_path.display().to_string(),
                        format!("Failed to rotate backup files: {}", e),
                    )
                })?;
            }
        }

        if self.base_path.exists() {
            fs::rename(&self.base_path, self.backup_path(1)).map_err(|e| {
                LoggerError::file_rotation(
                    self.base_path.display().to_string(),
                    format!("Failed to rotate current log file: {}", e),
                )
            })?;
        }

        let (file, size) = Self::open_append(&self.base_path)?;
        self.writer = Some(BufWriter::new(file));
        self.current_size = size;

        Ok(())
    }

    /// Path of the `index`-th backup
    pub fn backup_path(&self, index: usize) -> PathBuf {
        let mut path = self.base_path.clone();
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app.log")
            .to_string();
        path.set_file_name(format!("{}.{}", filename, index));
        path
    }

    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.base_path
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }
}

impl Appender for RotatingFileAppender {
    fn name(&self) -> &str {
        "file"
    }

    fn append(&mut self, line: &str) -> Result<()> {
        let bytes_written = line.len() as u64 + 1;

        if self.should_rotate(bytes_written) {
            if let Err(e) = self.rotate() {
                eprintln!("[LOGGER WARNING] Log rotation failed: {}. Continuing with current file.", e);

                if self.writer.is_none() {
                    let (file, _) = Self::open_append(&self.base_path).map_err(|reopen_err| {
                        eprintln!(
                            "[LOGGER ERROR] Failed to reopen log file after rotation failure: {}",
                            reopen_err
                        );
                        e
                    })?;
                    self.writer = Some(BufWriter::new(file));
                }

                // Let the file grow past the limit instead of retrying every line
                self.current_size = 0;
            }
        }

        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LoggerError::writer("Writer not initialized"))?;

        writeln!(writer, "{}", line).map_err(|e| {
            LoggerError::file_appender(
                self.base_path.display().to_string(),
                format!("Failed to write log line: {}", e),
            )
        })?;
        self.current_size += bytes_written;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush().map_err(|e| {
                LoggerError::file_appender(
                    self.base_path.display().to_string(),
                    format!("Failed to flush: {}", e),
                )
            })?;
        }
        Ok(())
    }
}

impl Drop for RotatingFileAppender {
    fn drop(&mut self) {
        if let Some(mut writer) = self.writer.take() {
            let _ = writer.flush();
        }
    }
}

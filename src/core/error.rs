//! Error types for the logger setup

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML configuration document error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Configuration file could not be read
    #[error("Configuration file '{path}' could not be read: {source}")]
    ConfigFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration document has no `logger` section
    #[error("Configuration document has no 'logger' section")]
    MissingLoggerSection,

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File appender error with path
    #[error("File appender error for '{path}': {message}")]
    FileAppenderError { path: String, message: String },

    /// File rotation error
    #[error("File rotation failed for '{path}': {message}")]
    FileRotationError { path: String, message: String },

    /// Remote delivery error with endpoint
    #[error("Remote delivery to '{endpoint}' failed: {message}")]
    RemoteDelivery { endpoint: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a configuration file read error
    pub fn config_file(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::ConfigFile {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file appender error
    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a file rotation error
    pub fn file_rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileRotationError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a remote delivery error
    pub fn remote(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::RemoteDelivery {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("remote", "invalid URL");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::file_appender("/var/log/app.log", "Permission denied");
        assert!(matches!(err, LoggerError::FileAppenderError { .. }));

        let err = LoggerError::remote("http://127.0.0.1:80/log", "connection refused");
        assert!(matches!(err, LoggerError::RemoteDelivery { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::file_rotation("/var/log/app.log", "Disk full");
        assert_eq!(
            err.to_string(),
            "File rotation failed for '/var/log/app.log': Disk full"
        );

        let err = LoggerError::remote("http://logs:8080/log", "status 500");
        assert_eq!(
            err.to_string(),
            "Remote delivery to 'http://logs:8080/log' failed: status 500"
        );

        assert_eq!(
            LoggerError::MissingLoggerSection.to_string(),
            "Configuration document has no 'logger' section"
        );
    }

    #[test]
    fn test_yaml_error_converts() {
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("logger: [unclosed").unwrap_err();
        let err: LoggerError = yaml_err.into();
        assert!(matches!(err, LoggerError::YamlError(_)));
        assert!(err.to_string().starts_with("YAML error: "));
    }

    #[test]
    fn test_config_file_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = LoggerError::config_file("config.yaml", io_err);

        assert!(err.to_string().contains("config.yaml"));
        assert!(err.to_string().contains("no such file"));
    }
}

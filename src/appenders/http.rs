//! HTTP appender for remote logging
//!
//! POSTs every JSON line to a collector endpoint. Delivery is one request
//! per record with no retry; a failed request surfaces as an error for that
//! record only.

use crate::core::{Appender, LoggerError, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;

/// Port used when the URL does not name one
pub const DEFAULT_PORT: u16 = 80;

/// Path used when the URL has none
pub const DEFAULT_PATH: &str = "/log";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Network appender that POSTs log lines over HTTP
///
/// # Example
///
/// ```no_run
/// use rust_logger_setup::appenders::HttpAppender;
///
/// let appender = HttpAppender::from_url("http://logs.internal:9000/ingest").unwrap();
/// assert_eq!(appender.endpoint(), "http://logs.internal:9000/ingest");
/// ```
pub struct HttpAppender {
    endpoint: String,
    client: Client,
}

impl HttpAppender {
    /// Target `http://host:port` + `path`
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created
    pub fn new(host: &str, port: u16, path: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoggerError::config("remote", format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: format!("http://{}:{}{}", host, port, path),
            client,
        })
    }

    /// Parse a collector URL with [`DEFAULT_TIMEOUT`]
    ///
    /// # Errors
    ///
    /// Returns error if the URL is invalid or has no host
    pub fn from_url(url: &str) -> Result<Self> {
        Self::from_url_with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Parse a collector URL into host, port (default 80) and path
    /// (default `/log`). The scheme is not used; delivery is plain HTTP.
    ///
    /// # Errors
    ///
    /// Returns error if the URL is invalid or has no host
    pub fn from_url_with_timeout(url: &str, timeout: Duration) -> Result<Self> {
        let (host, port, path) = parse_target(url)?;
        Self::new(&host, port, &path, timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn parse_target(url: &str) -> Result<(String, u16, String)> {
    let parsed = Url::parse(url)
        .map_err(|e| LoggerError::config("remote", format!("Invalid remote logging URL '{}': {}", url, e)))?;

    let host = parsed
        .host_str()
        .ok_or_else(|| LoggerError::config("remote", format!("Remote logging URL '{}' has no host", url)))?
        .to_string();
    let port = parsed.port().unwrap_or(DEFAULT_PORT);
    let path = match parsed.path() {
        "" | "/" => DEFAULT_PATH.to_string(),
        p => p.to_string(),
    };

    Ok((host, port, path))
}

impl Appender for HttpAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(line.to_string())
            .send()
            .map_err(|e| LoggerError::remote(&self.endpoint, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoggerError::remote(
                &self.endpoint,
                format!("server answered {}", status),
            ));
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "remote"
    }
}

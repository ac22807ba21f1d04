// ABOUTME: Error types for web session operations: ErrorCode enum and FetchError struct.
// ABOUTME: Errors carry the URL and operation, with convenience constructors and boolean helpers.

use std::fmt;

/// Categories of web session failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Session settings (headers, TLS backend) could not be applied.
    Config,
    InvalidUrl,
    /// Transport-level failure: DNS, connection, TLS, body read.
    Fetch,
    Timeout,
    /// The server answered with something other than 200 OK.
    Status(u16),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Config => write!(f, "invalid session config"),
            ErrorCode::InvalidUrl => write!(f, "invalid URL"),
            ErrorCode::Fetch => write!(f, "fetch error"),
            ErrorCode::Timeout => write!(f, "timeout"),
            ErrorCode::Status(status) => write!(f, "HTTP status {}", status),
        }
    }
}

/// The error type for web session operations.
#[derive(Debug, thiserror::Error)]
pub struct FetchError {
    pub code: ErrorCode,
    pub url: String,
    pub op: String,
    #[source]
    pub source: Option<anyhow::Error>,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "web: {} {}: {}", self.op, self.url, self.code)?;
        if let Some(ref src) = self.source {
            write!(f, ": {}", src)?;
        }
        Ok(())
    }
}

impl FetchError {
    fn new(
        code: ErrorCode,
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            code,
            url: url.into(),
            op: op.into(),
            source,
        }
    }

    /// Create a Config error. There is no URL yet when building a session.
    pub fn config(op: impl Into<String>, source: Option<anyhow::Error>) -> Self {
        Self::new(ErrorCode::Config, String::new(), op, source)
    }

    /// Create an InvalidUrl error.
    pub fn invalid_url(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::InvalidUrl, url, op, source)
    }

    /// Create a Fetch error.
    pub fn fetch(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Fetch, url, op, source)
    }

    /// Create a Timeout error.
    pub fn timeout(
        url: impl Into<String>,
        op: impl Into<String>,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self::new(ErrorCode::Timeout, url, op, source)
    }

    /// Create a Status error for a non-200 response.
    pub fn status(url: impl Into<String>, op: impl Into<String>, status: u16) -> Self {
        Self::new(ErrorCode::Status(status), url, op, None)
    }

    /// Classifies a reqwest failure as Timeout or Fetch.
    pub(crate) fn from_reqwest(url: &str, op: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(url, op, Some(anyhow::Error::new(err)))
        } else {
            Self::fetch(url, op, Some(anyhow::Error::new(err)))
        }
    }

    /// Returns true if this is a Config error.
    pub fn is_config(&self) -> bool {
        self.code == ErrorCode::Config
    }

    /// Returns true if this is an InvalidUrl error.
    pub fn is_invalid_url(&self) -> bool {
        self.code == ErrorCode::InvalidUrl
    }

    /// Returns true if this is a Fetch error.
    pub fn is_fetch(&self) -> bool {
        self.code == ErrorCode::Fetch
    }

    /// Returns true if this is a Timeout error.
    pub fn is_timeout(&self) -> bool {
        self.code == ErrorCode::Timeout
    }

    /// Returns true if the server replied with a non-200 status.
    pub fn is_status(&self) -> bool {
        matches!(self.code, ErrorCode::Status(_))
    }

    /// The HTTP status, for Status errors.
    pub fn http_status(&self) -> Option<u16> {
        match self.code {
            ErrorCode::Status(status) => Some(status),
            _ => None,
        }
    }
}

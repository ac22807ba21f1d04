// ABOUTME: Configuration for web sessions: SessionOptions and the fluent SessionBuilder.
// ABOUTME: The builder turns options into a blocking reqwest client inside a WebSession.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::FetchError;
use crate::session::WebSession;

/// Encoding used to decode response text when the server does not name one.
pub const DEFAULT_TEXT_ENCODING: &str = "utf-8";

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("dreamy/", env!("CARGO_PKG_VERSION"));

/// Configuration options for a web session.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub user_agent: String,
    pub timeout: Duration,
    pub headers: HashMap<String, String>,
    /// Encoding label (WHATWG name such as "utf-8" or "windows-1250").
    pub text_encoding: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
            headers: HashMap::new(),
            text_encoding: DEFAULT_TEXT_ENCODING.to_string(),
        }
    }
}

/// Builder for constructing WebSession instances with custom configuration.
#[derive(Debug, Clone)]
pub struct SessionBuilder {
    opts: SessionOptions,
}

impl SessionBuilder {
    /// Create a new SessionBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: SessionOptions::default(),
        }
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Add a header sent with every request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    /// Set the fallback text encoding.
    pub fn text_encoding(mut self, label: impl Into<String>) -> Self {
        self.opts.text_encoding = label.into();
        self
    }

    /// Build the WebSession with the configured options.
    pub fn build(self) -> Result<WebSession, FetchError> {
        let mut headers = HeaderMap::new();
        for (key, value) in &self.opts.headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                FetchError::config("Build", Some(anyhow::anyhow!("header {:?}: {}", key, e)))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                FetchError::config("Build", Some(anyhow::anyhow!("header {:?}: {}", key, e)))
            })?;
            headers.insert(name, value);
        }

        if encoding_rs::Encoding::for_label(self.opts.text_encoding.as_bytes()).is_none() {
            return Err(FetchError::config(
                "Build",
                Some(anyhow::anyhow!(
                    "unknown text encoding {:?}",
                    self.opts.text_encoding
                )),
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(self.opts.user_agent.clone())
            .timeout(self.opts.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::config("Build", Some(anyhow::Error::new(e))))?;

        Ok(WebSession::new(client, self.opts))
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

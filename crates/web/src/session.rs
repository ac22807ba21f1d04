// ABOUTME: WebSession wraps a blocking reqwest client for simple GET and form POST calls.
// ABOUTME: Non-200 replies become Status errors; text bodies are decoded with charset fallback.

use bytes::Bytes;
use reqwest::blocking::{RequestBuilder, Response};
use reqwest::header::CONTENT_TYPE;
use scraper::Html;
use tracing::{debug, warn};
use url::Url;

use crate::decode::decode_body;
use crate::error::FetchError;
use crate::options::{SessionBuilder, SessionOptions};

/// A configured HTTP session. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct WebSession {
    client: reqwest::blocking::Client,
    opts: SessionOptions,
}

impl WebSession {
    pub(crate) fn new(client: reqwest::blocking::Client, opts: SessionOptions) -> Self {
        Self { client, opts }
    }

    /// Create a builder for configuring a session.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Returns the options this session was built with.
    pub fn options(&self) -> &SessionOptions {
        &self.opts
    }

    /// GETs `url` and returns the raw body.
    pub fn get_bytes(&self, url: &str) -> Result<Bytes, FetchError> {
        let parsed = validate_url(url, "Get")?;
        let response = self.send(url, "Get", self.client.get(parsed))?;
        response
            .bytes()
            .map_err(|e| FetchError::from_reqwest(url, "Get", e))
    }

    /// GETs `url` and returns the decoded body.
    pub fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = validate_url(url, "Get")?;
        let response = self.send(url, "Get", self.client.get(parsed))?;
        self.read_text(url, "Get", response)
    }

    /// POSTs `payload` as `application/x-www-form-urlencoded` and returns the decoded reply.
    pub fn post_form(&self, url: &str, payload: &[(&str, &str)]) -> Result<String, FetchError> {
        let parsed = validate_url(url, "Post")?;
        let response = self.send(url, "Post", self.client.post(parsed).form(payload))?;
        self.read_text(url, "Post", response)
    }

    /// POSTs `payload` like [`WebSession::post_form`] and returns the raw reply body.
    pub fn post_form_bytes(
        &self,
        url: &str,
        payload: &[(&str, &str)],
    ) -> Result<Bytes, FetchError> {
        let parsed = validate_url(url, "Post")?;
        let response = self.send(url, "Post", self.client.post(parsed).form(payload))?;
        response
            .bytes()
            .map_err(|e| FetchError::from_reqwest(url, "Post", e))
    }

    /// GETs `url` and parses it with the lenient HTML parser.
    pub fn get_document(&self, url: &str) -> Result<Html, FetchError> {
        let text = self.get_text(url)?;
        Ok(Html::parse_document(&text))
    }

    fn send(&self, url: &str, op: &str, request: RequestBuilder) -> Result<Response, FetchError> {
        debug!(url, op, "sending request");
        let response = request
            .send()
            .map_err(|e| FetchError::from_reqwest(url, op, e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!(url, op, status = status.as_u16(), "unexpected HTTP status");
            return Err(FetchError::status(url, op, status.as_u16()));
        }
        Ok(response)
    }

    fn read_text(&self, url: &str, op: &str, response: Response) -> Result<String, FetchError> {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .map_err(|e| FetchError::from_reqwest(url, op, e))?;
        debug!(url, bytes = body.len(), "received body");
        Ok(decode_body(
            &body,
            content_type.as_deref(),
            &self.opts.text_encoding,
        ))
    }
}

fn validate_url(url: &str, op: &str) -> Result<Url, FetchError> {
    let parsed =
        Url::parse(url).map_err(|e| FetchError::invalid_url(url, op, Some(anyhow::Error::new(e))))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(FetchError::invalid_url(
            url,
            op,
            Some(anyhow::anyhow!("unsupported scheme {:?}", other)),
        )),
    }
}

//! HTTP seam between the video API client and the network.
//!
//! Statuses are data here, not errors: `VideoApi` decides what a 400 from
//! `/login` or a 401 from `/videos/trending` means. [`HttpError`] covers only
//! requests that produced no status at all.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// Request headers by name.
pub type Headers = HashMap<String, String>;

/// Longest body excerpt [`Response::body_preview`] returns.
const PREVIEW_CHARS: usize = 200;

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A response carrying `value` serialized as its body.
    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Start of the body as text, for log records.
    pub fn body_preview(&self) -> String {
        let text = String::from_utf8_lossy(&self.body);
        match text.char_indices().nth(PREVIEW_CHARS) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.into_owned(),
        }
    }
}

/// A request that never produced a response.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    /// The request could not be built (bad URL or header)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Status arrived but the body could not be read
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// The two verbs the video API needs.
///
/// ```ignore
/// use nxtwatch::traits::{Headers, HttpClient};
///
/// let response = client.get("https://apis.ccbp.in/videos/gaming", &Headers::new()).await?;
/// if response.is_success() { /* decode */ }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// POST `body` as-is; callers set `Content-Type`.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;
}

//! Listing and detail request errors.

use super::category::ErrorCategory;
use crate::traits::HttpError;

/// Body text of every screen's failure panel.
pub const FAILURE_MESSAGE: &str =
    "We are having some trouble to complete your request. Please try again.";

/// Errors from authenticated listing/detail requests.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The request failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx body that does not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether retrying the identical request is likely to help.
    ///
    /// Retry is offered on every failure panel regardless.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Status { status } => *status >= 500 || *status == 408 || *status == 429,
            FetchError::Network(_) => true,
            FetchError::Decode(_) => false,
        }
    }

    pub fn user_message(&self) -> &'static str {
        FAILURE_MESSAGE
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::Status { status: 401 | 403 } => ErrorCategory::Auth,
            FetchError::Status { .. } => ErrorCategory::Server,
            FetchError::Network(_) => ErrorCategory::Network,
            FetchError::Decode(_) => ErrorCategory::Client,
        }
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

//! Login errors.

use super::category::ErrorCategory;
use crate::traits::{HttpError, SessionError};

/// Message shown when the server rejects a login without an `error_msg`.
pub const GENERIC_LOGIN_MESSAGE: &str = "Invalid Credentials";

/// Message shown when the login request never reached the server.
pub const NETWORK_LOGIN_MESSAGE: &str = "Network error, try again.";

/// Errors from the login flow.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// The server answered non-2xx, or 2xx without a token.
    #[error("Login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request failed before a response arrived.
    #[error("Login request failed: {message}")]
    Network { message: String },

    /// The token was issued but could not be persisted.
    #[error("Could not store session: {0}")]
    Storage(#[from] SessionError),
}

impl AuthError {
    /// Text for the inline error line on the login form.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected { message, .. } => message.clone(),
            AuthError::Network { .. } => NETWORK_LOGIN_MESSAGE.to_string(),
            AuthError::Storage(err) => err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AuthError::Rejected { .. } => ErrorCategory::Auth,
            AuthError::Network { .. } => ErrorCategory::Network,
            AuthError::Storage(_) => ErrorCategory::Storage,
        }
    }
}

impl From<HttpError> for AuthError {
    fn from(err: HttpError) -> Self {
        AuthError::Network {
            message: err.to_string(),
        }
    }
}

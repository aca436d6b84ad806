//! Session store trait abstraction.
//!
//! The session is a single credential token with an expiry. Route guards read
//! it to decide access, and the API client reads it to build the bearer header.

use std::time::Duration;

/// Session persistence errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Failed to determine home directory")]
    NoHomeDirectory,
    #[error("Session IO error: {0}")]
    Io(String),
    #[error("Session serialization error: {0}")]
    Serialization(String),
}

/// Storage for the credential token.
///
/// Implementations must treat an expired token as absent.
pub trait SessionStore: Send + Sync {
    /// Store `token`, valid for `ttl` from now.
    fn set(&self, token: &str, ttl: Duration) -> Result<(), SessionError>;

    /// The stored token, if present and not expired.
    fn get(&self) -> Option<String>;

    /// Remove the stored token. Clearing an absent session succeeds.
    fn clear(&self) -> Result<(), SessionError>;

    /// Whether a usable token is stored.
    fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}

//! In-memory session store for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;

use crate::auth::StoredSession;
use crate::traits::{SessionError, SessionStore};

/// Session store kept in memory; clones share state.
///
/// # Example
///
/// ```ignore
/// use nxtwatch::adapters::mock::InMemorySession;
/// use nxtwatch::traits::SessionStore;
///
/// let session = InMemorySession::new();
/// session.set("token", std::time::Duration::from_secs(60))?;
/// assert_eq!(session.get().as_deref(), Some("token"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    stored: Arc<Mutex<StoredSession>>,
    set_should_fail: Arc<Mutex<bool>>,
    clear_should_fail: Arc<Mutex<bool>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session already holding `token` for an hour.
    pub fn with_token(token: &str) -> Self {
        let session = Self::new();
        *session.stored.lock().unwrap() =
            StoredSession::issue(token, Duration::from_secs(3600), Utc::now());
        session
    }

    /// Replace the stored record as-is (e.g. an already expired one).
    pub fn set_stored(&self, stored: StoredSession) {
        *self.stored.lock().unwrap() = stored;
    }

    pub fn stored(&self) -> StoredSession {
        self.stored.lock().unwrap().clone()
    }

    pub fn set_set_should_fail(&self, should_fail: bool) {
        *self.set_should_fail.lock().unwrap() = should_fail;
    }

    pub fn set_clear_should_fail(&self, should_fail: bool) {
        *self.clear_should_fail.lock().unwrap() = should_fail;
    }
}

impl SessionStore for InMemorySession {
    fn set(&self, token: &str, ttl: Duration) -> Result<(), SessionError> {
        if *self.set_should_fail.lock().unwrap() {
            return Err(SessionError::Io("Mock set failure".to_string()));
        }
        *self.stored.lock().unwrap() = StoredSession::issue(token, ttl, Utc::now());
        Ok(())
    }

    fn get(&self) -> Option<String> {
        self.stored.lock().unwrap().valid_token(Utc::now())
    }

    fn clear(&self) -> Result<(), SessionError> {
        if *self.clear_should_fail.lock().unwrap() {
            return Err(SessionError::Io("Mock clear failure".to_string()));
        }
        *self.stored.lock().unwrap() = StoredSession::default();
        Ok(())
    }
}

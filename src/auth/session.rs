//! Session record storage.
//!
//! The token lives in `<data_dir>/session.json` under the `jwt_token` key,
//! next to its expiry as Unix seconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::traits::SessionError;

/// The session file name.
pub const SESSION_FILE: &str = "session.json";

/// A stored credential token.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoredSession {
    pub jwt_token: Option<String>,
    /// Expiry as Unix timestamp (seconds since epoch).
    pub expires_at: Option<i64>,
}

impl StoredSession {
    /// A session for `token` expiring `ttl` after `now`.
    pub fn issue(token: &str, ttl: Duration, now: DateTime<Utc>) -> Self {
        let ttl_secs = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);
        Self {
            jwt_token: Some(token.to_string()),
            expires_at: Some(now.timestamp().saturating_add(ttl_secs)),
        }
    }

    pub fn has_token(&self) -> bool {
        self.jwt_token.is_some()
    }

    /// Expired when past `expires_at`, or when no expiry is recorded.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now.timestamp() >= expires_at,
            None => true,
        }
    }

    /// The token if present and unexpired at `now`.
    pub fn valid_token(&self, now: DateTime<Utc>) -> Option<String> {
        if self.is_expired(now) {
            return None;
        }
        self.jwt_token.clone()
    }
}

/// Reads and writes the session file.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// The session file inside `data_dir`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the session record.
    ///
    /// Returns an empty record if the file doesn't exist or can't be read.
    pub fn load(&self) -> StoredSession {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(_) => return StoredSession::default(),
        };

        match serde_json::from_reader(BufReader::new(file)) {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
                StoredSession::default()
            }
        }
    }

    /// Write the session record, creating the parent directory if needed.
    pub fn save(&self, session: &StoredSession) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| SessionError::Io(e.to_string()))?;
        }

        let file = File::create(&self.path).map_err(|e| SessionError::Io(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, session)
            .map_err(|e| SessionError::Serialization(e.to_string()))?;
        writer.flush().map_err(|e| SessionError::Io(e.to_string()))
    }

    /// Remove the session file. A missing file is not an error.
    pub fn remove(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Io(e.to_string())),
        }
    }
}

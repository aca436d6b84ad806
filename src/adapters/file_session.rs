//! File-based session store adapter.

use chrono::Utc;
use std::path::Path;
use std::time::Duration;

use crate::auth::{SessionFile, StoredSession};
use crate::traits::{SessionError, SessionStore};

/// Session store backed by `<data_dir>/session.json`.
///
/// The file is re-read on every `get`, so a logout from another process
/// (`nxtwatch --logout`) is seen at the next navigation.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    file: SessionFile,
}

impl FileSessionStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file: SessionFile::in_dir(data_dir),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl SessionStore for FileSessionStore {
    fn set(&self, token: &str, ttl: Duration) -> Result<(), SessionError> {
        self.file
            .save(&StoredSession::issue(token, ttl, Utc::now()))
    }

    fn get(&self) -> Option<String> {
        self.file.load().valid_token(Utc::now())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.file.remove()
    }
}

//! Error category classification.

use std::fmt;

/// High-level categorization of errors for logging and retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems. Generally transient.
    Network,
    /// The server rejected the credentials or the token.
    Auth,
    /// The server answered with a non-2xx status.
    Server,
    /// The server answered 2xx but the body was not what we expect.
    Client,
    /// Local persistence failed.
    Storage,
}

impl ErrorCategory {
    /// Whether errors in this category are usually worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Storage => "storage",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_categories() {
        assert!(ErrorCategory::Network.is_transient());
        assert!(ErrorCategory::Server.is_transient());
        assert!(!ErrorCategory::Auth.is_transient());
        assert!(!ErrorCategory::Client.is_transient());
        assert!(!ErrorCategory::Storage.is_transient());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCategory::Network.to_string(), "network");
        assert_eq!(ErrorCategory::Storage.to_string(), "storage");
    }
}

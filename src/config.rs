//! Application configuration.
//!
//! Defaults can be overridden from the environment:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `NXTWATCH_API_URL` | `https://apis.ccbp.in` |
//! | `NXTWATCH_HOME` | `~/.nxtwatch` |
//! | `NXTWATCH_SESSION_DAYS` | `30` |
//! | `NXTWATCH_LOG` | `nxtwatch=info` |

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_API_URL;

/// Data directory name under the home directory.
const DATA_DIR: &str = ".nxtwatch";

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "nxtwatch.log";

/// Default session lifetime in days.
pub const DEFAULT_SESSION_DAYS: u64 = 30;

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "nxtwatch=info";

/// `~/.nxtwatch`, or `None` when the home directory is unknown.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR))
}

/// Runtime configuration.
///
/// # Example
///
/// ```ignore
/// use nxtwatch::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_url("http://localhost:8080")
///     .with_session_days(1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the video API
    pub api_url: String,
    /// Directory holding the session file and the log
    pub data_dir: PathBuf,
    /// How long a login stays valid
    pub session_ttl: Duration,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: default_data_dir().unwrap_or_else(|| PathBuf::from(DATA_DIR)),
            session_ttl: Duration::from_secs(DEFAULT_SESSION_DAYS * 86_400),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `NXTWATCH_*` environment variables.
    ///
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("NXTWATCH_API_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_api_url(url.trim());
        }
        if let Some(dir) = lookup("NXTWATCH_HOME").filter(|v| !v.trim().is_empty()) {
            config = config.with_data_dir(PathBuf::from(dir));
        }
        if let Some(days) = lookup("NXTWATCH_SESSION_DAYS") {
            match days.trim().parse::<u64>() {
                Ok(days) if days > 0 => config = config.with_session_days(days),
                _ => tracing::warn!(value = %days, "ignoring invalid NXTWATCH_SESSION_DAYS"),
            }
        }
        if let Some(filter) = lookup("NXTWATCH_LOG").filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }

        config
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_data_dir(mut self, dir: PathBuf) -> Self {
        self.data_dir = dir;
        self
    }

    pub fn with_session_days(mut self, days: u64) -> Self {
        self.session_ttl = Duration::from_secs(days.saturating_mul(86_400));
        self
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}

//! File logging.
//!
//! The TUI owns the terminal, so log records go to `<data_dir>/nxtwatch.log`.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global subscriber. Call once, before the TUI starts.
pub fn init(config: &AppConfig) -> Result<()> {
    fs::create_dir_all(&config.data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!(e))?;

    tracing::info!(version = crate::cli::VERSION, "nxtwatch starting");
    Ok(())
}

//! Command-line argument parsing.

use crate::app::Route;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print the version
    Version,
    /// Clear the stored session
    Logout,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments; the first argument is the program name.
///
/// ```
/// use nxtwatch::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["nxtwatch".to_string(), "--logout".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Logout);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--logout" => return CliCommand::Logout,
            _ => {}
        }
    }
    CliCommand::RunTui
}

/// Route to open first: the first argument that looks like a path,
/// e.g. `nxtwatch /trending`. Unknown paths fall back to home.
pub fn start_route<I>(args: I) -> Route
where
    I: Iterator<Item = String>,
{
    match args.skip(1).find(|arg| arg.starts_with('/')) {
        Some(path) => Route::parse(&path).unwrap_or_else(|| {
            tracing::warn!(%path, "unknown start path, opening home");
            Route::Home
        }),
        None => Route::Home,
    }
}

//! Command-line flags handled before the TUI starts.
//!
//! ```ignore
//! use nxtwatch::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! if let Some(result) = run_cli_command(command, &session) {
//!     // flag handled; exit
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, start_route, CliCommand};
pub use version::VERSION;

use crate::traits::{SessionError, SessionStore};

/// Run a flag command. `None` means start the TUI.
pub fn run_cli_command(
    command: CliCommand,
    session: &dyn SessionStore,
) -> Option<Result<(), SessionError>> {
    match command {
        CliCommand::Version => {
            println!("{}", version::version_line());
            Some(Ok(()))
        }
        CliCommand::Logout => Some(crate::auth::sign_out(session).map(|()| {
            println!("Signed out.");
        })),
        CliCommand::RunTui => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::InMemorySession;

    #[test]
    fn test_logout_clears_session() {
        let session = InMemorySession::with_token("t");
        let result = run_cli_command(CliCommand::Logout, &session);
        assert_eq!(result, Some(Ok(())));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_reports_storage_failure() {
        let session = InMemorySession::with_token("t");
        session.set_clear_should_fail(true);
        assert!(matches!(
            run_cli_command(CliCommand::Logout, &session),
            Some(Err(_))
        ));
    }

    #[test]
    fn test_run_tui_is_not_handled() {
        assert!(run_cli_command(CliCommand::RunTui, &InMemorySession::new()).is_none());
    }
}

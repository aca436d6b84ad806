//! Terminal ownership for the TUI.
//!
//! [`TerminalSession`] puts the terminal into raw mode on the alternate
//! screen and puts it back when dropped. [`install_panic_hook`] does the same
//! restore before a panic message is printed.
//!
//! ```no_run
//! use nxtwatch::terminal::{install_panic_hook, TerminalSession};
//!
//! fn main() -> color_eyre::Result<()> {
//!     install_panic_hook();
//!     let mut session = TerminalSession::new()?;
//!     session.terminal().draw(|_frame| {})?;
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::install_panic_hook;
pub use setup::{enter_tui_mode, leave_tui_mode, restore_terminal};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, layout::Size, Terminal};
use std::io::{self, Stdout};

/// The terminal in TUI mode; restored on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalSession {
    /// Enable raw mode, enter the alternate screen and clear it.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        enter_tui_mode(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    pub fn size(&self) -> Result<Size> {
        Ok(self.terminal.size()?)
    }

    /// Leave TUI mode now. Later calls, including the one on drop, do nothing.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}

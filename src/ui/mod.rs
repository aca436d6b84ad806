//! UI rendering
//!
//! Every function here is a pure function of [`App`] state. The login page
//! is drawn on its own; every other route is drawn inside the shell
//! (header, collapsible sidebar, key-hint footer).
//!
//! ## Responsive grid
//!
//! Listing cards flow into 1 to 4 columns depending on the width left beside
//! the sidebar; see [`grid_columns`] and [`content_width`]. Key handling uses
//! the same two functions so arrow keys move by whole rows.

mod detail;
mod helpers;
mod home;
mod listing;
mod login;
mod saved;
mod shell;
mod theme;

pub use helpers::{grid_columns, truncate_to_width};
pub use shell::{content_width, key_hints, SIDEBAR_WIDTH};
pub use theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_ERROR};

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::{App, Screen};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI for the mounted screen
pub fn render(frame: &mut Frame, app: &App) {
    if let Screen::Login(form) = &app.screen {
        login::render_login(frame, form, app.tick_count);
        return;
    }

    let area = shell::render_shell(frame, app);
    let now = Utc::now();
    match &app.screen {
        Screen::Home(home) => home::render_home(frame, area, home, app.tick_count, now),
        Screen::Listing(listing) => {
            let rows =
                Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
            listing::render_heading(frame, rows[0], listing.category);
            listing::render_listing(frame, rows[1], listing, app.tick_count, now);
        }
        Screen::Detail(detail) => detail::render_detail(
            frame,
            area,
            detail,
            app.saved.contains(&detail.id),
            app.tick_count,
            now,
        ),
        Screen::Saved(saved) => saved::render_saved(frame, area, saved, &app.saved, now),
        Screen::Login(_) => {}
    }
}

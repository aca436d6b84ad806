//! Navigation chrome around every authenticated screen: header, collapsible
//! sidebar and the key-hint footer.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::theme::{COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_KEY};
use crate::app::{App, Route, Screen, SIDEBAR_ROUTES};

pub const SIDEBAR_WIDTH: u16 = 22;
pub const HEADER_HEIGHT: u16 = 3;

/// Width left for screen content beside the sidebar.
pub fn content_width(total: u16, sidebar_open: bool) -> u16 {
    if sidebar_open {
        total.saturating_sub(SIDEBAR_WIDTH)
    } else {
        total
    }
}

/// Draw the chrome and return the content area.
pub fn render_shell(frame: &mut Frame, app: &App) -> Rect {
    let rows = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_header(frame, rows[0], app);
    render_footer(frame, rows[2], app);

    if !app.sidebar_open {
        return rows[1];
    }
    let cols = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[1]);
    render_sidebar(frame, cols[0], &app.route);
    cols[1]
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let menu = if app.sidebar_open { "✕" } else { "☰" };
    let logo = Line::from(vec![
        Span::styled(format!(" {} ", menu), Style::default().fg(COLOR_DIM)),
        Span::styled("▶", Style::default().fg(COLOR_BRAND)),
        Span::styled(
            " NxtWatch",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(logo), inner);

    let logout = Line::from(vec![
        Span::styled("[L]", Style::default().fg(COLOR_KEY)),
        Span::styled(" Logout ", Style::default().fg(COLOR_BRAND)),
    ]);
    frame.render_widget(Paragraph::new(logout).alignment(Alignment::Right), inner);
}

fn render_sidebar(frame: &mut Frame, area: Rect, active: &Route) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = SIDEBAR_ROUTES
        .iter()
        .enumerate()
        .flat_map(|(i, route)| {
            let is_active = route == active;
            let style = if is_active {
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_HEADER)
            };
            let marker = if is_active { "▌" } else { " " };
            [
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(COLOR_BRAND)),
                    Span::styled(format!("{} ", i + 1), Style::default().fg(COLOR_KEY)),
                    Span::styled(route.label(), style),
                ]),
                Line::default(),
            ]
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines),
        inner.inner(Margin::new(1, 1)),
    );
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(status) = &app.status {
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", status), Style::default().fg(COLOR_ERROR))),
            area,
        );
        return;
    }

    let spans: Vec<Span> = key_hints(app)
        .into_iter()
        .flat_map(|(key, desc)| {
            [
                Span::styled(format!(" {}", key), Style::default().fg(COLOR_KEY)),
                Span::styled(format!(" {} ", desc), Style::default().fg(COLOR_DIM)),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Hints for the keys that do something on the mounted screen.
pub fn key_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();
    match &app.screen {
        Screen::Home(home) if home.search_focused => {
            return vec![("⏎", "search"), ("Esc", "cancel")];
        }
        Screen::Home(home) => {
            hints.push(("/", "search"));
            if home.listing.is_empty_result() {
                hints.push(("c", "clear search"));
            }
            push_listing_hints(&mut hints, home.listing.videos.state().is_failure());
        }
        Screen::Listing(listing) => {
            push_listing_hints(&mut hints, listing.videos.state().is_failure());
        }
        Screen::Detail(detail) => {
            if detail.video.state().is_failure() {
                hints.push(("r", "retry"));
            } else {
                hints.extend([("l", "like"), ("d", "dislike"), ("s", "save"), ("o", "open player")]);
            }
            hints.push(("Esc", "back"));
        }
        Screen::Saved(_) => {
            hints.extend([("↑↓", "move"), ("⏎", "open")]);
        }
        Screen::Login(_) => return vec![("Tab", "next field"), ("⏎", "login")],
    }
    hints.extend([("1-4", "navigate"), ("m", "menu"), ("q", "quit")]);
    hints
}

fn push_listing_hints(hints: &mut Vec<(&'static str, &'static str)>, failed: bool) {
    if failed {
        hints.push(("r", "retry"));
    } else {
        hints.extend([("←↑↓→", "move"), ("⏎", "open")]);
    }
}

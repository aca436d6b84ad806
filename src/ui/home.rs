use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::listing::{render_listing, render_message_panel};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_INPUT_FOCUS};
use crate::app::HomeScreen;

pub const NO_RESULTS_HEADING: &str = "No Search Results Found";
pub const NO_RESULTS_BODY: &str = "Try different key words or remove search filter";

pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    home: &HomeScreen,
    tick: u64,
    now: DateTime<Utc>,
) {
    let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(area);
    render_search_bar(frame, rows[0], home);

    if home.listing.is_empty_result() {
        render_message_panel(
            frame,
            rows[1],
            NO_RESULTS_HEADING,
            NO_RESULTS_BODY,
            ("c", "Clear Search"),
        );
    } else {
        render_listing(frame, rows[1], &home.listing, tick, now);
    }
}

fn render_search_bar(frame: &mut Frame, area: Rect, home: &HomeScreen) {
    let border = if home.search_focused {
        COLOR_INPUT_FOCUS
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(" Search [/] ", Style::default().fg(COLOR_DIM)));

    let content = if home.search_input.is_empty() && !home.search_focused {
        Line::styled("Search", Style::default().fg(COLOR_DIM))
    } else {
        let cursor = if home.search_focused { "▏" } else { "" };
        Line::styled(
            format!("{}{}", home.search_input, cursor),
            Style::default().fg(COLOR_HEADER),
        )
    };
    frame.render_widget(Paragraph::new(content).block(block), area);
}

use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::truncate_to_width;
use super::listing::meta_line;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_HEADER};
use crate::app::SavedScreen;
use crate::state::SavedVideos;

pub const EMPTY_HEADING: &str = "No saved videos found";
pub const EMPTY_BODY: &str = "You can save your videos while watching them";

/// Rows per saved entry, borders included.
const ROW_HEIGHT: u16 = 4;

pub fn render_saved(
    frame: &mut Frame,
    area: Rect,
    screen: &SavedScreen,
    saved: &SavedVideos,
    now: DateTime<Utc>,
) {
    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);
    let heading = Line::from(vec![
        Span::styled(" 🔖 ", Style::default().fg(COLOR_BRAND)),
        Span::styled(
            "Saved Videos",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", saved.len()), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(heading), rows[0]);

    if saved.is_empty() {
        let lines = vec![
            Line::styled(EMPTY_HEADING, Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::styled(EMPTY_BODY, Style::default().fg(COLOR_DIM)),
        ];
        let rect = super::helpers::centered_rect(rows[1].width, 3, rows[1]);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);
        return;
    }

    let list = rows[1];
    let visible = usize::from((list.height / ROW_HEIGHT).max(1));
    let first = screen.selected.saturating_sub(visible - 1);

    for (slot, (index, video)) in saved.list().iter().enumerate().skip(first).take(visible).enumerate() {
        let rect = Rect::new(list.x, list.y + slot as u16 * ROW_HEIGHT, list.width, ROW_HEIGHT)
            .intersection(list);
        let selected = index == screen.selected;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if selected { COLOR_ACCENT } else { COLOR_BORDER }));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let width = usize::from(inner.width);
        let channel = video.channel_name.as_deref().unwrap_or_default();
        let lines = vec![
            Line::styled(
                truncate_to_width(&video.title, width),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                truncate_to_width(&format!("{}  {}", channel, meta_line(video, now)), width),
                Style::default().fg(COLOR_DIM),
            ),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

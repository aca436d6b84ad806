//! Video grid and the loading / failure panels shared by every data screen.

use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::{centered_rect, grid_columns, spinner_frame, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_KEY, COLOR_LOADING};
use crate::app::ListingScreen;
use crate::error::FAILURE_MESSAGE;
use crate::format::{format_view_count, published_label};
use crate::models::{Category, VideoSummary};
use crate::state::ViewState;

pub const LOADING_CAPTION: &str = "Loading videos...";
pub const FAILURE_HEADING: &str = "Oops! Something Went Wrong";

/// Rows per standard card, borders included.
const CARD_HEIGHT: u16 = 5;
/// Gaming cards have no channel line.
const GAMING_CARD_HEIGHT: u16 = 4;

/// Spinner with a caption, centered in `area`.
pub fn render_loading(frame: &mut Frame, area: Rect, caption: &str, tick: u64) {
    let line = Line::from(vec![
        Span::styled(spinner_frame(tick), Style::default().fg(COLOR_LOADING)),
        Span::raw(" "),
        Span::styled(caption.to_string(), Style::default().fg(COLOR_DIM)),
    ]);
    let rect = centered_rect(area.width, 1, area);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rect);
}

/// Failure panel with the retry hint.
pub fn render_failure(frame: &mut Frame, area: Rect) {
    render_message_panel(
        frame,
        area,
        FAILURE_HEADING,
        FAILURE_MESSAGE,
        ("r", "Retry"),
    );
}

/// Heading, body and one action, centered.
pub fn render_message_panel(
    frame: &mut Frame,
    area: Rect,
    heading: &str,
    body: &str,
    action: (&str, &str),
) {
    let lines = vec![
        Line::styled(
            heading.to_string(),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(body.to_string(), Style::default().fg(COLOR_DIM)),
        Line::default(),
        Line::from(vec![
            Span::styled(format!("[{}]", action.0), Style::default().fg(COLOR_KEY)),
            Span::styled(format!(" {}", action.1), Style::default().fg(COLOR_ACCENT)),
        ]),
    ];
    let rect = centered_rect(area.width.min(76), 7, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rect,
    );
}

/// Category title above a trending or gaming grid.
pub fn render_heading(frame: &mut Frame, area: Rect, category: Category) {
    let icon = match category {
        Category::Trending => "🔥",
        Category::Gaming => "🎮",
        Category::All => "▶",
    };
    let line = Line::from(vec![
        Span::raw(format!(" {} ", icon)),
        Span::styled(
            category.label(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// A listing in whatever state it is in. Empty successes render nothing;
/// the home screen draws its own no-results panel.
pub fn render_listing(
    frame: &mut Frame,
    area: Rect,
    listing: &ListingScreen,
    tick: u64,
    now: DateTime<Utc>,
) {
    match listing.videos.state() {
        ViewState::Idle => {}
        ViewState::Loading => render_loading(frame, area, LOADING_CAPTION, tick),
        ViewState::Failure(_) => render_failure(frame, area),
        ViewState::Success(videos) => render_grid(
            frame,
            area,
            videos,
            listing.selected,
            listing.category == Category::Gaming,
            now,
        ),
    }
}

/// Cards laid out in responsive columns, scrolled to keep `selected` visible.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    videos: &[VideoSummary],
    selected: usize,
    gaming: bool,
    now: DateTime<Utc>,
) {
    if videos.is_empty() || area.height == 0 {
        return;
    }

    let columns = grid_columns(area.width);
    let card_height = if gaming { GAMING_CARD_HEIGHT } else { CARD_HEIGHT };
    let visible_rows = usize::from((area.height / card_height).max(1));
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let card_width = area.width / columns as u16;
    for (index, video) in videos.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = index % columns;
        let rect = Rect::new(
            area.x + col as u16 * card_width,
            area.y + row as u16 * card_height,
            card_width,
            card_height,
        )
        .intersection(area);
        render_card(frame, rect, video, index == selected, gaming, now);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    video: &VideoSummary,
    selected: bool,
    gaming: bool,
    now: DateTime<Utc>,
) {
    let border = if selected { COLOR_ACCENT } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let mut title_style = Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD);
    if selected {
        title_style = title_style.add_modifier(Modifier::UNDERLINED);
    }
    let mut lines = vec![Line::styled(truncate_to_width(&video.title, width), title_style)];

    if gaming {
        lines.push(Line::styled(
            truncate_to_width(
                &format!("{} Watching Worldwide", format_view_count(&video.view_count)),
                width,
            ),
            Style::default().fg(COLOR_DIM),
        ));
    } else {
        lines.push(Line::styled(
            truncate_to_width(video.channel_name.as_deref().unwrap_or_default(), width),
            Style::default().fg(COLOR_DIM),
        ));
        lines.push(Line::styled(
            truncate_to_width(&meta_line(video, now), width),
            Style::default().fg(COLOR_DIM),
        ));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// `<views> views • <relative time>`
pub fn meta_line(video: &VideoSummary, now: DateTime<Utc>) -> String {
    let views = format!("{} views", format_view_count(&video.view_count));
    match &video.published_at {
        Some(published) => format!("{} • {}", views, published_label(published, now)),
        None => views,
    }
}

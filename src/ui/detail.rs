use chrono::{DateTime, Utc};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::listing::{meta_line, render_failure, render_loading};
use super::theme::{COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_HEADER, COLOR_KEY};
use crate::app::DetailScreen;
use crate::format::{embed_url, format_view_count};
use crate::models::VideoDetail;
use crate::state::{Reactions, ViewState};

pub const LOADING_CAPTION: &str = "Loading...";

pub fn render_detail(
    frame: &mut Frame,
    area: Rect,
    screen: &DetailScreen,
    saved: bool,
    tick: u64,
    now: DateTime<Utc>,
) {
    match screen.video.state() {
        ViewState::Idle => {}
        ViewState::Loading => render_loading(frame, area, LOADING_CAPTION, tick),
        ViewState::Failure(_) => render_failure(frame, area),
        ViewState::Success(video) => {
            render_video(frame, area, video, screen.reactions, saved, now)
        }
    }
}

fn render_video(
    frame: &mut Frame,
    area: Rect,
    video: &VideoDetail,
    reactions: Reactions,
    saved: bool,
    now: DateTime<Utc>,
) {
    let area = area.inner(Margin::new(2, 1));
    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .split(area);

    // player
    let player = Paragraph::new(Line::from(vec![
        Span::styled("▶ ", Style::default().fg(COLOR_BRAND)),
        Span::styled(embed_url(&video.video_url), Style::default().fg(COLOR_HEADER)),
        Span::styled("  [o]", Style::default().fg(COLOR_KEY)),
        Span::styled(" open player", Style::default().fg(COLOR_DIM)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(COLOR_BORDER)),
    );
    frame.render_widget(player, rows[0]);

    let summary = &video.summary;
    let header = vec![
        Line::styled(
            summary.title.clone(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Line::styled(meta_line(summary, now), Style::default().fg(COLOR_DIM)),
        Line::default(),
        reaction_line(reactions, saved),
    ];
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), rows[1]);

    let channel = vec![
        Line::styled(
            summary.channel_name.clone().unwrap_or_default(),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("{} Subscribers", format_view_count(&video.subscriber_count)),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    frame.render_widget(
        Paragraph::new(channel).block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(COLOR_BORDER)),
        ),
        rows[2],
    );

    frame.render_widget(
        Paragraph::new(video.description.clone())
            .style(Style::default().fg(COLOR_HEADER))
            .wrap(Wrap { trim: true }),
        rows[3],
    );
}

fn reaction_line(reactions: Reactions, saved: bool) -> Line<'static> {
    let toggle = |key: &'static str, label: &'static str, on: bool| {
        let style = if on {
            Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        [
            Span::styled(format!("[{}]", key), Style::default().fg(COLOR_KEY)),
            Span::styled(format!(" {}   ", label), style),
        ]
    };

    let save_label = if saved { "Saved" } else { "Save" };
    Line::from(
        [
            toggle("l", "👍 Like", reactions.liked),
            toggle("d", "👎 Dislike", reactions.disliked),
            toggle("s", save_label, saved),
        ]
        .concat(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::models::VideoSummary;
    use ratatui::{backend::TestBackend, Terminal};

    fn loaded_screen() -> DetailScreen {
        let mut screen = DetailScreen::new("v1");
        let ticket = screen.video.begin();
        screen.video.resolve(
            ticket,
            Ok(VideoDetail {
                summary: VideoSummary {
                    id: "v1".into(),
                    title: "iB Hubs Announcement".into(),
                    thumbnail_url: String::new(),
                    view_count: "26000".into(),
                    published_at: Some("Nov 29, 2016".into()),
                    channel_name: Some("iB Hubs".into()),
                    channel_avatar_url: None,
                },
                video_url: "https://www.youtube.com/watch?v=pT2ojWWjum8".into(),
                description: "Mission is to empower youth".into(),
                subscriber_count: "1000000".into(),
            }),
        );
        screen
    }

    fn render_to_text(screen: &DetailScreen, saved: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal
            .draw(|f| render_detail(f, f.area(), screen, saved, 0, Utc::now()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_video() {
        let text = render_to_text(&loaded_screen(), false);
        assert!(text.contains("https://www.youtube.com/embed/pT2ojWWjum8"));
        assert!(text.contains("iB Hubs Announcement"));
        assert!(text.contains("26.0K views"));
        assert!(text.contains("1.0M Subscribers"));
        assert!(text.contains("Mission is to empower youth"));
        assert!(text.contains(" Save "));
    }

    #[test]
    fn test_save_label_follows_registry() {
        assert!(render_to_text(&loaded_screen(), true).contains("Saved"));
    }

    #[test]
    fn test_loading_and_failure() {
        let mut screen = DetailScreen::new("v1");
        let ticket = screen.video.begin();
        assert!(render_to_text(&screen, false).contains(LOADING_CAPTION));

        screen.video.resolve(ticket, Err(FetchError::Status { status: 404 }));
        assert!(render_to_text(&screen, false).contains("Retry"));
    }
}

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::{centered_rect, spinner_frame};
use super::theme::{
    COLOR_BORDER, COLOR_BRAND, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INPUT_FOCUS, COLOR_KEY,
};
use crate::app::{LoginField, LoginForm};

const FORM_WIDTH: u16 = 50;
const FORM_HEIGHT: u16 = 16;

pub fn render_login(frame: &mut Frame, form: &LoginForm, tick: u64) {
    let area = centered_rect(FORM_WIDTH, FORM_HEIGHT, frame.area());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area).inner(Margin::new(2, 1));
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(2), // logo
        Constraint::Length(3), // username
        Constraint::Length(3), // password
        Constraint::Length(1), // show password
        Constraint::Length(2), // error
        Constraint::Length(1), // submit
    ])
    .split(inner);

    let logo = Line::from(vec![
        Span::styled("▶", Style::default().fg(COLOR_BRAND)),
        Span::styled(
            " NxtWatch",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), rows[0]);

    render_field(
        frame,
        rows[1],
        "USERNAME",
        &form.username,
        form.focus == LoginField::Username,
    );
    render_field(
        frame,
        rows[2],
        "PASSWORD",
        &form.password_display(),
        form.focus == LoginField::Password,
    );

    let checkbox = if form.show_password { "[x]" } else { "[ ]" };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} Show Password ", checkbox), Style::default().fg(COLOR_HEADER)),
            Span::styled("(Ctrl+P)", Style::default().fg(COLOR_DIM)),
        ])),
        rows[3],
    );

    if let Some(error) = &form.error {
        frame.render_widget(
            Paragraph::new(Span::styled(format!("*{}", error), Style::default().fg(COLOR_ERROR))),
            rows[4],
        );
    }

    let submit = if form.submitting {
        Line::from(vec![
            Span::styled(spinner_frame(tick), Style::default().fg(COLOR_KEY)),
            Span::styled(" Logging in...", Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(COLOR_KEY)),
            Span::styled(
                " Login",
                Style::default().fg(COLOR_BRAND).add_modifier(Modifier::BOLD),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(submit).alignment(Alignment::Center), rows[5]);
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border = if focused { COLOR_INPUT_FOCUS } else { COLOR_BORDER };
    let cursor = if focused { "▏" } else { "" };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(format!(" {} ", label), Style::default().fg(COLOR_DIM)));
    frame.render_widget(
        Paragraph::new(format!("{}{}", value, cursor)).block(block),
        area,
    );
}

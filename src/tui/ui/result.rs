//! Result view: verdict display and failure surface.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::Verdict;
use crate::tui::styles::Theme;

/// Result screen state.
#[derive(Debug, Clone, Default)]
pub enum ResultState {
    #[default]
    Idle,
    /// Worker is running
    Scoring,
    /// Prediction finished
    Complete { verdict: Verdict },
    /// Prediction failed; no automatic retry
    Error { message: String },
}

/// Render the result screen.
pub fn render_result(f: &mut Frame, area: Rect, state: &ResultState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_result_header(f, chunks[0], state);
    render_result_content(f, chunks[1], state);
    render_result_footer(f, chunks[2], state);
}

fn render_result_header(f: &mut Frame, area: Rect, state: &ResultState) {
    let subtitle = match state {
        ResultState::Complete { verdict } => verdict.disease.title(),
        _ => "Prediction",
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", Theme::text()),
        Span::styled("Test Result", Theme::title()),
        Span::styled(format!(" │ {subtitle}"), Theme::text_dim()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );

    f.render_widget(header, area);
}

fn render_result_content(f: &mut Frame, area: Rect, state: &ResultState) {
    match state {
        ResultState::Idle => render_message(f, area, "No prediction yet", Theme::text_muted()),
        ResultState::Scoring => render_message(f, area, "Scoring...", Theme::warning()),
        ResultState::Complete { verdict } => render_verdict(f, area, verdict),
        ResultState::Error { message } => render_error(f, area, message),
    }
}

fn render_message(f: &mut Frame, area: Rect, message: &str, style: ratatui::style::Style) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), style)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );

    f.render_widget(content, area);
}

fn render_verdict(f: &mut Frame, area: Rect, verdict: &Verdict) {
    let style = Theme::verdict(verdict.is_positive());
    let icon = if verdict.is_positive() { "!" } else { "OK" };

    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{icon} {}", verdict.message),
            style.add_modifier(ratatui::style::Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Classifier output: {}", verdict.label),
            Theme::text_dim(),
        )),
        Line::from(Span::styled(
            format!("Recorded at {} (not persisted)", verdict.created_at.format("%H:%M:%S UTC")),
            Theme::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(Span::styled(" Verdict ", Theme::subtitle()))
            .borders(Borders::ALL)
            .border_style(Theme::border_focused()),
    );

    f.render_widget(content, area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let content = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("! Prediction failed", Theme::danger())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Theme::text())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::danger()),
    );

    f.render_widget(content, area);
}

fn render_result_footer(f: &mut Frame, area: Rect, state: &ResultState) {
    let content = match state {
        ResultState::Complete { .. } => Line::from(vec![
            Span::styled("[Enter] ", Theme::key_hint()),
            Span::styled("Back to Menu ", Theme::key_desc()),
            Span::styled("[N] ", Theme::key_hint()),
            Span::styled("New Test", Theme::key_desc()),
        ]),
        ResultState::Error { .. } => Line::from(vec![
            Span::styled("[Enter] ", Theme::key_hint()),
            Span::styled("Edit Inputs ", Theme::key_desc()),
            Span::styled("[Esc] ", Theme::key_hint()),
            Span::styled("Back to Menu", Theme::key_desc()),
        ]),
        _ => Line::from(vec![Span::styled("Processing...", Theme::text_muted())]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );

    f.render_widget(footer, area);
}

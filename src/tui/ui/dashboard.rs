//! Dashboard view: disease menu and system status.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::domain::{DiseaseId, FeatureSpec};
use crate::tui::styles::Theme;

/// Dashboard state for rendering.
#[derive(Default)]
pub struct DashboardState {
    /// Index into `DiseaseId::ALL`
    pub selected: usize,
    /// Directory the artifacts were loaded from
    pub model_dir: String,
    /// Predictions made this session (nothing is persisted)
    pub session_predictions: usize,
}

impl DashboardState {
    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % DiseaseId::ALL.len();
    }

    pub fn prev(&mut self) {
        if self.selected == 0 {
            self.selected = DiseaseId::ALL.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    #[must_use]
    pub fn selected_disease(&self) -> DiseaseId {
        DiseaseId::ALL[self.selected]
    }
}

/// Render the main dashboard view.
pub fn render_dashboard(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_main_content(f, chunks[1], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", Theme::text()),
        Span::styled("medscreen", Theme::title()),
        Span::styled(" │ ", Theme::text_muted()),
        Span::styled("Multiple Disease Prediction System", Theme::text_dim()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );

    f.render_widget(header, area);
}

fn render_main_content(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_disease_menu(f, chunks[0], state);
    render_side_panels(f, chunks[1], state);
}

fn render_disease_menu(f: &mut Frame, area: Rect, state: &DashboardState) {
    let items: Vec<ListItem> = DiseaseId::ALL
        .iter()
        .enumerate()
        .map(|(i, disease)| {
            let n_fields = FeatureSpec::of(*disease).len();
            let selected = i == state.selected;
            let marker = if selected { "> " } else { "  " };
            let style = if selected { Theme::focused() } else { Theme::text() };

            ListItem::new(Line::from(vec![
                Span::styled(marker, style),
                Span::styled(disease.title(), style),
                Span::styled(format!("  ({n_fields} inputs)"), Theme::text_muted()),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(" Select a screening ", Theme::subtitle()))
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    f.render_widget(List::new(items).block(block), area);
}

fn render_side_panels(f: &mut Frame, area: Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Status
            Constraint::Min(0),    // Key hints
        ])
        .margin(1)
        .split(area);

    let status_lines = vec![
        Line::from(vec![
            Span::styled("  Models: ", Theme::text_dim()),
            Span::styled("3 loaded", Theme::success()),
        ]),
        Line::from(vec![
            Span::styled("  Artifacts: ", Theme::text_dim()),
            Span::styled(state.model_dir.clone(), Theme::text_muted()),
        ]),
        Line::from(vec![
            Span::styled("  This session: ", Theme::text_dim()),
            Span::styled(
                format!("{} predictions", state.session_predictions),
                Theme::text(),
            ),
        ]),
    ];

    let status = Paragraph::new(status_lines).block(
        Block::default()
            .title(Span::styled(" Status ", Theme::subtitle()))
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    f.render_widget(status, chunks[0]);

    let hints = vec![
        Line::from(vec![
            Span::styled("[↑↓] ", Theme::key_hint()),
            Span::styled("Select disease", Theme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[Enter] ", Theme::key_hint()),
            Span::styled("Open form", Theme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[1-3] ", Theme::key_hint()),
            Span::styled("Jump to form", Theme::key_desc()),
        ]),
        Line::from(vec![
            Span::styled("[Q] ", Theme::key_hint()),
            Span::styled("Quit", Theme::key_desc()),
        ]),
    ];

    let actions = Paragraph::new(hints).block(
        Block::default()
            .title(Span::styled(" Keys ", Theme::subtitle()))
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    );
    f.render_widget(actions, chunks[1]);
}

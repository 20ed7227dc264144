//! Clinical data entry form, built from the active disease's feature spec.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::domain::{DiseaseId, FeatureSpec, FeatureVector, FieldKind, ValidationError};
use crate::tui::styles::Theme;

/// Form state: one input buffer per field of the active disease.
pub struct FormState {
    pub disease: DiseaseId,
    pub inputs: Vec<String>,
    pub selected: usize,
    pub error_message: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn new(disease: DiseaseId) -> Self {
        let n = FeatureSpec::of(disease).len();
        Self {
            disease,
            inputs: vec![String::new(); n],
            selected: 0,
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.selected = (self.selected + 1) % self.inputs.len();
    }

    pub fn prev_field(&mut self) {
        if self.selected == 0 {
            self.selected = self.inputs.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn input_char(&mut self, c: char) {
        // Integer fields take digits only; '.' and '-' are meaningful for
        // decimal fields (spread1 is negative).
        let kind = FeatureSpec::of(self.disease).fields()[self.selected].kind;
        let allowed =
            c.is_ascii_digit() || (kind == FieldKind::Decimal && (c == '.' || c == '-'));
        if allowed {
            self.inputs[self.selected].push(c);
            self.error_message = None;
        }
    }

    pub fn delete_char(&mut self) {
        self.inputs[self.selected].pop();
    }

    pub fn clear_field(&mut self) {
        self.inputs[self.selected].clear();
    }

    /// Wipe all input buffers. Called right after submit so clinical values
    /// do not linger in UI state.
    pub fn clear_sensitive(&mut self) {
        for input in self.inputs.iter_mut() {
            input.zeroize();
        }
        self.error_message = None;
        self.selected = 0;
    }

    /// Parse and validate the buffers into a feature vector.
    ///
    /// Empty buffers take the field default; anything unparseable or out of
    /// range is rejected with the field name.
    ///
    /// # Errors
    /// Returns `ValidationError` for the first offending field.
    pub fn to_vector(&self) -> Result<FeatureVector, ValidationError> {
        let spec = FeatureSpec::of(self.disease);
        let mut values: Vec<Option<f64>> = Vec::with_capacity(spec.len());

        for (field, raw) in spec.fields().iter().zip(&self.inputs) {
            let raw = raw.trim();
            if raw.is_empty() {
                values.push(None);
                continue;
            }
            let parsed: f64 = raw.parse().map_err(|_| ValidationError {
                field: field.name,
                message: format!("'{raw}' is not a number"),
            })?;
            values.push(Some(parsed));
        }

        spec.collect(&values)
    }

    /// Pre-fill a representative in-range case for the active disease.
    pub fn load_sample(&mut self) {
        let sample: &[&str] = match self.disease {
            DiseaseId::Diabetes => &["2", "120", "70", "20", "79", "25.0", "0.5", "33"],
            DiseaseId::Heart => &[
                "54", "1", "0", "130", "240", "0", "1", "150", "0", "1.0", "1", "0", "2",
            ],
            DiseaseId::Parkinsons => &[
                "150", "200", "100", "0.005", "0.00004", "0.003", "0.003", "0.01", "0.03", "0.3",
                "0.015", "0.02", "0.02", "0.04", "0.02", "22", "0.45", "0.7", "-5.5", "0.2",
                "2.3", "0.2",
            ],
        };
        for (input, val) in self.inputs.iter_mut().zip(sample) {
            *input = (*val).to_string();
        }
        self.error_message = None;
    }
}

/// Render the data entry form.
pub fn render_form(f: &mut Frame, area: Rect, state: &FormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Fields
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_form_header(f, chunks[0], state);
    render_form_fields(f, chunks[1], state);
    render_form_footer(f, chunks[2], state);
}

fn render_form_header(f: &mut Frame, area: Rect, state: &FormState) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", Theme::text()),
        Span::styled(state.disease.title(), Theme::title()),
        Span::styled(" │ Clinical Measurements", Theme::text_dim()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );

    f.render_widget(header, area);
}

fn render_form_fields(f: &mut Frame, area: Rect, state: &FormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let fields = FeatureSpec::of(state.disease).fields();
    let mid = (fields.len() + 1) / 2;

    render_field_column(f, columns[0], state, 0, mid);
    render_field_column(f, columns[1], state, mid, fields.len());
}

fn render_field_column(f: &mut Frame, area: Rect, state: &FormState, start: usize, end: usize) {
    let fields = FeatureSpec::of(state.disease).fields();

    // One line per field; Parkinson's has 11 rows per column.
    let constraints: Vec<Constraint> = (start..end)
        .map(|_| Constraint::Length(1))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, i) in (start..end).enumerate() {
        let field = &fields[i];
        let is_selected = i == state.selected;
        let label_style = if is_selected { Theme::focused() } else { Theme::text_dim() };

        let value = &state.inputs[i];
        let value_span = if value.is_empty() {
            Span::styled(field.hint, Theme::text_muted())
        } else {
            Span::styled(value.as_str(), Theme::text())
        };

        let marker = if is_selected { "> " } else { "  " };
        let line = Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{:<26}", field.name), label_style),
            value_span,
            if is_selected {
                Span::styled("▌", Theme::focused())
            } else {
                Span::raw("")
            },
        ]);

        f.render_widget(Paragraph::new(line), chunks[row]);
    }
}

fn render_form_footer(f: &mut Frame, area: Rect, state: &FormState) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", Theme::danger()),
            Span::styled(err.clone(), Theme::danger()),
        ])
    } else {
        Line::from(vec![
            Span::styled("[↑↓] ", Theme::key_hint()),
            Span::styled("Navigate ", Theme::key_desc()),
            Span::styled("[Enter] ", Theme::key_hint()),
            Span::styled("Run Test ", Theme::key_desc()),
            Span::styled("[S] ", Theme::key_hint()),
            Span::styled("Sample Data ", Theme::key_desc()),
            Span::styled("[Del] ", Theme::key_hint()),
            Span::styled("Clear Field ", Theme::key_desc()),
            Span::styled("[Esc] ", Theme::key_hint()),
            Span::styled("Back", Theme::key_desc()),
        ])
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_collects_defaults() {
        let state = FormState::new(DiseaseId::Diabetes);
        let vector = state.to_vector().expect("defaults are valid");
        assert_eq!(vector.len(), 8);
        assert!(vector.as_slice().iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_sample_data_is_in_range() {
        for disease in DiseaseId::ALL {
            let mut state = FormState::new(disease);
            state.load_sample();
            let vector = state.to_vector().expect("sample data must validate");
            assert_eq!(vector.len(), FeatureSpec::of(disease).len());
        }
    }

    #[test]
    fn test_unparseable_input_names_field() {
        let mut state = FormState::new(DiseaseId::Diabetes);
        state.inputs[1] = "12.3.4".to_string();
        let err = state.to_vector().unwrap_err();
        assert_eq!(err.field, "Glucose");
    }

    #[test]
    fn test_out_of_range_input_is_rejected() {
        let mut state = FormState::new(DiseaseId::Diabetes);
        state.inputs[7] = "500".to_string(); // Age max is 120
        assert!(state.to_vector().is_err());
    }

    #[test]
    fn test_clear_sensitive_wipes_buffers() {
        let mut state = FormState::new(DiseaseId::Heart);
        state.load_sample();
        state.clear_sensitive();
        assert!(state.inputs.iter().all(String::is_empty));
        assert_eq!(state.selected, 0);
    }
}

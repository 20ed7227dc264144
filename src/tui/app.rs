//! Main TUI application state machine.
//!
//! Handles screen navigation, input events and the background prediction
//! worker. One submit action is in flight at a time; the loaded classifier
//! handles are shared read-only, so no locking is needed.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::linear::LinearClassifier;
use crate::application::ScreeningService;
use crate::domain::DiseaseId;

use super::ui::{
    dashboard::{render_dashboard, DashboardState},
    form::{render_form, FormState},
    render_disclaimer,
    result::{render_result, ResultState},
};
use super::worker::{PredictionProgress, PredictionWorker, PredictionWorkerHandle};

/// Current screen/view in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Form,
    Result,
}

/// Main application state
pub struct App {
    screen: Screen,
    should_quit: bool,

    /// Prediction context: three classifiers, loaded once, immutable
    service: Arc<ScreeningService<LinearClassifier>>,

    dashboard_state: DashboardState,
    form_state: FormState,
    result_state: ResultState,

    /// Pending prediction worker (if running)
    pending_worker: Option<PredictionWorkerHandle>,
}

impl App {
    /// Create a new application instance, loading all model artifacts.
    ///
    /// Startup is fail-fast: if any of the three artifacts cannot be loaded
    /// the constructor returns an error and no screen is reachable.
    ///
    /// # Errors
    /// Returns error if the artifact directory is missing or any model
    /// fails to load.
    pub fn new() -> Result<Self> {
        let model_dir = std::env::var("MEDSCREEN_MODEL_DIR").unwrap_or_else(|_| "models".to_string());
        let dir = std::path::Path::new(&model_dir);

        if !dir.exists() {
            return Err(anyhow!(
                "Model path not found at {:?}. Set MEDSCREEN_MODEL_DIR to a directory containing diabetes.json, heart.json and parkinsons.json.",
                dir
            ));
        }

        let service = ScreeningService::load_from_dir(dir)
            .map_err(|e| anyhow!("Failed to load models from {:?}: {}", dir, e))?;

        let dashboard_state = DashboardState {
            model_dir,
            ..DashboardState::default()
        };

        Ok(Self {
            screen: Screen::Dashboard,
            should_quit: false,
            service: Arc::new(service),
            dashboard_state,
            form_state: FormState::new(DiseaseId::Diabetes),
            result_state: ResultState::default(),
            pending_worker: None,
        })
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.poll_worker();

            terminal.draw(|f| {
                let area = f.area();
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(2)])
                    .split(area);

                let content_area = chunks[0];
                let disclaimer_area = chunks[1];

                match self.screen {
                    Screen::Dashboard => render_dashboard(f, content_area, &self.dashboard_state),
                    Screen::Form => render_form(f, content_area, &self.form_state),
                    Screen::Result => render_result(f, content_area, &self.result_state),
                }

                render_disclaimer(f, disclaimer_area);
            })?;

            // Short poll to stay responsive while a worker runs
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Drain progress updates from the background worker.
    fn poll_worker(&mut self) {
        loop {
            let progress = match self
                .pending_worker
                .as_ref()
                .and_then(PredictionWorkerHandle::try_recv)
            {
                Some(p) => p,
                None => break,
            };

            match progress {
                PredictionProgress::Scoring => {
                    self.result_state = ResultState::Scoring;
                }
                PredictionProgress::Complete(verdict) => {
                    self.dashboard_state.session_predictions += 1;
                    self.result_state = ResultState::Complete { verdict };
                    self.pending_worker = None;
                    break;
                }
                PredictionProgress::Error(message) => {
                    self.result_state = ResultState::Error { message };
                    self.pending_worker = None;
                    break;
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Dashboard => self.handle_dashboard_key(key),
            Screen::Form => self.handle_form_key(key),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.dashboard_state.prev(),
            KeyCode::Down => self.dashboard_state.next(),
            KeyCode::Enter => self.open_form(self.dashboard_state.selected_disease()),
            KeyCode::Char('1') => self.open_form(DiseaseId::Diabetes),
            KeyCode::Char('2') => self.open_form(DiseaseId::Heart),
            KeyCode::Char('3') => self.open_form(DiseaseId::Parkinsons),
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn open_form(&mut self, disease: DiseaseId) {
        self.form_state = FormState::new(disease);
        self.screen = Screen::Form;
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.form_state.clear_sensitive();
                self.screen = Screen::Dashboard;
            }
            KeyCode::Up => self.form_state.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.form_state.next_field(),
            KeyCode::Char('s') | KeyCode::Char('S') => self.form_state.load_sample(),
            KeyCode::Char(c) => self.form_state.input_char(c),
            KeyCode::Backspace => self.form_state.delete_char(),
            KeyCode::Delete => self.form_state.clear_field(),
            KeyCode::Enter => self.submit_form(),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match &self.result_state {
            ResultState::Complete { .. } => match key {
                KeyCode::Enter | KeyCode::Esc => {
                    self.screen = Screen::Dashboard;
                }
                KeyCode::Char('n') | KeyCode::Char('N') => {
                    self.open_form(self.form_state.disease);
                }
                _ => {}
            },
            ResultState::Error { .. } => match key {
                KeyCode::Enter => {
                    // Buffers were wiped on submit; the user re-enters values
                    self.open_form(self.form_state.disease);
                }
                KeyCode::Esc => {
                    self.screen = Screen::Dashboard;
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        match self.form_state.to_vector() {
            Ok(vector) => {
                let disease = self.form_state.disease;

                self.screen = Screen::Result;
                self.result_state = ResultState::Scoring;

                let worker = PredictionWorker::spawn(self.service.clone(), disease, vector);
                self.pending_worker = Some(worker);

                // Clear plaintext buffers from the UI immediately.
                self.form_state.clear_sensitive();
            }
            Err(e) => {
                self.form_state.error_message = Some(e.to_string());
            }
        }
    }
}

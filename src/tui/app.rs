//! Main TUI application loop.
//!
//! Owns the assessment workflow and drives it from terminal events:
//! field edits, submission, and polling of the background prediction
//! worker. The submit action is ignored while a request is in flight.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::application::{FieldUpdate, Workflow};
use crate::domain::{
    Gender, SmokingHistory, YesNo, BMI_UI_MAX, BMI_UI_MIN, GLUCOSE_UI_MAX, GLUCOSE_UI_MIN,
    HBA1C_UI_MAX, HBA1C_UI_MIN,
};
use crate::ports::Predictor;

use super::ui::{
    form::{coerce_age, cycle_option, render_form, FormField, FormState},
    render_disclaimer,
    resources::render_resources,
    result::render_result,
};
use super::worker::{PredictionEvent, PredictionWorker, PredictionWorkerHandle};

/// Main application state.
pub struct App<P> {
    /// Assessment workflow (input record, result, error slot, busy flag)
    workflow: Workflow,

    /// Form navigation state
    form: FormState,

    /// Prediction service adapter, shared with worker threads
    predictor: Arc<P>,

    /// Pending prediction worker (at most one)
    pending: Option<PredictionWorkerHandle>,

    /// Whether the app should quit
    should_quit: bool,
}

impl<P> App<P>
where
    P: Predictor + Send + Sync + 'static,
{
    /// Create the application around a prediction service adapter.
    #[must_use]
    pub fn new(predictor: Arc<P>) -> Self {
        Self {
            workflow: Workflow::new(),
            form: FormState::default(),
            predictor,
            pending: None,
            should_quit: false,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.poll_worker();

            terminal.draw(|f| {
                let area = f.area();
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(2)])
                    .split(area);

                let columns = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(rows[0]);

                render_form(
                    f,
                    columns[0],
                    self.workflow.input(),
                    &self.form,
                    self.workflow.error(),
                    self.workflow.is_busy(),
                );

                let right = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(5)])
                    .split(columns[1]);
                render_result(f, right[0], self.workflow.result(), self.workflow.is_busy());
                render_resources(f, right[1]);

                render_disclaimer(f, rows[1]);
            })?;

            // Short poll to stay responsive while the worker runs.
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

    /// Poll the background worker for the request outcome.
    fn poll_worker(&mut self) {
        let Some(event) = self.pending.as_ref().and_then(|w| w.try_recv()) else {
            return;
        };

        match event {
            PredictionEvent::Complete(result) => self.workflow.finish(Ok(result)),
            PredictionEvent::Failed(message) => self.workflow.finish(Err(message)),
        }
        self.pending = None;
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.form.prev_field(),
            KeyCode::Down | KeyCode::Tab => self.form.next_field(),
            KeyCode::Left => self.adjust_field(false),
            KeyCode::Right => self.adjust_field(true),
            KeyCode::Char(c) => self.input_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Step or cycle the focused field with Left/Right.
    fn adjust_field(&mut self, forward: bool) {
        let input = self.workflow.input();
        let step = |value: f64, step: f64, min: f64, max: f64| {
            let delta = if forward { step } else { -step };
            // Steps can accumulate float error; round to the slider's
            // 0.1 resolution.
            ((value + delta).clamp(min, max) * 10.0).round() / 10.0
        };

        let update = match self.form.selected_field() {
            FormField::Gender => {
                FieldUpdate::Gender(cycle_option(&Gender::ALL, input.gender, forward))
            }
            FormField::Hypertension => {
                FieldUpdate::Hypertension(cycle_option(&YesNo::ALL, input.hypertension, forward))
            }
            FormField::HeartDisease => {
                FieldUpdate::HeartDisease(cycle_option(&YesNo::ALL, input.heart_disease, forward))
            }
            FormField::SmokingHistory => FieldUpdate::SmokingHistory(cycle_option(
                &SmokingHistory::ALL,
                input.smoking_history,
                forward,
            )),
            FormField::Bmi => FieldUpdate::Bmi(step(input.bmi, 0.1, BMI_UI_MIN, BMI_UI_MAX)),
            FormField::HbA1c => {
                FieldUpdate::HbA1c(step(input.hba1c_level, 0.1, HBA1C_UI_MIN, HBA1C_UI_MAX))
            }
            FormField::BloodGlucose => {
                let delta = if forward { 1 } else { -1 };
                FieldUpdate::BloodGlucose(
                    (input.blood_glucose_level + delta).clamp(GLUCOSE_UI_MIN, GLUCOSE_UI_MAX),
                )
            }
            // Age is typed, not stepped.
            FormField::Age => return,
        };

        self.workflow.apply(update);
    }

    fn input_char(&mut self, c: char) {
        if self.form.selected_field() != FormField::Age || !c.is_ascii_digit() {
            return;
        }
        self.form.age_text.push(c);
        self.sync_age();
    }

    fn delete_char(&mut self) {
        if self.form.selected_field() != FormField::Age {
            return;
        }
        self.form.age_text.pop();
        self.sync_age();
    }

    fn sync_age(&mut self) {
        self.workflow
            .apply(FieldUpdate::Age(coerce_age(&self.form.age_text)));
    }

    fn submit(&mut self) {
        // begin_submit refuses while a request is in flight and records
        // the validation message when the input is incomplete.
        if let Some(request) = self.workflow.begin_submit() {
            self.pending = Some(PredictionWorker::spawn(self.predictor.clone(), request));
        }
    }
}

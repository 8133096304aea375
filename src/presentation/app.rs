// Controller - view state machine driven by key events and submission outcomes
use crate::application::decoder_service::ServiceError;
use crate::application::submission::{SubmissionOutcome, SubmissionService};
use crate::domain::telemetry::TelemetryResult;
use crate::domain::validation::validate_hex;
use crate::presentation::chart::ChartAdapter;
use crate::presentation::renderers;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Preset sensor payloads, selectable with F1-F4. Selection is sugar: it
/// fills the hex field and takes the same submission path as manual entry.
pub const EXAMPLE_PAYLOADS: [&str; 4] = [
    "1AFF0D000002B765924F310302157CA080030D74E08107EA287B270302A0AD",
    "1AFF0D000002B867F34E3183051C04B08001000080810275287B270302A0AD",
    "1AFF0D000002B567D3CE3147041C088041041C28E041007E287B270302A0AD",
    "1AFF0D000002AC67153CE04100000C30C000036C9080074D287B270302A0AD",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Displaying,
    ErrorShown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hex,
    Height,
}

/// One decoded result together with the tank height it was requested with.
#[derive(Debug)]
pub struct DisplayedResult {
    pub telemetry: TelemetryResult,
    pub tank_height: f64,
}

pub struct App {
    submissions: SubmissionService,
    default_tank_height: f64,
    pub hex_input: String,
    pub height_input: String,
    pub focus: Field,
    phase: Phase,
    result: Option<DisplayedResult>,
    error: Option<String>,
    chart: ChartAdapter,
    active_submission: u64,
    should_quit: bool,
}

impl App {
    pub fn new(submissions: SubmissionService, default_tank_height: f64) -> Self {
        Self {
            submissions,
            default_tank_height,
            hex_input: String::new(),
            height_input: format!("{default_tank_height}"),
            focus: Field::Hex,
            phase: Phase::Idle,
            result: None,
            error: None,
            chart: ChartAdapter::new(),
            active_submission: 0,
            should_quit: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&DisplayedResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn chart(&self) -> &ChartAdapter {
        &self.chart
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') | KeyCode::Char('q') = key.code {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Tab => self.toggle_focus(),
            KeyCode::Esc => {
                if self.result.is_some() {
                    self.close_result();
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::F(n @ 1..=4) => self.load_example(n as usize - 1),
            KeyCode::Backspace => {
                self.focused_field_mut().pop();
            }
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Hex => Field::Height,
            Field::Height => Field::Hex,
        };
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Hex => &mut self.hex_input,
            Field::Height => &mut self.height_input,
        }
    }

    fn insert_char(&mut self, c: char) {
        match self.focus {
            // invalid characters are caught by validation at submit time
            Field::Hex => {
                if !c.is_control() {
                    self.hex_input.push(c);
                }
            }
            Field::Height => {
                if c.is_ascii_digit() || c == '.' {
                    self.height_input.push(c);
                }
            }
        }
    }

    fn load_example(&mut self, index: usize) {
        if let Some(payload) = EXAMPLE_PAYLOADS.get(index) {
            self.hex_input = (*payload).to_string();
            self.submit();
        }
    }

    /// Valid input dispatches a request from any state; validation failures
    /// show the banner without touching the network.
    pub fn submit(&mut self) {
        match validate_hex(&self.hex_input) {
            Ok(hex) => {
                let tank_height = self.tank_height();
                self.active_submission = self.submissions.dispatch(hex, tank_height);
                self.phase = Phase::Submitting;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err.to_string());
                self.phase = Phase::ErrorShown;
            }
        }
    }

    /// Tank height for the next submission; an unparseable field falls back
    /// to the configured default.
    fn tank_height(&self) -> f64 {
        match self.height_input.trim().parse::<f64>() {
            Ok(height) if height > 0.0 => height,
            _ => {
                tracing::debug!(
                    input = %self.height_input,
                    "tank height field not parseable, using default"
                );
                self.default_tank_height
            }
        }
    }

    pub fn handle_outcome(&mut self, outcome: SubmissionOutcome) {
        if outcome.id != self.active_submission {
            tracing::debug!(
                id = outcome.id,
                active = self.active_submission,
                "discarding stale submission outcome"
            );
            return;
        }

        match outcome.result {
            Ok(telemetry) => {
                self.error = None;
                renderers::apply_peaks(&telemetry, &mut self.chart);
                self.result = Some(DisplayedResult {
                    telemetry,
                    tank_height: outcome.tank_height,
                });
                self.phase = Phase::Displaying;
            }
            Err(err) => {
                if let ServiceError::Transport(cause) = &err {
                    tracing::error!(%cause, "decoder request failed");
                }
                self.result = None;
                self.error = Some(err.user_message().to_string());
                self.phase = Phase::ErrorShown;
            }
        }
    }

    /// Close drops the displayed result and tears the chart series down.
    fn close_result(&mut self) {
        self.result = None;
        self.chart.clear();
        self.phase = Phase::Idle;
    }
}

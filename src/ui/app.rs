//! Main TUI application state and logic

use crate::config::Config;
use crate::formula::Formula;
use crate::logging;
use crate::parser::ParseError;
use crate::sampling::SampleSet;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::info;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Fraction of the visible width moved by one pan step
const PAN_STEP: f64 = 0.1;
/// Factor applied to the visible width by one zoom step
const ZOOM_STEP: f64 = 1.25;
/// Rows moved by PageUp / PageDown
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Chart,
    Table,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane (input -> chart -> table -> log)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Chart,
            FocusedPane::Chart => FocusedPane::Table,
            FocusedPane::Table => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Input,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Input => FocusedPane::Log,
            FocusedPane::Chart => FocusedPane::Input,
            FocusedPane::Table => FocusedPane::Chart,
            FocusedPane::Log => FocusedPane::Table,
        }
    }
}

/// The main application state
pub struct App {
    /// The compiled formula, re-parsed in place on every submit
    pub formula: Formula,

    /// Expression text being edited
    pub input: String,

    /// Cursor position in `input`, in characters
    pub cursor: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Visible x interval
    pub view: (f64, f64),

    /// Interval restored by reset
    pub home_view: (f64, f64),

    /// Number of points sampled per view
    pub sample_count: usize,

    /// Samples for the current formula and view
    pub samples: SampleSet,

    /// Per-pane scroll offsets
    pub table_scroll: usize,
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app for `formula`, viewing the interval from `config`
    pub fn new(formula: Formula, config: &Config) -> Self {
        let input = formula.source().to_string();
        let cursor = input.chars().count();
        let focused_pane = if formula.is_empty() {
            FocusedPane::Input
        } else {
            FocusedPane::Chart
        };
        let status_message = match formula.last_error() {
            Some(err) => err.to_string(),
            None if formula.is_empty() => "Type an expression and press Enter".to_string(),
            None => format!("RPN: {}", formula.program()),
        };

        let mut app = App {
            formula,
            input,
            cursor,
            focused_pane,
            view: (config.from, config.to),
            home_view: (config.from, config.to),
            sample_count: config.samples,
            samples: SampleSet::default(),
            table_scroll: 0,
            log_scroll: usize::MAX,
            should_quit: false,
            status_message,
        };
        app.resample();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Error from the last compile, if any
    pub fn error(&self) -> Option<&ParseError> {
        self.formula.last_error()
    }

    /// Parse error to mark in the input line, while it still shows the
    /// text that produced it
    fn input_error(&self) -> Option<&ParseError> {
        self.formula
            .last_error()
            .filter(|_| self.input == self.formula.source())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Input on top, plot and table in the middle, log and status below
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(7),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(rows[1]);

        super::panes::render_input_pane(
            frame,
            rows[0],
            &self.input,
            self.cursor,
            self.input_error(),
            self.focused_pane == FocusedPane::Input,
        );

        super::panes::render_chart_pane(
            frame,
            columns[0],
            &self.samples,
            self.formula.source(),
            self.focused_pane == FocusedPane::Chart,
        );

        super::panes::render_table_pane(
            frame,
            columns[1],
            &self.samples,
            self.focused_pane == FocusedPane::Table,
            &mut self.table_scroll,
        );

        let log_lines = logging::lines();
        super::panes::render_log_pane(
            frame,
            rows[2],
            &log_lines,
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_status_bar(
            frame,
            rows[3],
            &self.status_message,
            self.formula.last_error().is_some(),
            self.focused_pane,
            self.view,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                return;
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
                return;
            }
            _ => {}
        }

        match self.focused_pane {
            FocusedPane::Input => self.handle_input_key(key),
            FocusedPane::Chart => self.handle_chart_key(key),
            FocusedPane::Table => {
                if !scroll(&mut self.table_scroll, key.code) {
                    self.handle_quit_key(key);
                }
            }
            FocusedPane::Log => {
                if !scroll(&mut self.log_scroll, key.code) {
                    self.handle_quit_key(key);
                }
            }
        }
    }

    fn handle_quit_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            self.should_quit = true;
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let at = self.byte_offset(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Delete => {
                if self.cursor < self.input.chars().count() {
                    let at = self.byte_offset(self.cursor);
                    self.input.remove(at);
                }
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.input.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.input.chars().count(),
            _ => {}
        }
    }

    fn handle_chart_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.pan(-PAN_STEP),
            KeyCode::Right => self.pan(PAN_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => self.zoom(1.0 / ZOOM_STEP),
            KeyCode::Char('-') | KeyCode::Char('_') => self.zoom(ZOOM_STEP),
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.view = self.home_view;
                self.resample();
                self.status_message = "View reset".to_string();
            }
            _ => self.handle_quit_key(key),
        }
    }

    /// Compile the input into the formula and replot
    pub fn submit(&mut self) {
        if self.formula.parse(&self.input) {
            info!("plotting f(x) = {}", self.input.trim());
            self.status_message = format!("RPN: {}", self.formula.program());
            self.table_scroll = 0;
        } else if let Some(err) = self.formula.last_error() {
            self.status_message = err.to_string();
        }
        self.log_scroll = usize::MAX;
        self.resample();
    }

    /// Shift the view by `fraction` of its width
    pub fn pan(&mut self, fraction: f64) {
        let shift = (self.view.1 - self.view.0) * fraction;
        let view = (self.view.0 + shift, self.view.1 + shift);
        if !view.0.is_finite() || !view.1.is_finite() {
            self.status_message = "Pan limit reached".to_string();
            return;
        }
        self.view = view;
        self.resample();
    }

    /// Scale the view width by `factor` around its centre
    pub fn zoom(&mut self, factor: f64) {
        let centre = (self.view.0 + self.view.1) / 2.0;
        let half = (self.view.1 - self.view.0) / 2.0 * factor;
        // Refuse to collapse the interval below float resolution
        if half <= f64::EPSILON * centre.abs().max(1.0) || !half.is_finite() {
            self.status_message = "Zoom limit reached".to_string();
            return;
        }
        self.view = (centre - half, centre + half);
        self.resample();
    }

    fn resample(&mut self) {
        self.samples = if self.formula.is_empty() {
            SampleSet::default()
        } else {
            SampleSet::sample(&self.formula, self.view.0, self.view.1, self.sample_count)
        };
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}

/// Apply a scroll key to `offset`. Returns whether the key was a scroll key.
fn scroll(offset: &mut usize, code: KeyCode) -> bool {
    match code {
        KeyCode::Up => *offset = offset.saturating_sub(1),
        KeyCode::Down => *offset = offset.saturating_add(1),
        KeyCode::PageUp => *offset = offset.saturating_sub(PAGE),
        KeyCode::PageDown => *offset = offset.saturating_add(PAGE),
        KeyCode::Home => *offset = 0,
        KeyCode::End => *offset = usize::MAX,
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_for(source: &str) -> App {
        let mut formula = Formula::new();
        formula.parse(source);
        let config = Config {
            from: 0.0,
            to: 4.0,
            samples: 5,
            ..Config::default()
        };
        App::new(formula, &config)
    }

    #[test]
    fn test_new_app_samples_formula() {
        let app = app_for("x^2");
        assert_eq!(app.focused_pane, FocusedPane::Chart);
        assert_eq!(app.samples.len(), 5);
        assert_eq!(app.samples.points()[4].y, 16.0);
        assert_eq!(app.status_message, "RPN: x 2 ^");
    }

    #[test]
    fn test_edit_and_submit_reuses_formula() {
        let mut app = app_for("");
        assert_eq!(app.focused_pane, FocusedPane::Input);
        assert!(app.samples.is_empty());

        type_text(&mut app, "3x");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.samples.points()[2].y, 6.0);

        // Replace with 2(x+1)
        press(&mut app, KeyCode::Home);
        press(&mut app, KeyCode::Delete);
        press(&mut app, KeyCode::Delete);
        type_text(&mut app, "2(x+1)");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.formula.source(), "2(x+1)");
        assert_eq!(app.samples.points()[4].y, 10.0);
        assert!(app.error().is_none());
    }

    #[test]
    fn test_failed_submit_clears_plot() {
        let mut app = app_for("x");
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Input);

        type_text(&mut app, "+");
        press(&mut app, KeyCode::Enter);
        assert!(app.error().is_some());
        assert!(app.samples.is_empty());
        assert!(app.status_message.contains("end of input"));
    }

    #[test]
    fn test_cursor_editing() {
        let mut app = app_for("");
        type_text(&mut app, "sin()");
        press(&mut app, KeyCode::Left);
        type_text(&mut app, "x");
        assert_eq!(app.input, "sin(x)");
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input, "sin(x");
        assert_eq!(app.cursor, 5);
    }

    #[test]
    fn test_pan_and_zoom() {
        let mut app = app_for("x");
        press(&mut app, KeyCode::Right);
        assert!((app.view.0 - 0.4).abs() < 1e-12 && (app.view.1 - 4.4).abs() < 1e-12);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.view, (0.0, 4.0));

        press(&mut app, KeyCode::Char('-'));
        assert_eq!(app.view, (-0.5, 4.5));
        assert_eq!(app.samples.x_range(), (-0.5, 4.5));
    }

    #[test]
    fn test_modified_chars_are_not_inserted() {
        let mut app = app_for("");
        type_text(&mut app, "2x");
        app.handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT));
        assert_eq!(app.input, "2xX");
        assert_eq!(app.cursor, 3);
    }

    #[test]
    fn test_pan_stops_at_float_limit() {
        let mut app = app_for("x");
        app.view = (-f64::MAX, f64::MAX * 0.5);
        app.pan(PAN_STEP);
        assert_eq!(app.view, (-f64::MAX, f64::MAX * 0.5));
        assert_eq!(app.status_message, "Pan limit reached");

        app.view = (0.0, 4.0);
        app.pan(-PAN_STEP);
        assert!(app.view.0.is_finite() && app.view.1.is_finite());
        assert!(app.samples.points().iter().all(|s| s.y.is_finite()));
    }

    #[test]
    fn test_error_marker_follows_submitted_text() {
        let mut app = app_for("");
        type_text(&mut app, "2 % 3");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_error().map(|e| e.position()), Some(2));

        press(&mut app, KeyCode::Home);
        type_text(&mut app, "1");
        assert!(app.input_error().is_none());
        assert!(app.error().is_some());

        press(&mut app, KeyCode::Backspace);
        assert!(app.input_error().is_some());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_for("x");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        // 'q' is text while editing
        let mut app = app_for("");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}

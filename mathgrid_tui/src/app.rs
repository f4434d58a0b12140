//! Application state and key handling.

use crossterm::event::KeyCode;
use mathgrid::{Coord, Operation, Session};
use tracing::debug;

use crate::input;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Exit the application.
    Quit,
}

const PLAYING_HINT: &str =
    "Arrows move, Space selects, + - * / pick an operation, Enter applies.";

/// Main application state.
pub struct App {
    session: Session,
    cursor: Coord,
    status_message: String,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            cursor: Coord { row: 0, col: 0 },
            status_message: PLAYING_HINT.to_string(),
        }
    }

    /// The running session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The cell the cursor is on.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// The current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Char(' ') => self.toggle_cursor_cell(),
            KeyCode::Char('+') => self.choose(Operation::Add),
            KeyCode::Char('-') => self.choose(Operation::Subtract),
            KeyCode::Char('*') | KeyCode::Char('x') => self.choose(Operation::Multiply),
            KeyCode::Char('/') => self.choose(Operation::Divide),
            KeyCode::Enter => self.apply(),
            _ => {}
        }
        Control::Continue
    }

    fn toggle_cursor_cell(&mut self) {
        debug!(cursor = %self.cursor, "Toggling cell");
        self.session.toggle_cell(self.cursor);
        if !self.session.is_over() {
            self.status_message = match self.session.selection().len() {
                2 => "Two cells selected. Pick an operation and press Enter.".to_string(),
                _ => PLAYING_HINT.to_string(),
            };
        }
    }

    fn choose(&mut self, op: Operation) {
        self.session.choose_operation(op);
        if self.session.candidate() == Some(op) {
            self.status_message = format!("Operation {} chosen.", op);
        }
    }

    fn apply(&mut self) {
        match self.session.apply() {
            Ok(Some(result)) => {
                if self.session.is_over() {
                    self.status_message = format!(
                        "Game over! Final score {:.2} of an estimated max {:.2}. \
                         Press 'r' to restart or 'q' to quit.",
                        self.session.score(),
                        self.session.max_score()
                    );
                } else {
                    self.status_message =
                        format!("Result {:.2}, score {:.2}.", result, self.session.score());
                }
            }
            Ok(None) => {
                self.status_message =
                    "Select exactly two cells and an operation first.".to_string();
            }
            Err(e) => {
                self.status_message = format!("{}. Change the selection or operation.", e);
            }
        }
    }

    fn restart(&mut self) {
        debug!("Restarting session");
        self.session.restart();
        self.status_message = PLAYING_HINT.to_string();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

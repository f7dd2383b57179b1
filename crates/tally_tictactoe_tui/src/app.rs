//! Application state and key handling.

use crate::config::GameConfig;
use crate::input::{digit_position, move_cursor};
use crate::sinks::{ScorePanel, Toast};
use crossterm::event::KeyCode;
use tally_tictactoe::{Controller, GameEngine, Input, MoveError, Notification, Position};
use tracing::{debug, instrument};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    controller: Controller<ScorePanel, Toast>,
    config: GameConfig,
    cursor: Position,
    rejected: Option<MoveError>,
}

impl App {
    /// Creates a new application.
    pub fn new(config: GameConfig) -> Self {
        Self {
            controller: Controller::new(ScorePanel::default(), Toast::default()),
            config,
            cursor: Position::Center,
            rejected: None,
        }
    }

    /// Gets the engine state.
    pub fn engine(&self) -> &GameEngine {
        self.controller.engine()
    }

    /// Gets the display config.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Scores as last reported to the score panel.
    pub fn scores(&self) -> (u32, u32) {
        self.controller.score_sink().scores()
    }

    /// The end-of-round notification awaiting dismissal.
    pub fn toast(&self) -> Option<Notification> {
        self.controller.notification_sink().current()
    }

    /// Why the last key did not place a mark, if it was a rejected tap.
    pub fn rejected(&self) -> Option<&MoveError> {
        self.rejected.as_ref()
    }

    /// Whose turn it is, or the prompt to dismiss a finished round.
    pub fn status_message(&self) -> String {
        if self.toast().is_some() {
            return "Press any key for the next round.".to_string();
        }
        let turn = self.engine().turn();
        let prompt = format!(
            "{}'s turn ({})",
            self.config.label(turn),
            self.config.symbol(turn)
        );
        match &self.rejected {
            Some(e) => format!("{}. {}", e, prompt),
            None => prompt,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            return Action::Quit;
        }
        self.rejected = None;

        if self.toast().is_some() {
            self.controller.notification_sink_mut().dismiss();
            self.apply(Input::Acknowledge);
            return Action::Continue;
        }

        match key {
            KeyCode::Char('r') | KeyCode::Char('R') => {
                debug!("Resetting game");
                self.apply(Input::ResetGame);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(Input::Tap(self.cursor));
            }
            code => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.apply(Input::Tap(pos));
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }
        Action::Continue
    }

    fn apply(&mut self, input: Input) {
        self.rejected = self.controller.handle(input).err();
    }
}

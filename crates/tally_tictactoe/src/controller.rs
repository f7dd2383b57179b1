//! Input routing between a front end and the engine.
//!
//! Front ends translate their own widget callbacks into [`Input`] values
//! and hand them to [`Controller::handle`]. The controller drives the
//! engine and reports back through two sinks: one for scores, one for
//! end-of-round notifications. The engine never sees a UI type.

use super::engine::GameEngine;
use super::error::MoveError;
use super::outcome::Outcome;
use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A user action, stripped of any toolkit detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// A cell was tapped.
    Tap(Position),
    /// The end-of-round notification was dismissed.
    Acknowledge,
    /// The reset control was pressed: scores and board start over.
    ResetGame,
}

/// End-of-round message, one per terminal round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notification {
    /// A player completed a line.
    Win(Mark),
    /// Board filled with no line.
    Draw,
}

/// Receives `(x, o)` every time the scores change.
pub trait ScoreSink {
    /// Called with the new scores.
    fn scores_changed(&mut self, x: u32, o: u32);
}

/// Receives end-of-round notifications.
pub trait NotificationSink {
    /// Called once when a round ends.
    fn notify(&mut self, notification: Notification);
}

impl ScoreSink for Vec<(u32, u32)> {
    fn scores_changed(&mut self, x: u32, o: u32) {
        self.push((x, o));
    }
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Owns a [`GameEngine`] and feeds its results to the sinks.
#[derive(Debug, Clone)]
pub struct Controller<S, N> {
    engine: GameEngine,
    scores: S,
    notifications: N,
}

impl<S: ScoreSink, N: NotificationSink> Controller<S, N> {
    /// Creates a controller around a fresh engine.
    pub fn new(scores: S, notifications: N) -> Self {
        Self {
            engine: GameEngine::new(),
            scores,
            notifications,
        }
    }

    /// Returns the engine for read access.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the score sink.
    pub fn score_sink(&self) -> &S {
        &self.scores
    }

    /// Returns the notification sink.
    pub fn notification_sink(&self) -> &N {
        &self.notifications
    }

    /// Returns the notification sink mutably.
    pub fn notification_sink_mut(&mut self) -> &mut N {
        &mut self.notifications
    }

    /// Applies one input.
    ///
    /// Returns the placement outcome for an accepted [`Input::Tap`] and
    /// `None` for the other inputs.
    ///
    /// # Errors
    ///
    /// A rejected tap returns the engine's [`MoveError`]. Nothing changes
    /// and neither sink is called.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Result<Option<Outcome>, MoveError> {
        match input {
            Input::Tap(pos) => self.tap(pos),
            Input::Acknowledge => {
                if self.engine.status().is_over() {
                    self.engine.reset_board();
                } else {
                    debug!("Nothing to acknowledge");
                }
                Ok(None)
            }
            Input::ResetGame => {
                self.engine.reset_game();
                let (x, o) = self.engine.scores().as_pair();
                self.scores.scores_changed(x, o);
                Ok(None)
            }
        }
    }

    fn tap(&mut self, pos: Position) -> Result<Option<Outcome>, MoveError> {
        let outcome = self.engine.place(pos).inspect_err(|e| {
            debug!(error = %e, "Move ignored");
        })?;

        match outcome {
            Outcome::Continue => {}
            Outcome::Win(mark) => {
                let (x, o) = self.engine.scores().as_pair();
                self.scores.scores_changed(x, o);
                self.notifications.notify(Notification::Win(mark));
            }
            Outcome::Draw => self.notifications.notify(Notification::Draw),
        }
        Ok(Some(outcome))
    }
}

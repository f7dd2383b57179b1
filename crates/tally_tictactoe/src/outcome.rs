//! Results of a placement and the status of a round.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// What a successful placement did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Round continues; the turn passed to the other mark.
    Continue,
    /// The placing mark completed a line.
    Win(Mark),
    /// Ninth mark placed with no line completed.
    Draw,
}

impl Outcome {
    /// Returns true if this placement ended the round.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Continue => write!(f, "Continue"),
            Outcome::Win(mark) => write!(f, "Player {} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Current status of the round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Round is ongoing.
    #[default]
    InProgress,
    /// Round ended in a win.
    Won(Mark),
    /// Round ended in a draw.
    Draw,
}

impl RoundStatus {
    /// Returns true once the round has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

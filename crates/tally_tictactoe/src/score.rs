//! Round-spanning scoreboard.

use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win counts for both players.
///
/// Survives board resets; only a full game reset zeroes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Creates a scoreboard with both counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `X`.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Wins recorded for `O`.
    pub fn o(&self) -> u32 {
        self.o
    }

    /// Wins recorded for `mark`.
    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Scores as `(x, o)`.
    pub fn as_pair(&self) -> (u32, u32) {
        (self.x, self.o)
    }

    /// Credits one win to `mark`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, mark: Mark) {
        let slot = match mark {
            Mark::X => &mut self.x,
            Mark::O => &mut self.o,
        };
        *slot = slot.saturating_add(1);
        debug!(x = self.x, o = self.o, "Score updated");
    }

    /// Zeroes both counts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - {} O", self.x, self.o)
    }
}

//! Move rejection errors.

use super::position::Position;

/// Why a placement was rejected.
///
/// Never fatal: a rejected move leaves the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),

    /// Row or column outside `0..=2`.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The round has ended and the board has not been reset.
    #[display("Round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}

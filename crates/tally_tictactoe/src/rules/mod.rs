//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine calls these
//! after every placement; the front end uses [`winning_line`] to
//! highlight a finished round.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

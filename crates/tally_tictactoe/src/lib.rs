//! Tally tic-tac-toe - two-player tic-tac-toe with a running score.
//!
//! # Architecture
//!
//! - **Engine**: board, turn, move count, scoreboard ([`GameEngine`])
//! - **Rules**: pure win/draw checks over a [`Board`] ([`rules`])
//! - **Controller**: routes [`Input`] events to the engine and reports
//!   through [`ScoreSink`] / [`NotificationSink`]
//!
//! # Example
//!
//! ```
//! use tally_tictactoe::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2)] {
//!     assert_eq!(engine.place_mark(row, col), Ok(Outcome::Continue));
//! }
//! assert_eq!(engine.place_mark(0, 2), Ok(Outcome::Win(Mark::X)));
//! assert_eq!(engine.scores().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod engine;
mod error;
mod outcome;
mod position;
pub mod rules;
mod score;
mod types;

pub use controller::{Controller, Input, Notification, NotificationSink, ScoreSink};
pub use engine::GameEngine;
pub use error::MoveError;
pub use outcome::{Outcome, RoundStatus};
pub use position::Position;
pub use score::Scoreboard;
pub use types::{Board, Mark, Square};

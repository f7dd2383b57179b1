//! Game engine for tic-tac-toe.
//!
//! Holds the board, whose turn it is, the move count, and the scoreboard.
//! Rounds end on a win or a full board; the caller decides when to start
//! the next one with [`GameEngine::reset_board`].

use super::error::MoveError;
use super::outcome::{Outcome, RoundStatus};
use super::position::Position;
use super::rules;
use super::score::Scoreboard;
use super::types::{Board, Mark, Square};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Deserializing checks the fields against each other: the move count
/// must match the board, and the status and turn must be the ones the
/// board implies. An inconsistent engine is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    turn: Mark,
    move_count: u8,
    status: RoundStatus,
    scores: Scoreboard,
}

impl GameEngine {
    /// Creates a new game: empty board, `X` to move, scores at zero.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Number of marks placed this round.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the scoreboard.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for coordinates outside `0..=2`;
    /// otherwise behaves like [`GameEngine::place`].
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(pos)
    }

    /// Places the current mark at `pos`.
    ///
    /// After the mark lands the round is evaluated in order: a completed
    /// line wins (and is scored before returning), a ninth mark with no
    /// line draws, anything else passes the turn.
    ///
    /// # Errors
    ///
    /// - [`MoveError::RoundOver`] if the round already ended.
    /// - [`MoveError::CellOccupied`] if the square is taken.
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn place(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::RoundOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        let mark = self.turn;
        self.board.set(pos, Square::Occupied(mark));
        self.move_count += 1;
        debug!(%pos, %mark, move_count = self.move_count, "Mark placed");

        if self.check_for_win() {
            self.scores.record_win(mark);
            self.status = RoundStatus::Won(mark);
            info!(%mark, scores = %self.scores, "Round won");
            return Ok(Outcome::Win(mark));
        }

        if self.move_count == 9 {
            self.status = RoundStatus::Draw;
            info!(scores = %self.scores, "Round drawn");
            return Ok(Outcome::Draw);
        }

        self.turn = mark.opponent();
        Ok(Outcome::Continue)
    }

    /// Returns true if any row, column, or diagonal holds three identical marks.
    pub fn check_for_win(&self) -> bool {
        rules::check_winner(&self.board).is_some()
    }

    /// Returns the mark owning a completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(&self.board)
    }

    /// Clears the board for a new round. `X` always opens. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset_board(&mut self) {
        self.board.clear();
        self.move_count = 0;
        self.turn = Mark::X;
        self.status = RoundStatus::InProgress;
        debug!("Board reset");
    }

    /// Zeroes both scores, then resets the board.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.scores.reset();
        self.reset_board();
        info!("Game reset");
    }
}

/// Raw serialized fields, checked before they become a [`GameEngine`].
#[derive(Deserialize)]
struct EngineSnapshot {
    board: Board,
    turn: Mark,
    move_count: u8,
    status: RoundStatus,
    scores: Scoreboard,
}

impl EngineSnapshot {
    fn validate(self) -> Result<GameEngine, String> {
        let occupied = self.board.occupied();
        if usize::from(self.move_count) != occupied {
            return Err(format!(
                "move_count {} does not match {} occupied squares",
                self.move_count, occupied
            ));
        }

        let count = |mark: Mark| {
            self.board
                .squares()
                .iter()
                .filter(|s| s.mark() == Some(mark))
                .count()
        };
        let (x, o) = (count(Mark::X), count(Mark::O));
        if x != o && x != o + 1 {
            return Err(format!("{} X marks against {} O marks", x, o));
        }

        let line_owners = rules::LINES
            .iter()
            .filter_map(|&[a, b, c]| {
                let sq = self.board.get(a);
                (sq == self.board.get(b) && sq == self.board.get(c))
                    .then(|| sq.mark())
                    .flatten()
            })
            .fold(Vec::new(), |mut owners, mark| {
                if !owners.contains(&mark) {
                    owners.push(mark);
                }
                owners
            });
        let expected_status = match line_owners.as_slice() {
            [] if occupied == 9 => RoundStatus::Draw,
            [] => RoundStatus::InProgress,
            [mark] => RoundStatus::Won(*mark),
            _ => return Err("both marks own a line".to_string()),
        };
        if self.status != expected_status {
            return Err(format!(
                "status {:?} does not match board ({:?})",
                self.status, expected_status
            ));
        }

        // The mover of the last mark is X when X is ahead by one.
        let last_mover = if x > o { Mark::X } else { Mark::O };
        let expected_turn = match expected_status {
            RoundStatus::InProgress => {
                if x == o {
                    Mark::X
                } else {
                    Mark::O
                }
            }
            RoundStatus::Won(mark) if mark != last_mover => {
                return Err(format!("{} won but did not move last", mark));
            }
            RoundStatus::Won(mark) => mark,
            RoundStatus::Draw => Mark::X,
        };
        if self.turn != expected_turn {
            return Err(format!(
                "turn {} does not match board ({})",
                self.turn, expected_turn
            ));
        }

        Ok(GameEngine {
            board: self.board,
            turn: self.turn,
            move_count: self.move_count,
            status: self.status,
            scores: self.scores,
        })
    }
}

impl<'de> Deserialize<'de> for GameEngine {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        EngineSnapshot::deserialize(deserializer)?
            .validate()
            .map_err(|e| serde::de::Error::custom(format!("Inconsistent engine state: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> Vec<Outcome> {
        moves
            .iter()
            .map(|&(r, c)| engine.place_mark(r, c).expect("legal move"))
            .collect()
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.turn(), Mark::X);
        assert_eq!(engine.move_count(), 0);
        assert_eq!(engine.status(), RoundStatus::InProgress);
        assert_eq!(engine.scores().as_pair(), (0, 0));
    }

    #[test]
    fn test_turn_alternates() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.place_mark(1, 1), Ok(Outcome::Continue));
        assert_eq!(engine.turn(), Mark::O);
        assert_eq!(engine.place_mark(0, 0), Ok(Outcome::Continue));
        assert_eq!(engine.turn(), Mark::X);
    }

    #[test]
    fn test_second_player_can_win() {
        let mut engine = GameEngine::new();
        let outcomes = play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
        assert_eq!(outcomes.last(), Some(&Outcome::Win(Mark::O)));
        assert_eq!(engine.scores().as_pair(), (0, 1));
        assert_eq!(engine.status(), RoundStatus::Won(Mark::O));
        // Turn is not flipped by a winning move.
        assert_eq!(engine.turn(), Mark::O);
    }

    #[test]
    fn test_full_board_without_line_draws() {
        let mut engine = GameEngine::new();
        // X O X / X O O / O X X
        let outcomes = play(
            &mut engine,
            &[(0, 0), (0, 1), (0, 2), (1, 2), (1, 0), (2, 0), (2, 1), (1, 1), (2, 2)],
        );
        assert_eq!(outcomes.last(), Some(&Outcome::Draw));
        assert_eq!(engine.move_count(), 9);
        assert_eq!(engine.status(), RoundStatus::Draw);
        assert_eq!(engine.scores().as_pair(), (0, 0));
    }

    #[test]
    fn test_win_on_ninth_move_is_not_a_draw() {
        let mut engine = GameEngine::new();
        // X O X / O X O / O X X
        let outcomes = play(
            &mut engine,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(outcomes.last(), Some(&Outcome::Win(Mark::X)));
        assert_eq!(engine.move_count(), 9);
        assert_eq!(engine.scores().as_pair(), (1, 0));
    }

    #[test]
    fn test_round_over_rejects_moves() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)]);
        let before = engine.clone();
        assert_eq!(engine.place_mark(2, 2), Err(MoveError::RoundOver));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut engine = GameEngine::new();
        assert_eq!(
            engine.place_mark(3, 0),
            Err(MoveError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(engine, GameEngine::new());
    }
}

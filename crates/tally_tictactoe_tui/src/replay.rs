//! Headless play-through of a recorded move list.

use crate::config::GameConfig;
use crate::sinks::{ScorePanel, Toast};
use derive_more::{Display, Error};
use tally_tictactoe::{Controller, Input, Mark, MoveError, Position};
use tracing::{info, instrument, warn};

/// A move token that is not `row,col`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move {:?}: expected `row,col`", token)]
pub struct MoveParseError {
    /// The offending token.
    pub token: String,
}

/// Parses a `row,col` token. Coordinates are not range-checked here.
pub fn parse_move(token: &str) -> Result<(usize, usize), MoveParseError> {
    let err = || MoveParseError {
        token: token.to_string(),
    };
    let (row, col) = token.split_once(',').ok_or_else(err)?;
    let row = row.trim().parse().map_err(|_| err())?;
    let col = col.trim().parse().map_err(|_| err())?;
    Ok((row, col))
}

/// Plays `moves` in order and returns the transcript.
///
/// Finished rounds are acknowledged immediately, so later moves start a
/// fresh board. Rejected moves are reported and skipped.
#[instrument(skip(config))]
pub fn run(config: &GameConfig, moves: &[String]) -> Result<Vec<String>, MoveParseError> {
    let parsed = moves
        .iter()
        .map(|m| parse_move(m))
        .collect::<Result<Vec<_>, _>>()?;

    let mut controller = Controller::new(ScorePanel::default(), Toast::default());
    let mut lines = Vec::new();

    for (row, col) in parsed {
        let Some(pos) = Position::from_row_col(row, col) else {
            let e = MoveError::OutOfBounds { row, col };
            warn!(error = %e, "Skipping move");
            lines.push(format!("ignored: {}", e));
            continue;
        };

        let mark = controller.engine().turn();
        match controller.handle(Input::Tap(pos)) {
            Err(e) => {
                warn!(error = %e, "Skipping move");
                lines.push(format!("ignored: {}", e));
            }
            Ok(None) => {}
            Ok(Some(outcome)) => {
                lines.push(format!("{} -> {}", config.symbol(mark), pos));
                let finished = outcome
                    .is_terminal()
                    .then(|| controller.notification_sink_mut().dismiss())
                    .flatten();
                if let Some(notification) = finished {
                    lines.push(config.message(notification).to_string());
                    controller.handle(Input::Acknowledge).ok();
                }
            }
        }
    }

    let (x, o) = controller.score_sink().scores();
    info!(x, o, "Replay finished");
    lines.push(config.score_line(Mark::X, x));
    lines.push(config.score_line(Mark::O, o));
    Ok(lines)
}

//! End-to-end round scenarios for the game engine.

use tally_tictactoe::{GameEngine, Mark, MoveError, Outcome, Position, RoundStatus, Square};

#[test]
fn test_top_row_win_scores_first_player() {
    let mut engine = GameEngine::new();
    let moves = [(0, 0), (1, 1), (0, 1), (1, 2)];
    for (row, col) in moves {
        assert_eq!(engine.place_mark(row, col), Ok(Outcome::Continue));
    }

    assert_eq!(engine.place_mark(0, 2), Ok(Outcome::Win(Mark::X)));
    assert_eq!(engine.scores().x(), 1);
    assert_eq!(engine.scores().o(), 0);
    assert!(engine.check_for_win());
    assert_eq!(engine.winner(), Some(Mark::X));
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut engine = GameEngine::new();
    engine.place_mark(1, 1).expect("empty cell");
    let before = engine.clone();

    let result = engine.place_mark(1, 1);

    assert_eq!(result, Err(MoveError::CellOccupied(Position::Center)));
    assert_eq!(engine.board(), before.board());
    assert_eq!(engine.turn(), Mark::O);
    assert_eq!(engine.move_count(), 1);
}

#[test]
fn test_draw_after_nine_moves() {
    let mut engine = GameEngine::new();
    // X O X
    // X O O
    // O X X
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 2),
        (1, 0),
        (2, 0),
        (2, 1),
        (1, 1),
    ];
    for (row, col) in moves {
        assert_eq!(engine.place_mark(row, col), Ok(Outcome::Continue));
    }
    assert_eq!(engine.place_mark(2, 2), Ok(Outcome::Draw));
    assert_eq!(engine.status(), RoundStatus::Draw);
    assert_eq!(engine.scores().as_pair(), (0, 0));
}

#[test]
fn test_reset_board_keeps_scores() {
    let mut engine = GameEngine::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
        engine.place_mark(row, col).expect("legal move");
    }
    assert_eq!(engine.status(), RoundStatus::Won(Mark::X));

    engine.reset_board();

    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.status(), RoundStatus::InProgress);
    assert!(engine.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(engine.scores().as_pair(), (1, 0));
}

#[test]
fn test_first_player_opens_every_round() {
    let mut engine = GameEngine::new();
    // O wins the first round on the middle row.
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)] {
        engine.place_mark(row, col).expect("legal move");
    }
    assert_eq!(engine.status(), RoundStatus::Won(Mark::O));

    engine.reset_board();
    assert_eq!(engine.turn(), Mark::X);
    engine.place_mark(1, 1).expect("legal move");
    assert_eq!(engine.board().get(Position::Center), Square::Occupied(Mark::X));
}

#[test]
fn test_reset_game_zeroes_scores() {
    let mut engine = GameEngine::new();
    for _ in 0..2 {
        for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
            engine.place_mark(row, col).expect("legal move");
        }
        engine.reset_board();
    }
    assert_eq!(engine.scores().x(), 2);
    engine.place_mark(2, 2).expect("legal move");

    engine.reset_game();

    assert_eq!(engine.scores().as_pair(), (0, 0));
    assert_eq!(engine.move_count(), 0);
    assert_eq!(engine.turn(), Mark::X);
    assert_eq!(engine.board().occupied(), 0);
}

#[test]
fn test_engine_serializes() {
    let mut engine = GameEngine::new();
    engine.place_mark(0, 0).expect("legal move");

    let json = serde_json::to_string(&engine).expect("serialize");
    let restored: GameEngine = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, engine);
}

fn tampered(engine: &GameEngine, from: &str, to: &str) -> String {
    let json = serde_json::to_string(engine).expect("serialize");
    assert!(json.contains(from), "{} not in {}", from, json);
    json.replace(from, to)
}

#[test]
fn test_overflowing_move_count_is_rejected() {
    let mut engine = GameEngine::new();
    engine.place_mark(0, 0).expect("legal move");

    let json = tampered(&engine, "\"move_count\":1", "\"move_count\":255");

    let err = serde_json::from_str::<GameEngine>(&json).unwrap_err();
    assert!(err.to_string().contains("move_count 255"));
}

#[test]
fn test_move_count_must_match_board() {
    let mut engine = GameEngine::new();
    engine.place_mark(0, 0).expect("legal move");

    let json = tampered(&engine, "\"move_count\":1", "\"move_count\":8");

    assert!(serde_json::from_str::<GameEngine>(&json).is_err());
}

#[test]
fn test_status_must_match_board() {
    let mut engine = GameEngine::new();
    engine.place_mark(1, 1).expect("legal move");

    let json = tampered(&engine, "\"status\":\"InProgress\"", "\"status\":\"Draw\"");

    assert!(serde_json::from_str::<GameEngine>(&json).is_err());
}

#[test]
fn test_turn_must_match_board() {
    let mut engine = GameEngine::new();
    engine.place_mark(1, 1).expect("legal move");

    let json = tampered(&engine, "\"turn\":\"O\"", "\"turn\":\"X\"");

    assert!(serde_json::from_str::<GameEngine>(&json).is_err());
}

#[test]
fn test_finished_round_round_trips() {
    let mut engine = GameEngine::new();
    for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 2), (0, 2)] {
        engine.place_mark(row, col).expect("legal move");
    }

    let json = serde_json::to_string(&engine).expect("serialize");
    let restored: GameEngine = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, engine);
    assert_eq!(restored.status(), RoundStatus::Won(Mark::X));
}

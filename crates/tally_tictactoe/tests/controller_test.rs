//! Tests for input routing and sink reporting.

use tally_tictactoe::{
    Controller, Input, Mark, MoveError, Notification, Outcome, Position, RoundStatus,
};

type Recorder = Controller<Vec<(u32, u32)>, Vec<Notification>>;

fn tap_all(ctl: &mut Recorder, positions: &[Position]) -> Vec<Outcome> {
    positions
        .iter()
        .map(|p| ctl.handle(Input::Tap(*p)).expect("legal move").expect("tap outcome"))
        .collect()
}

const X_TOP_ROW: [Position; 5] = [
    Position::TopLeft,
    Position::Center,
    Position::TopCenter,
    Position::MiddleRight,
    Position::TopRight,
];

#[test]
fn test_win_reports_scores_then_notification() {
    let mut ctl: Recorder = Controller::new(Vec::new(), Vec::new());

    let outcomes = tap_all(&mut ctl, &X_TOP_ROW);

    assert_eq!(outcomes.last(), Some(&Outcome::Win(Mark::X)));
    assert_eq!(ctl.score_sink(), &vec![(1, 0)]);
    assert_eq!(ctl.notification_sink(), &vec![Notification::Win(Mark::X)]);
}

#[test]
fn test_acknowledge_starts_next_round() {
    let mut ctl: Recorder = Controller::new(Vec::new(), Vec::new());
    tap_all(&mut ctl, &X_TOP_ROW);

    // Board stays frozen until the notification is dismissed.
    assert_eq!(
        ctl.handle(Input::Tap(Position::BottomLeft)),
        Err(MoveError::RoundOver)
    );
    assert_eq!(ctl.engine().move_count(), 5);
    assert_eq!(ctl.notification_sink().len(), 1);

    assert_eq!(ctl.handle(Input::Acknowledge), Ok(None));

    assert_eq!(ctl.engine().status(), RoundStatus::InProgress);
    assert_eq!(ctl.engine().move_count(), 0);
    assert_eq!(ctl.engine().turn(), Mark::X);
    assert_eq!(ctl.engine().scores().as_pair(), (1, 0));
}

#[test]
fn test_draw_notifies_without_score_update() {
    let mut ctl: Recorder = Controller::new(Vec::new(), Vec::new());
    let outcomes = tap_all(
        &mut ctl,
        &[
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleRight,
            Position::MiddleLeft,
            Position::BottomLeft,
            Position::BottomCenter,
            Position::Center,
            Position::BottomRight,
        ],
    );

    assert_eq!(outcomes.last(), Some(&Outcome::Draw));
    assert!(ctl.score_sink().is_empty());
    assert_eq!(ctl.notification_sink(), &vec![Notification::Draw]);
}

#[test]
fn test_reset_game_reports_zero_scores() {
    let mut ctl: Recorder = Controller::new(Vec::new(), Vec::new());
    tap_all(&mut ctl, &X_TOP_ROW);
    ctl.handle(Input::Acknowledge).unwrap();
    ctl.handle(Input::Tap(Position::Center)).unwrap();

    assert_eq!(ctl.handle(Input::ResetGame), Ok(None));

    assert_eq!(ctl.score_sink(), &vec![(1, 0), (0, 0)]);
    assert_eq!(ctl.engine().move_count(), 0);
    assert_eq!(ctl.engine().scores().as_pair(), (0, 0));
}

#[test]
fn test_one_notification_per_round() {
    let mut ctl: Recorder = Controller::new(Vec::new(), Vec::new());
    for _ in 0..3 {
        tap_all(&mut ctl, &X_TOP_ROW);
        ctl.handle(Input::Acknowledge).unwrap();
    }

    assert_eq!(ctl.notification_sink().len(), 3);
    assert_eq!(ctl.score_sink(), &vec![(1, 0), (2, 0), (3, 0)]);
}

//! Tests for the negamax search engine.

use strictly_negamax::{CanonicalState, Color, Player, Position, WIN_SCORE, best_move, negamax};

fn state(s: &str) -> CanonicalState {
    s.parse().expect("valid snapshot")
}

#[test]
fn test_empty_board_is_a_draw_for_both_sides() {
    let mut s = state("000000000");
    assert_eq!(negamax(&mut s, Color::Negative), 0);
    assert_eq!(negamax(&mut s, Color::Positive), 0);
    assert_eq!(s, CanonicalState::empty());
}

#[test]
fn test_best_move_on_empty_board() {
    let outcome = best_move(&CanonicalState::empty(), Player::First);
    // Every opening draws, so the first cell scanned is kept
    assert_eq!(outcome.best(), Some(Position::TopLeft));
    assert_eq!(outcome.score(), Some(0));
    assert_eq!(outcome.stats().max_depth, 9);
}

#[test]
fn test_takes_immediate_win() {
    // X holds 2 and 5, O holds 0 and 4; both need cell 8.
    // Every other cell hands O the diagonal.
    let outcome = best_move(&state("201021000"), Player::First);
    assert_eq!(outcome.best(), Some(Position::BottomRight));
    assert_eq!(outcome.score(), Some(WIN_SCORE));
}

#[test]
fn test_takes_immediate_win_for_either_side() {
    let outcome = best_move(&state("110020000"), Player::First);
    assert_eq!(outcome.best(), Some(Position::TopRight));
    assert_eq!(outcome.score(), Some(WIN_SCORE));

    let outcome = best_move(&state("100022110"), Player::Second);
    assert_eq!(outcome.best(), Some(Position::MiddleLeft));
    assert_eq!(outcome.score(), Some(WIN_SCORE));
}

#[test]
fn test_blocks_two_in_a_row() {
    let outcome = best_move(&state("110020000"), Player::Second);
    assert_eq!(outcome.best(), Some(Position::TopRight));
}

#[test]
fn test_blocks_when_block_is_last_in_scan_order() {
    // X threatens the bottom row; O has no win of its own
    let outcome = best_move(&state("000020110"), Player::Second);
    assert_eq!(outcome.best(), Some(Position::BottomRight));
    assert_eq!(outcome.score(), Some(0));
}

#[test]
fn test_full_board_has_no_move() {
    let s = state("111222111");
    let outcome = best_move(&s, Player::Second);
    assert_eq!(outcome.best(), None);
    assert_eq!(outcome.score(), None);
    assert_eq!(outcome.state(), &s);
}

#[test]
fn test_search_leaves_input_unchanged() {
    let mut s = state("100020000");
    let before = s;
    let _ = negamax(&mut s, Color::Negative);
    assert_eq!(s, before);

    let outcome = best_move(&s, Player::First);
    assert_eq!(outcome.state(), &before);
    assert_eq!(s, before);
}

#[test]
fn test_search_is_deterministic() {
    let s = state("100000000");
    let a = best_move(&s, Player::Second);
    let b = best_move(&s, Player::Second);
    assert_eq!(a, b);
    // Only the center avoids a forced loss against a corner opening
    assert_eq!(a.best(), Some(Position::Center));
    assert_eq!(a.score(), Some(0));
}

#[test]
fn test_lost_position_scores_negative() {
    // X threatens cells 2, 7 and 8; O can cover only one
    let outcome = best_move(&state("110210200"), Player::Second);
    assert_eq!(outcome.score(), Some(-WIN_SCORE));
    assert!(outcome.best().is_some());
}

#[test]
fn test_outcome_serializes_to_json() {
    let outcome = best_move(&state("110020000"), Player::Second);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["state"], "110020000");
    assert_eq!(json["player"], "second");
    assert_eq!(json["best"], "TopRight");
}

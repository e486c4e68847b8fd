use rust_decimal::Decimal;
use time::ext::NumericalDuration;

use crate::domain::clock;
use crate::domain::game::{GameStatus, Side};
use crate::domain::test_helpers::{make_active_game, make_waiting_game, T0};
use crate::errors::domain::DomainError;

#[test]
fn only_the_mover_clock_runs() {
    let game = make_active_game(600, Decimal::ZERO);
    let now = T0 + 45.seconds();

    // white to move: their clock drains, black's is frozen
    assert_eq!(clock::remaining_now(&game, Side::White, now), 555);
    assert_eq!(clock::remaining_now(&game, Side::Black, now), 600);
}

#[test]
fn remaining_clamps_at_zero() {
    let game = make_active_game(600, Decimal::ZERO);
    let now = T0 + 4000.seconds();
    assert_eq!(clock::remaining_now(&game, Side::White, now), 0);
}

#[test]
fn fresh_match_is_not_expired() {
    let game = make_active_game(600, Decimal::ZERO);
    assert!(!clock::is_expired(&game, T0 + 1.seconds()));
}

#[test]
fn expiry_when_elapsed_reaches_the_budget() {
    let game = make_active_game(600, Decimal::ZERO);
    assert!(!clock::is_expired(&game, T0 + 599.seconds()));
    assert!(clock::is_expired(&game, T0 + 600.seconds()));
    assert!(clock::is_expired(&game, T0 + 601.seconds()));
}

#[test]
fn stored_zero_is_expired_immediately() {
    let mut game = make_active_game(600, Decimal::ZERO);
    game.set_remaining(Side::White, 0);
    assert!(clock::is_expired(&game, T0));
}

#[test]
fn non_active_matches_never_expire() {
    let waiting = make_waiting_game(600, Decimal::ZERO);
    assert!(!clock::is_expired(&waiting, T0 + 9999.seconds()));

    let mut completed = make_active_game(600, Decimal::ZERO);
    completed.status = GameStatus::Completed;
    assert!(!clock::is_expired(&completed, T0 + 9999.seconds()));
}

#[test]
fn claim_bounds_are_inclusive() {
    clock::validate_claim(0, 600).unwrap();
    clock::validate_claim(600, 600).unwrap();

    assert_eq!(
        clock::validate_claim(601, 600).unwrap_err(),
        DomainError::InvalidClockClaim {
            claimed: 601,
            bound: 600
        }
    );
    assert_eq!(
        clock::validate_claim(-1, 600).unwrap_err(),
        DomainError::InvalidClockClaim {
            claimed: -1,
            bound: 600
        }
    );
}

#[test]
fn view_reports_the_side_to_move_only_while_active() {
    let waiting = make_waiting_game(600, Decimal::ZERO);
    let view = clock::view(&waiting, T0);
    assert_eq!(view.side_to_move, None);
    assert!(!view.expired);

    let active = make_active_game(600, Decimal::ZERO);
    let view = clock::view(&active, T0 + 10.seconds());
    assert_eq!(view.side_to_move, Some(Side::White));
    assert_eq!(view.remaining_white, 590);
    assert_eq!(view.remaining_black, 600);
}

use rust_decimal::Decimal;
use time::ext::NumericalDuration;

use crate::domain::game::{GameOutcome, GameStatus, Side};
use crate::domain::oracle::{MoveVerdict, TerminalOutcome, TerminalReport};
use crate::domain::test_helpers::{make_active_game, make_waiting_game, T0};
use crate::domain::transitions;
use crate::errors::domain::DomainError;

#[test]
fn join_seats_second_participant_and_opens_play() {
    let mut game = make_waiting_game(600, Decimal::ZERO);

    transitions::join(&mut game, "bob", T0).unwrap();

    assert_eq!(game.status, GameStatus::Active);
    assert_eq!(game.black_id.as_deref(), Some("bob"));
    assert_eq!(game.last_action_at, Some(T0));
    assert_eq!(game.outcome, GameOutcome::Ongoing);
}

#[test]
fn join_twice_is_an_invalid_transition() {
    let mut game = make_active_game(600, Decimal::ZERO);

    let err = transitions::join(&mut game, "carol", T0).unwrap_err();

    assert!(matches!(err, DomainError::InvalidTransition(_)));
    assert_eq!(game.black_id.as_deref(), Some("bob"));
}

#[test]
fn creator_cannot_join_own_match() {
    let mut game = make_waiting_game(600, Decimal::ZERO);

    let err = transitions::join(&mut game, "alice", T0).unwrap_err();

    assert_eq!(err, DomainError::SelfJoin);
    assert_eq!(game.status, GameStatus::Waiting);
    assert!(game.black_id.is_none());
}

#[test]
fn cancel_is_creator_only_and_waiting_only() {
    let mut game = make_waiting_game(600, Decimal::ZERO);
    let err = transitions::cancel(&mut game, "bob").unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
    assert_eq!(game.status, GameStatus::Waiting);

    transitions::cancel(&mut game, "alice").unwrap();
    assert_eq!(game.status, GameStatus::Cancelled);
    assert_eq!(game.outcome, GameOutcome::Ongoing);

    let mut active = make_active_game(600, Decimal::ZERO);
    let err = transitions::cancel(&mut active, "alice").unwrap_err();
    assert!(matches!(err, DomainError::InvalidTransition(_)));
}

#[test]
fn turn_parity_follows_the_move_counter() {
    let mut game = make_active_game(600, Decimal::ZERO);

    assert_eq!(transitions::ensure_mover(&game, "alice").unwrap(), Side::White);
    assert_eq!(
        transitions::ensure_mover(&game, "bob").unwrap_err(),
        DomainError::OutOfTurn {
            expected: Side::White
        }
    );

    game.move_count = 1;
    assert_eq!(transitions::ensure_mover(&game, "bob").unwrap(), Side::Black);
    assert_eq!(
        transitions::ensure_mover(&game, "alice").unwrap_err(),
        DomainError::OutOfTurn {
            expected: Side::Black
        }
    );
}

#[test]
fn non_participant_is_out_of_turn() {
    let game = make_active_game(600, Decimal::ZERO);
    let err = transitions::ensure_mover(&game, "mallory").unwrap_err();
    assert!(matches!(err, DomainError::OutOfTurn { .. }));
}

#[test]
fn moves_are_rejected_outside_active_play() {
    let waiting = make_waiting_game(600, Decimal::ZERO);
    assert_eq!(
        transitions::ensure_mover(&waiting, "alice").unwrap_err(),
        DomainError::NotActive
    );

    let mut completed = make_active_game(600, Decimal::ZERO);
    completed.status = GameStatus::Completed;
    assert_eq!(
        transitions::ensure_mover(&completed, "alice").unwrap_err(),
        DomainError::NotActive
    );
}

#[test]
fn accepted_moves_get_contiguous_sequence_numbers() {
    let mut game = make_active_game(600, Decimal::ZERO);

    for (i, (side, notation, position)) in [
        (Side::White, "a1", "X--------"),
        (Side::Black, "b2", "X---O----"),
        (Side::White, "b1", "XX--O----"),
    ]
    .into_iter()
    .enumerate()
    {
        let verdict = MoveVerdict {
            position: position.to_string(),
            terminal: None,
        };
        let now = T0 + ((i + 1) as i64).seconds();
        let record =
            transitions::apply_accepted_move(&mut game, side, notation, &verdict, 590, now)
                .unwrap();

        assert_eq!(record.seq, i as u32 + 1);
        assert_eq!(record.notation, notation);
        assert_eq!(record.position, position);
        assert_eq!(game.position, position);
        assert_eq!(game.move_count, i as u32 + 1);
        assert_eq!(game.last_action_at, Some(now));
    }

    assert_eq!(game.remaining_white, 590);
    assert_eq!(game.remaining_black, 590);
}

#[test]
fn clock_claim_above_stored_bound_leaves_match_untouched() {
    let mut game = make_active_game(600, Decimal::ZERO);
    let before = game.clone();

    let verdict = MoveVerdict {
        position: "X--------".to_string(),
        terminal: None,
    };
    let err =
        transitions::apply_accepted_move(&mut game, Side::White, "a1", &verdict, 601, T0)
            .unwrap_err();

    assert_eq!(
        err,
        DomainError::InvalidClockClaim {
            claimed: 601,
            bound: 600
        }
    );
    assert_eq!(game.move_count, before.move_count);
    assert_eq!(game.position, before.position);
    assert_eq!(game.remaining_white, before.remaining_white);
    assert_eq!(game.last_action_at, before.last_action_at);
}

#[test]
fn negative_clock_claim_is_rejected() {
    let mut game = make_active_game(600, Decimal::ZERO);
    let verdict = MoveVerdict {
        position: "X--------".to_string(),
        terminal: None,
    };
    let err =
        transitions::apply_accepted_move(&mut game, Side::White, "a1", &verdict, -1, T0)
            .unwrap_err();
    assert!(matches!(err, DomainError::InvalidClockClaim { .. }));
}

#[test]
fn terminal_verdict_completes_the_match() {
    let mut game = make_active_game(600, Decimal::ZERO);
    game.move_count = 4; // white to move

    let verdict = MoveVerdict {
        position: "XXX-OO---".to_string(),
        terminal: Some(TerminalReport {
            outcome: TerminalOutcome::Decisive {
                winner: Side::White,
            },
            reason: "three in a row".to_string(),
        }),
    };
    let now = T0 + 30.seconds();
    transitions::apply_accepted_move(&mut game, Side::White, "c1", &verdict, 500, now).unwrap();

    assert_eq!(game.status, GameStatus::Completed);
    assert_eq!(game.outcome, GameOutcome::WhiteWins);
    assert_eq!(game.completed_at, Some(now));
}

#[test]
fn draw_verdict_completes_the_match_drawn() {
    let mut game = make_active_game(600, Decimal::ZERO);
    let verdict = MoveVerdict {
        position: "XOXXOOOXX".to_string(),
        terminal: Some(TerminalReport {
            outcome: TerminalOutcome::Draw,
            reason: "board full".to_string(),
        }),
    };
    transitions::apply_accepted_move(&mut game, Side::White, "c3", &verdict, 10, T0).unwrap();

    assert_eq!(game.status, GameStatus::Completed);
    assert_eq!(game.outcome, GameOutcome::Draw);
}

#[test]
fn timeout_charges_the_side_to_move() {
    let mut game = make_active_game(600, Decimal::ZERO);
    let now = T0 + 601.seconds();

    let outcome = transitions::force_timeout(&mut game, now);

    assert_eq!(outcome, GameOutcome::BlackWins);
    assert_eq!(game.status, GameStatus::Completed);
    assert_eq!(game.remaining_white, 0);
    assert_eq!(game.completed_at, Some(now));
}

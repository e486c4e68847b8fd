use rust_decimal::Decimal;

use crate::domain::game::{GameOutcome, GameStatus};
use crate::domain::rating::{
    apply_delta, compute_deltas, expected_score, settlement, RATING_FLOOR,
};
use crate::domain::test_helpers::{make_active_game, make_user, T0};
use crate::domain::transitions;

#[test]
fn equal_ratings_give_even_expectations() {
    let expected = expected_score(1200, 1200);
    assert!((expected - 0.5).abs() < f64::EPSILON);
}

#[test]
fn equal_ratings_decisive_moves_sixteen_points() {
    assert_eq!(compute_deltas(1200, 1200, GameOutcome::WhiteWins), (16, -16));
    assert_eq!(compute_deltas(1200, 1200, GameOutcome::BlackWins), (-16, 16));
}

#[test]
fn equal_ratings_draw_moves_nothing() {
    assert_eq!(compute_deltas(1200, 1200, GameOutcome::Draw), (0, 0));
}

#[test]
fn favorite_gains_less_than_underdog() {
    // 1400 beats 1200: small reward for the favorite
    assert_eq!(compute_deltas(1400, 1200, GameOutcome::WhiteWins), (8, -8));
    // 1400 loses to 1200: big swing toward the underdog
    assert_eq!(compute_deltas(1400, 1200, GameOutcome::BlackWins), (-24, 24));
}

#[test]
fn ongoing_outcome_yields_zero_deltas() {
    assert_eq!(compute_deltas(1400, 1200, GameOutcome::Ongoing), (0, 0));
}

#[test]
fn rating_never_drops_below_the_floor() {
    assert_eq!(apply_delta(100, -16), RATING_FLOOR);
    assert_eq!(apply_delta(110, -16), RATING_FLOOR);
    assert_eq!(apply_delta(116, -16), RATING_FLOOR);
    assert_eq!(apply_delta(117, -16), 101);
}

#[test]
fn staked_decisive_settlement_pays_the_winner_the_pot() {
    let wager = Decimal::new(15, 1); // 1.5
    let mut game = make_active_game(600, wager);
    game.status = GameStatus::Completed;
    game.outcome = GameOutcome::WhiteWins;

    let (white, black) = settlement(&game, 1200, 1200);

    assert_eq!(white.rating_delta, 16);
    assert_eq!(black.rating_delta, -16);
    assert_eq!((white.wins, white.losses, white.draws), (1, 0, 0));
    assert_eq!((black.wins, black.losses, black.draws), (0, 1, 0));
    assert_eq!(white.wagered, wager);
    assert_eq!(black.wagered, wager);
    assert_eq!(white.won, Decimal::from(3));
    assert_eq!(black.won, Decimal::ZERO);
}

#[test]
fn staked_draw_pays_nobody() {
    let wager = Decimal::from(2);
    let mut game = make_active_game(600, wager);
    game.status = GameStatus::Completed;
    game.outcome = GameOutcome::Draw;

    let (white, black) = settlement(&game, 1300, 1100);

    assert_eq!((white.wins, white.losses, white.draws), (0, 0, 1));
    assert_eq!((black.wins, black.losses, black.draws), (0, 0, 1));
    assert_eq!(white.won, Decimal::ZERO);
    assert_eq!(black.won, Decimal::ZERO);
    assert_eq!(white.wagered, wager);
    assert_eq!(black.wagered, wager);
}

#[test]
fn unstaked_settlement_moves_no_money() {
    let mut game = make_active_game(600, Decimal::ZERO);
    game.status = GameStatus::Completed;
    game.outcome = GameOutcome::BlackWins;

    let (white, black) = settlement(&game, 1200, 1200);

    assert_eq!(white.wagered, Decimal::ZERO);
    assert_eq!(white.won, Decimal::ZERO);
    assert_eq!(black.wagered, Decimal::ZERO);
    assert_eq!(black.won, Decimal::ZERO);
}

#[test]
fn settlement_counters_cover_exactly_one_game() {
    for outcome in [
        GameOutcome::WhiteWins,
        GameOutcome::BlackWins,
        GameOutcome::Draw,
    ] {
        let mut game = make_active_game(600, Decimal::ONE);
        game.status = GameStatus::Completed;
        game.outcome = outcome;

        let (white, black) = settlement(&game, 1200, 1200);
        assert_eq!(white.wins + white.losses + white.draws, 1, "{outcome:?}");
        assert_eq!(black.wins + black.losses + black.draws, 1, "{outcome:?}");
    }
}

#[test]
fn applied_settlement_keeps_counter_invariant() {
    let mut alice = make_user("alice");
    let mut bob = make_user("bob");

    let mut game = make_active_game(600, Decimal::ONE);
    transitions::force_timeout(&mut game, T0);
    assert_eq!(game.outcome, GameOutcome::BlackWins);

    let (white, black) = settlement(&game, alice.rating, bob.rating);
    alice.apply(&white, T0);
    bob.apply(&black, T0);

    assert_eq!(alice.wins + alice.losses + alice.draws, alice.games_played);
    assert_eq!(bob.wins + bob.losses + bob.draws, bob.games_played);
    assert_eq!(alice.rating, 1184);
    assert_eq!(bob.rating, 1216);
}

//! Logistic expected-score rating updates and post-match settlement math.

use rust_decimal::Decimal;

use crate::domain::game::{Game, GameOutcome, Side};

/// Rating every participant starts from.
pub const INITIAL_RATING: i32 = 1200;

/// Ratings never drop below this floor, regardless of delta magnitude.
pub const RATING_FLOOR: i32 = 100;

/// Fixed K-factor for rating adjustments.
pub const K_FACTOR: f64 = 32.0;

/// Expected score for a player rated `rating` against `opponent`.
pub fn expected_score(rating: i32, opponent: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf(f64::from(opponent - rating) / 400.0))
}

/// Rating deltas for the two sides of a completed match.
///
/// Actual scores are 1 / 0 / 0.5 for win / loss / draw. An `Ongoing` outcome
/// yields zero deltas; settlement is only ever invoked on terminal matches.
pub fn compute_deltas(rating_white: i32, rating_black: i32, outcome: GameOutcome) -> (i32, i32) {
    let (score_white, score_black) = match outcome {
        GameOutcome::WhiteWins => (1.0, 0.0),
        GameOutcome::BlackWins => (0.0, 1.0),
        GameOutcome::Draw => (0.5, 0.5),
        GameOutcome::Ongoing => return (0, 0),
    };

    let delta = |rating: i32, opponent: i32, score: f64| {
        (K_FACTOR * (score - expected_score(rating, opponent))).round() as i32
    };

    (
        delta(rating_white, rating_black, score_white),
        delta(rating_black, rating_white, score_black),
    )
}

/// Apply a delta with the floor clamp.
pub fn apply_delta(rating: i32, delta: i32) -> i32 {
    (rating + delta).max(RATING_FLOOR)
}

/// Per-participant record of everything settlement changes.
///
/// Exactly one of `wins` / `losses` / `draws` is 1 for a terminal match; the
/// monetary fields are exact decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsUpdate {
    pub rating_delta: i32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub wagered: Decimal,
    pub won: Decimal,
}

/// Build the two stat updates for a terminal match.
///
/// The stake accrues to both sides' wagered totals (a no-op for unstaked
/// matches, where it is zero); only a staked, decisive winner collects twice
/// the stake into the won total.
pub fn settlement(game: &Game, rating_white: i32, rating_black: i32) -> (StatsUpdate, StatsUpdate) {
    let (delta_white, delta_black) = compute_deltas(rating_white, rating_black, game.outcome);
    let winner = game.outcome.winner();
    let pot = game.wager_amount * Decimal::TWO;

    let update = |side: Side, rating_delta: i32| StatsUpdate {
        rating_delta,
        wins: u32::from(winner == Some(side)),
        losses: u32::from(winner == Some(side.opponent())),
        draws: u32::from(game.outcome == GameOutcome::Draw),
        wagered: game.wager_amount,
        won: if game.staked && winner == Some(side) {
            pot
        } else {
            Decimal::ZERO
        },
    };

    (
        update(Side::White, delta_white),
        update(Side::Black, delta_black),
    )
}

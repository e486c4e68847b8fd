//! Lazy countdown semantics for the per-side match clocks.
//!
//! No background timers run. Only the side to move has a logically running
//! clock; the waiting side's value is frozen. Expiry is evaluated at the
//! moment of the next submission or an explicit poll, by comparing the stored
//! remaining time of the side to move against wall-clock elapsed since the
//! last accepted action.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::game::{Game, GameStatus, Side};
use crate::errors::domain::DomainError;

/// Whole seconds since the last accepted action (0 before any action).
pub fn elapsed_secs(game: &Game, now: OffsetDateTime) -> i64 {
    game.last_action_at
        .map(|at| (now - at).whole_seconds().max(0))
        .unwrap_or(0)
}

/// Remaining time for `side` as of `now`.
///
/// For the side to move of an active match this is the stored value minus
/// elapsed wall-clock time, clamped at zero; for everyone else it is the
/// stored (frozen) value.
pub fn remaining_now(game: &Game, side: Side, now: OffsetDateTime) -> i64 {
    let stored = game.remaining_for(side);
    if game.status == GameStatus::Active && side == game.side_to_move() {
        (stored - elapsed_secs(game, now)).max(0)
    } else {
        stored
    }
}

/// Whether the side to move has run out of time.
///
/// Always false for non-active matches. A true result obliges the caller to
/// force the match to completion with the waiting side credited the win.
pub fn is_expired(game: &Game, now: OffsetDateTime) -> bool {
    game.status == GameStatus::Active
        && game.remaining_for(game.side_to_move()) - elapsed_secs(game, now) <= 0
}

/// Bounds-check a client-reported remaining time against the stored value.
///
/// The claim may never exceed the previously stored remaining time and may
/// never be negative.
pub fn validate_claim(claimed: i64, stored: i64) -> Result<(), DomainError> {
    if claimed < 0 || claimed > stored {
        return Err(DomainError::InvalidClockClaim {
            claimed,
            bound: stored,
        });
    }
    Ok(())
}

/// Read-only view of both clocks as of one instant.
#[derive(Debug, Clone, Serialize)]
pub struct ClockView {
    pub side_to_move: Option<Side>,
    pub remaining_white: i64,
    pub remaining_black: i64,
    pub expired: bool,
}

pub fn view(game: &Game, now: OffsetDateTime) -> ClockView {
    ClockView {
        side_to_move: (game.status == GameStatus::Active).then(|| game.side_to_move()),
        remaining_white: remaining_now(game, Side::White, now),
        remaining_black: remaining_now(game, Side::Black, now),
        expired: is_expired(game, now),
    }
}

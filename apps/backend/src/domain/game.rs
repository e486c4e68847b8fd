//! Match container types shared by the state machine, services, and store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One of the two roles in a match.
///
/// The creator always holds [`Side::White`] and moves first; the joining
/// participant holds [`Side::Black`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Lifecycle status of a match.
///
/// Status only moves forward: Waiting → Active → Completed, or
/// Waiting → Cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Waiting,
    Active,
    Completed,
    Cancelled,
}

/// Final result of a match. `Ongoing` exactly while status is Waiting or
/// Active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Ongoing,
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameOutcome {
    pub fn win_for(side: Side) -> GameOutcome {
        match side {
            Side::White => GameOutcome::WhiteWins,
            Side::Black => GameOutcome::BlackWins,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::WhiteWins => Some(Side::White),
            GameOutcome::BlackWins => Some(Side::Black),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }
}

/// One complete contest between two participants, from creation to terminal.
///
/// The position encoding is opaque to the core; it is produced and consumed
/// only by the rules oracle. `remaining_white` / `remaining_black` are stored
/// seconds; the live value for the side to move is derived lazily from
/// `last_action_at` (see [`crate::domain::clock`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub white_id: String,
    pub black_id: Option<String>,
    pub status: GameStatus,
    pub outcome: GameOutcome,
    pub position: String,
    pub move_count: u32,
    pub time_budget: i64,
    pub remaining_white: i64,
    pub remaining_black: i64,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_action_at: Option<OffsetDateTime>,
    pub wager_amount: Decimal,
    pub wager_currency: String,
    pub staked: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
}

impl Game {
    /// A fresh match in `Waiting`, both clocks at the full budget.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: String,
        white_id: String,
        time_budget: i64,
        wager_amount: Decimal,
        wager_currency: String,
        position: String,
        now: OffsetDateTime,
    ) -> Self {
        let staked = wager_amount > Decimal::ZERO;
        Self {
            id,
            white_id,
            black_id: None,
            status: GameStatus::Waiting,
            outcome: GameOutcome::Ongoing,
            position,
            move_count: 0,
            time_budget,
            remaining_white: time_budget,
            remaining_black: time_budget,
            last_action_at: None,
            wager_amount,
            wager_currency,
            staked,
            created_at: now,
            completed_at: None,
        }
    }

    /// Which side a participant occupies, if any.
    pub fn side_of(&self, user_id: &str) -> Option<Side> {
        if self.white_id == user_id {
            Some(Side::White)
        } else if self.black_id.as_deref() == Some(user_id) {
            Some(Side::Black)
        } else {
            None
        }
    }

    /// Participant occupying a side, if seated.
    pub fn user_for(&self, side: Side) -> Option<&str> {
        match side {
            Side::White => Some(self.white_id.as_str()),
            Side::Black => self.black_id.as_deref(),
        }
    }

    /// The side whose turn it is, derived from the accepted move counter.
    pub fn side_to_move(&self) -> Side {
        if self.move_count % 2 == 0 {
            Side::White
        } else {
            Side::Black
        }
    }

    /// Stored remaining seconds for a side (frozen value, not the live one).
    pub fn remaining_for(&self, side: Side) -> i64 {
        match side {
            Side::White => self.remaining_white,
            Side::Black => self.remaining_black,
        }
    }

    pub fn set_remaining(&mut self, side: Side, seconds: i64) {
        match side {
            Side::White => self.remaining_white = seconds,
            Side::Black => self.remaining_black = seconds,
        }
    }
}

/// Immutable record of one accepted move.
///
/// Sequence numbers are 1-based and contiguous for a match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    pub game_id: String,
    pub seq: u32,
    pub notation: String,
    pub position: String,
    pub remaining_time: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

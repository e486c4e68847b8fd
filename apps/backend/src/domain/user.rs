//! Participant record and settlement application.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::rating::{self, StatsUpdate, INITIAL_RATING};

/// A registered participant.
///
/// Monetary totals are exact decimals and serialize as strings. The counter
/// invariant `wins + losses + draws == games_played` holds after every
/// committed settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub wallet_address: String,
    pub username: String,
    pub rating: i32,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total_wagered: Decimal,
    pub total_won: Decimal,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl User {
    pub fn new(id: String, wallet_address: String, username: String, now: OffsetDateTime) -> Self {
        Self {
            id,
            wallet_address,
            username,
            rating: INITIAL_RATING,
            games_played: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            total_wagered: Decimal::ZERO,
            total_won: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Win rate as a percentage with two decimal places.
    pub fn win_rate(&self) -> Decimal {
        if self.games_played == 0 {
            return Decimal::ZERO;
        }
        (Decimal::from(self.wins) * Decimal::ONE_HUNDRED / Decimal::from(self.games_played))
            .round_dp(2)
    }

    /// Apply one settlement update.
    ///
    /// Counters and totals move together: the games-played counter is the sum
    /// of the per-result increments, so the counter invariant holds at every
    /// commit.
    pub fn apply(&mut self, update: &StatsUpdate, now: OffsetDateTime) {
        self.rating = rating::apply_delta(self.rating, update.rating_delta);
        self.games_played += update.wins + update.losses + update.draws;
        self.wins += update.wins;
        self.losses += update.losses;
        self.draws += update.draws;
        self.total_wagered += update.wagered;
        self.total_won += update.won;
        self.updated_at = now;
        debug_assert_eq!(self.wins + self.losses + self.draws, self.games_played);
    }
}

//! Match flow orchestration: the authoritative owner of match state.
//!
//! Every mutating operation on a match — join, cancel, move submission, and
//! clock polls — serializes on a per-match async mutex, so exactly one
//! submission is in flight per match at a time. A submission that loses the
//! race is re-evaluated against the state its winner produced, never applied
//! to a stale snapshot. Distinct matches proceed fully in parallel.
//!
//! Mutations are staged on an owned copy of the match and persisted only
//! after every check has passed; a typed failure therefore leaves the stored
//! match exactly as it was. The one exception is a clock expiry, which
//! commits the forced terminal state before reporting `ClockExpired`.

use std::sync::Arc;

use dashmap::DashMap;
use rust_decimal::Decimal;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use ulid::Ulid;

use crate::config::settings::{MatchSettings, DEFAULT_WAGER_CURRENCY};
use crate::domain::clock::{self, ClockView};
use crate::domain::game::{Game, GameStatus, MoveRecord};
use crate::domain::oracle::RulesOracle;
use crate::domain::{rating, transitions};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::services::leaderboard::LeaderboardService;
use crate::store::Storage;

/// Snapshot returned by a clock poll.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ClockPoll {
    pub game: Game,
    pub clock: ClockView,
}

pub struct GameFlowService {
    store: Arc<dyn Storage>,
    oracle: Arc<dyn RulesOracle>,
    leaderboard: Arc<LeaderboardService>,
    settings: MatchSettings,
    // per-match exclusive-access units; entries live for the match's lifetime
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl GameFlowService {
    pub fn new(
        store: Arc<dyn Storage>,
        oracle: Arc<dyn RulesOracle>,
        leaderboard: Arc<LeaderboardService>,
        settings: MatchSettings,
    ) -> Self {
        Self {
            store,
            oracle,
            leaderboard,
            settings,
            locks: DashMap::new(),
        }
    }

    fn lock_for(&self, game_id: &str) -> Arc<Mutex<()>> {
        self.locks
            .entry(game_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    async fn require_game(&self, game_id: &str) -> Result<Game, AppError> {
        self.store.game_by_id(game_id).await?.ok_or_else(|| {
            AppError::from(DomainError::not_found(
                NotFoundKind::Match,
                format!("match {game_id} not found"),
            ))
        })
    }

    async fn require_user(&self, user_id: &str) -> Result<(), AppError> {
        if self.store.user_by_id(user_id).await?.is_none() {
            return Err(DomainError::not_found(
                NotFoundKind::User,
                format!("user {user_id} not found"),
            )
            .into());
        }
        Ok(())
    }

    /// Open a match with the caller seated as the first mover.
    ///
    /// The time budget must sit within the configured bounds and the wager
    /// must not be negative; both clocks start at the full budget.
    pub async fn create(
        &self,
        white_id: &str,
        time_budget: Option<i64>,
        wager_amount: Option<Decimal>,
        wager_currency: Option<String>,
    ) -> Result<Game, AppError> {
        self.require_user(white_id).await?;

        let budget = time_budget.unwrap_or(self.settings.default_time_budget);
        if !(self.settings.min_time_budget..=self.settings.max_time_budget).contains(&budget) {
            return Err(DomainError::validation(format!(
                "time budget must be between {} and {} seconds",
                self.settings.min_time_budget, self.settings.max_time_budget
            ))
            .into());
        }

        let wager = wager_amount.unwrap_or(Decimal::ZERO);
        if wager < Decimal::ZERO {
            return Err(DomainError::validation("wager amount must not be negative").into());
        }

        let game = Game::create(
            Ulid::new().to_string(),
            white_id.to_string(),
            budget,
            wager,
            wager_currency.unwrap_or_else(|| DEFAULT_WAGER_CURRENCY.to_string()),
            self.oracle.initial_position(),
            OffsetDateTime::now_utc(),
        );
        let game = self.store.insert_game(game).await?;

        info!(
            game_id = %game.id,
            white_id,
            time_budget = budget,
            staked = game.staked,
            "match created"
        );
        Ok(game)
    }

    /// Seat the second participant and start play.
    pub async fn join(&self, game_id: &str, user_id: &str) -> Result<Game, AppError> {
        let lock = self.lock_for(game_id);
        let _guard = lock.lock().await;

        self.require_user(user_id).await?;
        let mut game = self.require_game(game_id).await?;
        transitions::join(&mut game, user_id, OffsetDateTime::now_utc())?;
        let game = self.store.save_game(game).await?;

        info!(game_id = %game.id, black_id = user_id, "match joined");
        Ok(game)
    }

    /// Creator-only cancellation before anyone joins.
    ///
    /// Cancelled matches never settle and never touch counters.
    pub async fn cancel(&self, game_id: &str, user_id: &str) -> Result<Game, AppError> {
        let lock = self.lock_for(game_id);
        let _guard = lock.lock().await;

        let mut game = self.require_game(game_id).await?;
        transitions::cancel(&mut game, user_id)?;
        let game = self.store.save_game(game).await?;

        info!(game_id = %game.id, "match cancelled");
        Ok(game)
    }

    /// Submit a move for the side whose turn it is.
    ///
    /// Check order: the match must be active; the caller must be the side to
    /// move; the mover's clock must not have run out (an expired clock forces
    /// the match to completion and fails with `ClockExpired` without
    /// consulting the oracle); the oracle must accept the move; and the
    /// claimed remaining time must stay within the stored bound.
    pub async fn submit_move(
        &self,
        game_id: &str,
        user_id: &str,
        notation: &str,
        remaining_time: i64,
    ) -> Result<Game, AppError> {
        let lock = self.lock_for(game_id);
        let _guard = lock.lock().await;

        let mut game = self.require_game(game_id).await?;
        let now = OffsetDateTime::now_utc();

        let mover = transitions::ensure_mover(&game, user_id)?;

        if clock::is_expired(&game, now) {
            transitions::force_timeout(&mut game, now);
            let game = self.store.save_game(game).await?;
            self.settle(&game).await?;
            warn!(
                game_id = %game.id,
                side = ?mover,
                outcome = ?game.outcome,
                "clock expired; match forced to completion"
            );
            return Err(DomainError::ClockExpired { side: mover }.into());
        }

        let verdict = self.oracle.validate(&game.position, notation)?;
        let record =
            transitions::apply_accepted_move(&mut game, mover, notation, &verdict, remaining_time, now)?;

        let game = self.store.save_game(game).await?;
        self.store.append_move(record).await?;
        debug!(game_id = %game.id, seq = game.move_count, notation, "move accepted");

        if game.status == GameStatus::Completed {
            self.settle(&game).await?;
            info!(game_id = %game.id, outcome = ?game.outcome, "match completed");
        }

        Ok(game)
    }

    /// Read both clocks, forcing termination if the mover's flag has fallen.
    ///
    /// Serialized with move submissions so a poll and a submission can never
    /// both settle the same match.
    pub async fn poll_clock(&self, game_id: &str) -> Result<ClockPoll, AppError> {
        let lock = self.lock_for(game_id);
        let _guard = lock.lock().await;

        let mut game = self.require_game(game_id).await?;
        let now = OffsetDateTime::now_utc();

        let expired = clock::is_expired(&game, now);
        if expired {
            let side = game.side_to_move();
            transitions::force_timeout(&mut game, now);
            game = self.store.save_game(game).await?;
            self.settle(&game).await?;
            warn!(
                game_id = %game.id,
                side = ?side,
                outcome = ?game.outcome,
                "clock expired on poll; match forced to completion"
            );
        }

        let clock = ClockView {
            expired,
            ..clock::view(&game, now)
        };
        Ok(ClockPoll { game, clock })
    }

    pub async fn get(&self, game_id: &str) -> Result<Game, AppError> {
        self.require_game(game_id).await
    }

    pub async fn list_by_status(&self, status: GameStatus) -> Result<Vec<Game>, AppError> {
        Ok(self.store.games_by_status(status).await?)
    }

    pub async fn list_by_participant(&self, user_id: &str) -> Result<Vec<Game>, AppError> {
        Ok(self.store.games_by_participant(user_id).await?)
    }

    pub async fn moves(&self, game_id: &str) -> Result<Vec<MoveRecord>, AppError> {
        self.require_game(game_id).await?;
        Ok(self.store.moves_for_game(game_id).await?)
    }

    /// Apply rating deltas, counters, and wager totals for a terminal match.
    ///
    /// Runs exactly once per match: both callers transition the status from
    /// `Active` to `Completed` under the match lock before invoking it.
    async fn settle(&self, game: &Game) -> Result<(), AppError> {
        let white = self.store.user_by_id(&game.white_id).await?.ok_or_else(|| {
            AppError::internal(format!("settlement: user {} missing", game.white_id))
        })?;
        let black_id = game.black_id.as_deref().ok_or_else(|| {
            AppError::internal(format!("settlement: match {} has no second side", game.id))
        })?;
        let black = self
            .store
            .user_by_id(black_id)
            .await?
            .ok_or_else(|| AppError::internal(format!("settlement: user {black_id} missing")))?;

        let (update_white, update_black) = rating::settlement(game, white.rating, black.rating);
        self.store.apply_user_update(&white.id, &update_white).await?;
        self.store.apply_user_update(&black.id, &update_black).await?;

        info!(
            game_id = %game.id,
            outcome = ?game.outcome,
            delta_white = update_white.rating_delta,
            delta_black = update_black.rating_delta,
            staked = game.staked,
            "match settled"
        );

        self.leaderboard.rebuild().await?;
        Ok(())
    }
}

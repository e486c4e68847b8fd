//! In-memory storage backed by concurrent maps.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use time::OffsetDateTime;

use crate::domain::game::{Game, GameStatus, MoveRecord};
use crate::domain::rating::StatsUpdate;
use crate::domain::user::User;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::store::Storage;

/// Concurrent in-memory store.
///
/// Per-key map guards give each record exclusive access during mutation;
/// cross-record coordination (per-match serialization) is the caller's
/// responsibility.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: DashMap<String, User>,
    // wallet address -> user id; claimed atomically on registration
    wallets: DashMap<String, String>,
    games: DashMap<String, Game>,
    moves: DashMap<String, Vec<MoveRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn create_user(&self, user: User) -> Result<User, DomainError> {
        match self.wallets.entry(user.wallet_address.clone()) {
            Entry::Occupied(_) => Err(DomainError::conflict(
                ConflictKind::WalletTaken,
                format!("wallet {} is already registered", user.wallet_address),
            )),
            Entry::Vacant(slot) => {
                slot.insert(user.id.clone());
                self.users.insert(user.id.clone(), user.clone());
                Ok(user)
            }
        }
    }

    async fn user_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.get(id).map(|u| u.value().clone()))
    }

    async fn user_by_wallet(&self, wallet: &str) -> Result<Option<User>, DomainError> {
        let Some(id) = self.wallets.get(wallet).map(|id| id.value().clone()) else {
            return Ok(None);
        };
        self.user_by_id(&id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let mut users: Vec<User> = self.users.iter().map(|u| u.value().clone()).collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }

    async fn apply_user_update(&self, id: &str, update: &StatsUpdate) -> Result<User, DomainError> {
        let mut entry = self.users.get_mut(id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::User, format!("user {id} not found"))
        })?;
        entry.apply(update, OffsetDateTime::now_utc());
        Ok(entry.value().clone())
    }

    async fn insert_game(&self, game: Game) -> Result<Game, DomainError> {
        self.games.insert(game.id.clone(), game.clone());
        Ok(game)
    }

    async fn game_by_id(&self, id: &str) -> Result<Option<Game>, DomainError> {
        Ok(self.games.get(id).map(|g| g.value().clone()))
    }

    async fn save_game(&self, game: Game) -> Result<Game, DomainError> {
        let mut entry = self.games.get_mut(&game.id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Match, format!("match {} not found", game.id))
        })?;
        *entry = game.clone();
        Ok(game)
    }

    async fn games_by_status(&self, status: GameStatus) -> Result<Vec<Game>, DomainError> {
        let mut games: Vec<Game> = self
            .games
            .iter()
            .filter(|g| g.status == status)
            .map(|g| g.value().clone())
            .collect();
        games.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(games)
    }

    async fn games_by_participant(&self, user_id: &str) -> Result<Vec<Game>, DomainError> {
        let mut games: Vec<Game> = self
            .games
            .iter()
            .filter(|g| g.side_of(user_id).is_some())
            .map(|g| g.value().clone())
            .collect();
        games.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(games)
    }

    async fn append_move(&self, record: MoveRecord) -> Result<MoveRecord, DomainError> {
        self.moves
            .entry(record.game_id.clone())
            .or_default()
            .push(record.clone());
        Ok(record)
    }

    async fn moves_for_game(&self, game_id: &str) -> Result<Vec<MoveRecord>, DomainError> {
        Ok(self
            .moves
            .get(game_id)
            .map(|m| m.value().clone())
            .unwrap_or_default())
    }
}

//! Persistence seam for participants, matches, and move records.
//!
//! The trait mirrors the storage contract the rest of the system is written
//! against: plain CRUD plus an atomic read-modify-write for participant
//! stats. The bundled implementation is in-memory; a durable adapter
//! satisfies the same trait as a drop-in, provided it offers
//! read-your-writes consistency per match.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::domain::game::{Game, GameStatus, MoveRecord};
use crate::domain::rating::StatsUpdate;
use crate::domain::user::User;
use crate::errors::domain::DomainError;

#[async_trait]
pub trait Storage: Send + Sync {
    // Users
    async fn create_user(&self, user: User) -> Result<User, DomainError>;
    async fn user_by_id(&self, id: &str) -> Result<Option<User>, DomainError>;
    async fn user_by_wallet(&self, wallet: &str) -> Result<Option<User>, DomainError>;
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;
    /// Atomically apply a settlement update to one participant.
    ///
    /// Must be a read-modify-write under exclusive access to the record, so
    /// two settlements touching the same participant never lose updates.
    async fn apply_user_update(&self, id: &str, update: &StatsUpdate) -> Result<User, DomainError>;

    // Matches
    async fn insert_game(&self, game: Game) -> Result<Game, DomainError>;
    async fn game_by_id(&self, id: &str) -> Result<Option<Game>, DomainError>;
    /// Replace an existing match wholesale. Fails if the match is unknown.
    async fn save_game(&self, game: Game) -> Result<Game, DomainError>;
    async fn games_by_status(&self, status: GameStatus) -> Result<Vec<Game>, DomainError>;
    async fn games_by_participant(&self, user_id: &str) -> Result<Vec<Game>, DomainError>;

    // Moves
    async fn append_move(&self, record: MoveRecord) -> Result<MoveRecord, DomainError>;
    async fn moves_for_game(&self, game_id: &str) -> Result<Vec<MoveRecord>, DomainError>;
}

//! Participant registration and lookup.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::info;
use ulid::Ulid;

use crate::domain::user::User;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::services::leaderboard::LeaderboardService;
use crate::store::Storage;

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 20;

pub struct UserService {
    store: Arc<dyn Storage>,
    leaderboard: Arc<LeaderboardService>,
}

impl UserService {
    pub fn new(store: Arc<dyn Storage>, leaderboard: Arc<LeaderboardService>) -> Self {
        Self { store, leaderboard }
    }

    /// Register a participant keyed by wallet address.
    ///
    /// Fails with a conflict when the wallet is already registered; the new
    /// participant starts at the baseline rating with zeroed counters.
    pub async fn register(&self, wallet_address: &str, username: &str) -> Result<User, AppError> {
        if wallet_address.trim().is_empty() {
            return Err(DomainError::validation("wallet address must not be empty").into());
        }
        let name_len = username.chars().count();
        if !(USERNAME_MIN..=USERNAME_MAX).contains(&name_len) {
            return Err(DomainError::validation(format!(
                "username must be between {USERNAME_MIN} and {USERNAME_MAX} characters"
            ))
            .into());
        }

        let user = User::new(
            Ulid::new().to_string(),
            wallet_address.to_string(),
            username.to_string(),
            OffsetDateTime::now_utc(),
        );
        let user = self.store.create_user(user).await?;
        self.leaderboard.rebuild().await?;

        info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn by_wallet(&self, wallet_address: &str) -> Result<User, AppError> {
        self.store
            .user_by_wallet(wallet_address)
            .await?
            .ok_or_else(|| {
                AppError::from(DomainError::not_found(
                    NotFoundKind::User,
                    format!("no user registered for wallet {wallet_address}"),
                ))
            })
    }

    pub async fn by_id(&self, id: &str) -> Result<User, AppError> {
        self.store.user_by_id(id).await?.ok_or_else(|| {
            AppError::from(DomainError::not_found(
                NotFoundKind::User,
                format!("user {id} not found"),
            ))
        })
    }

    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.store.list_users().await?)
    }
}

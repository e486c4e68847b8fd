//! Derived ranked index over participant records.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::leaderboard::{self, Category, RankedEntry};
use crate::error::AppError;
use crate::store::Storage;

/// Maintains one ranked view per category.
///
/// The index is a cache over participant state, never a source of truth.
/// Rebuilds rank every category from a single committed snapshot of the
/// participants and swap the whole cache at once, so a concurrent read always
/// observes a view consistent with some prior committed participant state.
pub struct LeaderboardService {
    store: Arc<dyn Storage>,
    cache: RwLock<HashMap<Category, Vec<RankedEntry>>>,
}

impl LeaderboardService {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self {
            store,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Recompute every category from current participant state.
    ///
    /// Invoked after registration and after each settlement. Full re-sort is
    /// deliberate: the externally observable ordering of an incremental
    /// update would have to match it anyway.
    pub async fn rebuild(&self) -> Result<(), AppError> {
        let users = self.store.list_users().await?;

        let mut fresh = HashMap::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            fresh.insert(category, leaderboard::rank_users(&users, category));
        }

        *self.cache.write() = fresh;
        debug!(participants = users.len(), "leaderboard rebuilt");
        Ok(())
    }

    /// Top `limit` entries for a category.
    pub fn top(&self, category: Category, limit: usize) -> Vec<RankedEntry> {
        self.cache
            .read()
            .get(&category)
            .map(|entries| entries.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }
}

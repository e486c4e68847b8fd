//! Application state containing shared resources.

use std::sync::Arc;

use crate::config::settings::MatchSettings;
use crate::domain::oracle::RulesOracle;
use crate::domain::tictactoe::TicTacToeOracle;
use crate::services::game_flow::GameFlowService;
use crate::services::leaderboard::LeaderboardService;
use crate::services::users::UserService;
use crate::store::{MemoryStore, Storage};

/// Shared resources handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub users: Arc<UserService>,
    pub games: Arc<GameFlowService>,
    pub leaderboard: Arc<LeaderboardService>,
}

impl AppState {
    /// Wire the services around a store and a rules oracle.
    pub fn new(
        store: Arc<dyn Storage>,
        oracle: Arc<dyn RulesOracle>,
        settings: MatchSettings,
    ) -> Self {
        let leaderboard = Arc::new(LeaderboardService::new(store.clone()));
        let users = Arc::new(UserService::new(store.clone(), leaderboard.clone()));
        let games = Arc::new(GameFlowService::new(
            store.clone(),
            oracle,
            leaderboard.clone(),
            settings,
        ));
        Self {
            store,
            users,
            games,
            leaderboard,
        }
    }

    /// In-memory state with the embedded rules engine; used by `main` and by
    /// tests.
    pub fn in_memory(settings: MatchSettings) -> Self {
        Self::new(
            Arc::new(MemoryStore::new()),
            Arc::new(TicTacToeOracle::new()),
            settings,
        )
    }
}

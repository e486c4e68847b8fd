//! Shared helpers for route-level integration tests.

// Each test binary compiles this module independently and uses a subset of it.
#![allow(dead_code)]

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use backend::config::settings::MatchSettings;
use backend::domain::{Game, User};
use backend::AppState;
use backend_test_support::unique_helpers::unique_wallet;
use rust_decimal::Decimal;
use serde_json::Value;

#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}

/// Fresh in-memory application state with the embedded rules engine.
pub fn test_state() -> AppState {
    AppState::in_memory(MatchSettings::default())
}

/// Parse a response body as JSON.
pub async fn read_json<B>(resp: ServiceResponse<B>) -> Value
where
    B: MessageBody,
    B::Error: std::fmt::Debug,
{
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body should be valid JSON")
}

/// Register a participant with a unique wallet.
pub async fn register_user(state: &AppState, username: &str) -> User {
    state
        .users
        .register(&unique_wallet("So1"), username)
        .await
        .expect("user registration should succeed")
}

/// Register two participants and open an active match between them.
///
/// Returns (creator, joiner, game); the creator moves first.
pub async fn active_match(state: &AppState, wager: Option<Decimal>) -> (User, User, Game) {
    let white = register_user(state, "alice").await;
    let black = register_user(state, "bob").await;
    let game = state
        .games
        .create(&white.id, Some(600), wager, None)
        .await
        .expect("match creation should succeed");
    let game = state
        .games
        .join(&game.id, &black.id)
        .await
        .expect("join should succeed");
    (white, black, game)
}

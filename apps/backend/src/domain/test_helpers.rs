//! Shared constructors for domain tests.

use rust_decimal::Decimal;
use time::macros::datetime;
use time::OffsetDateTime;

use crate::domain::game::Game;
use crate::domain::transitions;
use crate::domain::user::User;

pub const T0: OffsetDateTime = datetime!(2026-01-01 12:00 UTC);

pub fn make_user(id: &str) -> User {
    User::new(
        id.to_string(),
        format!("wallet-{id}"),
        format!("user-{id}"),
        T0,
    )
}

pub fn make_waiting_game(time_budget: i64, wager: Decimal) -> Game {
    Game::create(
        "m1".to_string(),
        "alice".to_string(),
        time_budget,
        wager,
        "SOL".to_string(),
        "---------".to_string(),
        T0,
    )
}

/// A game with "bob" already seated and play open, last action at [`T0`].
pub fn make_active_game(time_budget: i64, wager: Decimal) -> Game {
    let mut game = make_waiting_game(time_budget, wager);
    transitions::join(&mut game, "bob", T0).expect("join should succeed");
    game
}

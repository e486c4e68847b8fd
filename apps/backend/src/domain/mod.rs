//! Domain layer: pure match, clock, rating, and ranking logic.

pub mod clock;
pub mod game;
pub mod leaderboard;
pub mod oracle;
pub mod rating;
pub mod tictactoe;
pub mod transitions;
pub mod user;

#[cfg(test)]
mod test_helpers;

#[cfg(test)]
mod tests_clock;
#[cfg(test)]
mod tests_rating;
#[cfg(test)]
mod tests_transitions;

// Re-exports for ergonomics
pub use game::{Game, GameOutcome, GameStatus, MoveRecord, Side};
pub use leaderboard::Category;
pub use oracle::{MoveVerdict, RulesOracle, TerminalOutcome, TerminalReport};
pub use rating::StatsUpdate;
pub use tictactoe::TicTacToeOracle;
pub use user::User;

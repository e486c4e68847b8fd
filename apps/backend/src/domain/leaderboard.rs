//! Pure ordering for the ranked index.
//!
//! Rankings are fully derived from participant state: given the same set of
//! users, ranking a category always produces the same sequence. Metrics are
//! compared as exact decimals so ordering never depends on float comparisons.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::user::User;

/// Ranking categories exposed by the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Rating,
    GamesPlayed,
    WinRate,
    TotalWagered,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Rating,
        Category::GamesPlayed,
        Category::WinRate,
        Category::TotalWagered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rating => "rating",
            Category::GamesPlayed => "games_played",
            Category::WinRate => "win_rate",
            Category::TotalWagered => "total_wagered",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "rating" => Some(Category::Rating),
            "games_played" => Some(Category::GamesPlayed),
            "win_rate" => Some(Category::WinRate),
            "total_wagered" => Some(Category::TotalWagered),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a category's ranked view.
///
/// Ranks are dense and 1-based. Entries are a cache, never a source of truth:
/// they must always be recomputable from participant records alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: u32,
    pub user_id: String,
    pub value: String,
}

/// Comparable metric for a user under a category.
pub fn metric(user: &User, category: Category) -> Decimal {
    match category {
        Category::Rating => Decimal::from(user.rating),
        Category::GamesPlayed => Decimal::from(user.games_played),
        Category::WinRate => user.win_rate(),
        Category::TotalWagered => user.total_wagered,
    }
}

/// Display form of a user's metric (win rate always carries two decimals).
pub fn format_metric(user: &User, category: Category) -> String {
    match category {
        Category::WinRate => format!("{:.2}", user.win_rate()),
        _ => metric(user, category).to_string(),
    }
}

/// Rank all users for a category.
///
/// Descending by metric, ties broken by ascending user id so that equal
/// metrics never produce ambiguous ordering.
pub fn rank_users(users: &[User], category: Category) -> Vec<RankedEntry> {
    let mut ordered: Vec<&User> = users.iter().collect();
    ordered.sort_by(|a, b| {
        metric(b, category)
            .cmp(&metric(a, category))
            .then_with(|| a.id.cmp(&b.id))
    });
    ordered
        .into_iter()
        .enumerate()
        .map(|(i, user)| RankedEntry {
            rank: i as u32 + 1,
            user_id: user.id.clone(),
            value: format_metric(user, category),
        })
        .collect()
}

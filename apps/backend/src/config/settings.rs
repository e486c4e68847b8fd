//! Match configuration: time-budget bounds and wager defaults.

/// Currency tag recorded on wagers when the request does not name one.
pub const DEFAULT_WAGER_CURRENCY: &str = "SOL";

/// Bounds and defaults for per-side time budgets, in seconds.
#[derive(Debug, Clone, Copy)]
pub struct MatchSettings {
    pub min_time_budget: i64,
    pub max_time_budget: i64,
    pub default_time_budget: i64,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            min_time_budget: 60,
            max_time_budget: 3600,
            default_time_budget: 600,
        }
    }
}

impl MatchSettings {
    /// Read settings from the environment, falling back to defaults.
    ///
    /// Variables (all in seconds): `MATCH_TIME_BUDGET_MIN`,
    /// `MATCH_TIME_BUDGET_MAX`, `MATCH_TIME_BUDGET_DEFAULT`. Unparseable
    /// values fall back silently to the defaults.
    pub fn from_env() -> Self {
        fn env_i64(key: &str, fallback: i64) -> i64 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(fallback)
        }

        let defaults = Self::default();
        Self {
            min_time_budget: env_i64("MATCH_TIME_BUDGET_MIN", defaults.min_time_budget),
            max_time_budget: env_i64("MATCH_TIME_BUDGET_MAX", defaults.max_time_budget),
            default_time_budget: env_i64("MATCH_TIME_BUDGET_DEFAULT", defaults.default_time_budget),
        }
    }
}

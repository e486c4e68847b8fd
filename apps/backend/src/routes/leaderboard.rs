//! Ranked index routes.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::domain::leaderboard::Category;
use crate::domain::user::User;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
struct LeaderboardQuery {
    limit: Option<usize>,
}

#[derive(Debug, Serialize)]
struct LeaderboardRow {
    rank: u32,
    value: String,
    user: Option<User>,
}

/// GET /api/leaderboard/{category}?limit=N
///
/// Returns the top-N entries for a category, each enriched with the
/// participant's profile.
async fn get_leaderboard(
    path: web::Path<String>,
    query: web::Query<LeaderboardQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let raw = path.into_inner();
    let category = Category::parse(&raw).ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::BadRequest,
            format!("unknown leaderboard category '{raw}'"),
        )
    })?;
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    let entries = app_state.leaderboard.top(category, limit);
    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        let user = app_state.store.user_by_id(&entry.user_id).await?;
        rows.push(LeaderboardRow {
            rank: entry.rank,
            value: entry.value,
            user,
        });
    }

    Ok(HttpResponse::Ok().json(rows))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/{category}").route(web::get().to(get_leaderboard)));
}

//! Match lifecycle HTTP routes.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::game::GameStatus;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct CreateMatchRequest {
    white_id: String,
    time_budget: Option<i64>,
    wager_amount: Option<Decimal>,
    wager_currency: Option<String>,
}

/// POST /api/games
async fn create_match(
    app_state: web::Data<AppState>,
    body: web::Json<CreateMatchRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let game = app_state
        .games
        .create(
            &req.white_id,
            req.time_budget,
            req.wager_amount,
            req.wager_currency,
        )
        .await?;
    Ok(HttpResponse::Ok().json(game))
}

#[derive(Debug, Deserialize)]
struct ListMatchesQuery {
    status: Option<String>,
    participant: Option<String>,
}

/// GET /api/games?status=waiting|active&participant={user_id}
///
/// With a participant filter, returns that participant's matches; otherwise
/// filters by status, defaulting to the open (waiting) list.
async fn list_matches(
    app_state: web::Data<AppState>,
    query: web::Query<ListMatchesQuery>,
) -> Result<HttpResponse, AppError> {
    if let Some(participant) = &query.participant {
        let games = app_state.games.list_by_participant(participant).await?;
        return Ok(HttpResponse::Ok().json(games));
    }

    let status = match query.status.as_deref() {
        None | Some("waiting") => GameStatus::Waiting,
        Some("active") => GameStatus::Active,
        Some("completed") => GameStatus::Completed,
        Some("cancelled") => GameStatus::Cancelled,
        Some(other) => {
            return Err(AppError::bad_request(
                ErrorCode::BadRequest,
                format!("unknown status filter '{other}'"),
            ))
        }
    };
    let games = app_state.games.list_by_status(status).await?;
    Ok(HttpResponse::Ok().json(games))
}

/// GET /api/games/{game_id}
async fn get_match(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game = app_state.games.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(game))
}

#[derive(Debug, Deserialize)]
struct JoinMatchRequest {
    user_id: String,
}

/// POST /api/games/{game_id}/join
async fn join_match(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
    body: web::Json<JoinMatchRequest>,
) -> Result<HttpResponse, AppError> {
    let game = app_state
        .games
        .join(&path.into_inner(), &body.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(game))
}

#[derive(Debug, Deserialize)]
struct CancelMatchRequest {
    user_id: String,
}

/// POST /api/games/{game_id}/cancel
async fn cancel_match(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
    body: web::Json<CancelMatchRequest>,
) -> Result<HttpResponse, AppError> {
    let game = app_state
        .games
        .cancel(&path.into_inner(), &body.user_id)
        .await?;
    Ok(HttpResponse::Ok().json(game))
}

#[derive(Debug, Deserialize)]
struct SubmitMoveRequest {
    user_id: String,
    notation: String,
    remaining_time: i64,
}

/// POST /api/games/{game_id}/moves
///
/// Submit a move for the side to move, carrying the client's remaining-time
/// claim. Returns the updated match view.
async fn submit_move(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
    body: web::Json<SubmitMoveRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let game = app_state
        .games
        .submit_move(&path.into_inner(), &req.user_id, &req.notation, req.remaining_time)
        .await?;
    Ok(HttpResponse::Ok().json(game))
}

/// GET /api/games/{game_id}/moves
async fn get_moves(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let moves = app_state.games.moves(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(moves))
}

/// GET /api/games/{game_id}/clock
///
/// Poll both clocks. A poll that observes the mover's flag down forces the
/// match to completion with the waiting side credited the win.
async fn poll_clock(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let poll = app_state.games.poll_clock(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(poll))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_match))
            .route(web::get().to(list_matches)),
    );
    cfg.service(web::resource("/{game_id}").route(web::get().to(get_match)));
    cfg.service(web::resource("/{game_id}/join").route(web::post().to(join_match)));
    cfg.service(web::resource("/{game_id}/cancel").route(web::post().to(cancel_match)));
    cfg.service(
        web::resource("/{game_id}/moves")
            .route(web::post().to(submit_move))
            .route(web::get().to(get_moves)),
    );
    cfg.service(web::resource("/{game_id}/clock").route(web::get().to(poll_clock)));
}

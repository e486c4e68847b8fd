//! Participant registration and profile routes.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct RegisterUserRequest {
    wallet_address: String,
    username: String,
}

/// POST /api/users
///
/// Register a participant keyed by wallet address. Registering an already
/// known wallet is a conflict.
async fn register_user(
    app_state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse, AppError> {
    let req = body.into_inner();
    let user = app_state
        .users
        .register(&req.wallet_address, &req.username)
        .await?;
    Ok(HttpResponse::Ok().json(user))
}

/// GET /api/users
async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = app_state.users.list().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/users/{wallet_address}
async fn get_user(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let wallet_address = path.into_inner();
    let user = app_state.users.by_wallet(&wallet_address).await?;
    Ok(HttpResponse::Ok().json(user))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(register_user))
            .route(web::get().to(list_users)),
    );
    cfg.service(web::resource("/{wallet_address}").route(web::get().to(get_user)));
}

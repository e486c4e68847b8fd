use actix_web::web;

pub mod games;
pub mod health;
pub mod leaderboard;
pub mod users;

/// Configure application routes for tests and non-HttpServer contexts.
///
/// In production, `main.rs` wires these under the CORS and request-trace
/// middleware. For tests we register the same paths without those wrappers
/// so that endpoint behavior can be exercised directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root greeting
    cfg.route("/", web::get().to(health::root));

    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // User routes: /api/users/**
    cfg.service(web::scope("/api/users").configure(users::configure_routes));

    // Match routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));

    // Leaderboard routes: /api/leaderboard/**
    cfg.service(web::scope("/api/leaderboard").configure(leaderboard::configure_routes));
}

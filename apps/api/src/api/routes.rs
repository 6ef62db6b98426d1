use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{auth, players, teams};
use super::state::AppState;

/// Builds the application router with its middleware
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(auth::health_check))
        // Auth routes
        .route("/api/auth/login", post(auth::login))
        .route("/api/menu", get(auth::menu))
        // Team routes
        .route("/api/teams", post(teams::create_team).get(teams::list_teams))
        // Player routes
        .route("/api/players/form", get(players::registration_form))
        .route(
            "/api/players",
            post(players::create_player).get(players::list_players),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}

//! Route definitions
//!
//! API routes are mounted under /api; health probes sit at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, livestreams, reactions, statistics, system, tags};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(system_routes())
        .merge(livestream_routes())
        .merge(user_routes())
}

/// Unauthenticated system routes
fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/initialize", post(system::initialize))
        .route("/tag", get(tags::list_tags))
}

/// Livestream routes
fn livestream_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/livestream/:livestream_id/reaction",
            get(reactions::list_reactions).post(reactions::post_reaction),
        )
        .route(
            "/livestream/:livestream_id/statistics",
            get(statistics::get_livestream_statistics),
        )
        .route(
            "/livestream/:livestream_id/enter",
            post(livestreams::enter_livestream),
        )
        .route(
            "/livestream/:livestream_id/livecomment",
            post(livestreams::post_livecomment),
        )
        .route(
            "/livestream/:livestream_id/livecomment/:livecomment_id/report",
            post(livestreams::report_livecomment),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/user/:username/statistics", get(statistics::get_user_statistics))
}

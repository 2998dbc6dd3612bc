//! Route definitions

use axum::{routing::get, Router};

use crate::handlers::{health, status};
use crate::state::AppState;

/// Path of the status proxy endpoint
pub const STATUS_PATH: &str = "/api/discord-status";

/// Create the API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().route(STATUS_PATH, get(status::get_discord_status))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

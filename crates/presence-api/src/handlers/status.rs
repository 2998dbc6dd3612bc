//! Discord status handler
//!
//! The proxy's whole public contract: no parameters, one upstream call,
//! a normalized snapshot or a structured error.

use axum::{
    extract::State,
    http::{header, Uri},
    response::IntoResponse,
    Json,
};

use crate::response::{ApiError, ApiResult, NO_STORE};
use crate::state::AppState;

/// Current presence of the configured user
///
/// GET /api/discord-status
pub async fn get_discord_status(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let snapshot = state.status_source().fetch_status().await?;
    Ok(([(header::CACHE_CONTROL, NO_STORE)], Json(snapshot)))
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

//! API route configuration.

use crate::api::handlers::{info_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes.
///
/// # Endpoints
///
/// - `POST /api/shorten` - Create a shortlink
/// - `GET  /api/info`    - Shortlink metadata (`?shortlink=TOKEN`)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/shorten", post(shorten_handler))
        .route("/api/info", get(info_handler))
}

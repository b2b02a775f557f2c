//! Top-level router combining API and redirect routes.
//!
//! # Route Structure
//!
//! - `POST /api/shorten` - Create a shortlink
//! - `GET  /api/info`    - Shortlink metadata
//! - `GET  /{token}`     - Redirect (`token` matches `[a-zA-Z0-9]{1,11}`)
//!
//! Static routes take priority over the `{token}` capture, so `/api/info`
//! never reaches the redirect handler. Unknown paths answer `404` and known
//! paths with the wrong method answer `405`, both as JSON.
//!
//! # Middleware
//!
//! Applied to every route and to both fallbacks, outermost first:
//!
//! 1. **Logging** - method, path, status, latency
//! 2. **Recovery** - handler panics become `500`

use crate::api;
use crate::api::handlers::{method_not_allowed_handler, not_found_handler, redirect_handler};
use crate::api::middleware::{logging, recovery};
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Router, middleware};
use tower::ServiceBuilder;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let layers = ServiceBuilder::new()
        .layer(middleware::from_fn(logging::layer))
        .layer(recovery::layer());

    Router::new()
        .merge(api::routes::api_routes())
        .route("/{token}", get(redirect_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .with_state(state)
        .layer(layers)
}

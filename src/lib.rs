//! # Shortlink Core
//!
//! HTTP dispatch and error-handling core of a URL shortening service, built
//! with Axum over a pluggable storage backend.
//!
//! ## Endpoints
//!
//! - `POST /api/shorten` - `{"url", "expiration_in_minutes"}` → `201 {"shortlink"}`
//! - `GET  /api/info?shortlink=TOKEN` - shortlink metadata
//! - `GET  /{token}` - `307` redirect to the original URL
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::Storage`] contract and shortlink metadata
//! - **API Layer** ([`api`]) - Handlers, DTOs, validating extractors, and middleware
//! - **Errors** ([`error`]) - [`AppError`] and its JSON encoding
//! - **Routing** ([`routes`]) - Route table and middleware order
//!
//! Persistence is not part of this crate: token generation, lookups, and
//! expiration belong to whatever implements [`domain::Storage`].
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for storage
/// implementations and integration tests.
pub mod prelude {
    pub use crate::domain::{ShortlinkInfo, Storage};
    pub use crate::error::AppError;
    pub use crate::routes::app_router;
    pub use crate::state::AppState;
}

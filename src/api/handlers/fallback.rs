//! Handlers for requests no route accepts.

use axum::http::Uri;

use crate::api::extract::is_valid_token;
use crate::error::AppError;

/// Answers paths that match no route.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("not found")
}

/// Answers paths that match a route registered for other methods.
///
/// The `{token}` capture accepts any single segment, so a segment outside
/// the token pattern is still an unmatched route and answers 404.
pub async fn method_not_allowed_handler(uri: Uri) -> AppError {
    match uri.path().strip_prefix('/') {
        Some(segment) if !segment.contains('/') && !is_valid_token(segment) => {
            AppError::not_found("not found")
        }
        _ => AppError::MethodNotAllowed,
    }
}

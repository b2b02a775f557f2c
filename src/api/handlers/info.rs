//! Handler for shortlink metadata endpoint.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::api::dto::info::InfoQuery;
use crate::domain::ShortlinkInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Returns metadata for a shortlink.
///
/// # Endpoint
///
/// `GET /api/info?shortlink=IFHzaO`
///
/// # Response
///
/// ```json
/// {
///   "url": "https://www.baidu.com",
///   "created_at": "2024-01-01T00:00:00Z",
///   "expiration_in_minutes": 60
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `shortlink` is missing or empty; storage is not
/// consulted in that case. Storage errors keep their own status.
pub async fn info_handler(
    State(state): State<AppState>,
    query: Result<Query<InfoQuery>, QueryRejection>,
) -> Result<Json<ShortlinkInfo>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::bad_request(format!("parse parameters failed: {}", rejection.body_text()))
    })?;

    let token = query
        .shortlink
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::bad_request("shortlink query parameter is required"))?;

    let info = state.storage.shortlink_info(&token).await?;

    Ok(Json(info))
}

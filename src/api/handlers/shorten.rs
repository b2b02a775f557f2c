//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortlink for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://www.baidu.com",
///   "expiration_in_minutes": 60
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortlink": "IFHzaO" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body cannot be decoded, `url` is empty, or
/// `expiration_in_minutes` is negative. Storage errors keep their own status.
pub async fn shorten_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let shortlink = state
        .storage
        .shorten(&payload.url, payload.expiration_in_minutes)
        .await?;

    Ok((StatusCode::CREATED, Json(ShortenResponse { shortlink })))
}

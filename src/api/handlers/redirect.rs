//! Handler for short URL redirect.

use anyhow::anyhow;
use axum::{extract::State, http::HeaderValue, response::Redirect};
use tracing::debug;

use crate::api::extract::ShortToken;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a token to its original URL.
///
/// # Endpoint
///
/// `GET /{token}` where `token` matches `[a-zA-Z0-9]{1,11}`
///
/// # Response
///
/// `307 Temporary Redirect` with the original URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the token is malformed. Storage errors keep their
/// own status. A stored URL that cannot be sent as a `Location` header is an
/// unclassified 500.
pub async fn redirect_handler(
    State(state): State<AppState>,
    ShortToken(token): ShortToken,
) -> Result<Redirect, AppError> {
    let url = state.storage.unshorten(&token).await?;

    if HeaderValue::from_str(&url).is_err() {
        return Err(anyhow!("stored URL for {token} is not a valid Location header").into());
    }

    debug!("Resolved {} -> {}", token, url);

    Ok(Redirect::temporary(&url))
}

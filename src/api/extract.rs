//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text rejections.

use std::sync::LazyLock;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use regex::Regex;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Shape of a short token in the redirect path.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{1,11}$").unwrap());

/// Returns true if `token` can address a shortlink.
pub fn is_valid_token(token: &str) -> bool {
    TOKEN_REGEX.is_match(token)
}

/// JSON body that has been decoded and then validated.
///
/// Decoding ignores the `Content-Type` header. A body that cannot be decoded
/// is rejected before any field validation runs.
///
/// # Errors
///
/// - `400 Bad Request` with `parse parameters failed: ...` for malformed JSON
///   or mismatched field types
/// - `400 Bad Request` with `validate parameters failed: ...` for field
///   constraint violations
/// - the body rejection's own status (e.g. `413`) if the body cannot be read
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::with_status(
                rejection.status(),
                format!("parse parameters failed: {}", rejection.body_text()),
            )
        })?;

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|rejection| {
            AppError::bad_request(format!(
                "parse parameters failed: {}",
                rejection.body_text()
            ))
        })?;

        value.validate().map_err(|errors| {
            AppError::bad_request(format!("validate parameters failed: {errors}"))
        })?;

        Ok(Self(value))
    }
}

/// The `{token}` path segment of a redirect request.
///
/// Segments outside `[a-zA-Z0-9]{1,11}` are treated as an unmatched route and
/// rejected with `404 Not Found`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortToken(pub String);

impl<S> FromRequestParts<S> for ShortToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(token) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("not found"))?;

        if !is_valid_token(&token) {
            return Err(AppError::not_found("not found"));
        }

        Ok(Self(token))
    }
}

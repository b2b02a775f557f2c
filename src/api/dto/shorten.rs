//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
///
/// Missing fields decode to their zero value, so an absent `url` is reported
/// by validation rather than by the JSON decoder.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    #[serde(default)]
    #[validate(length(min = 1, message = "url must not be empty"))]
    pub url: String,

    /// Lifetime of the shortlink in minutes; `0` disables expiration.
    #[serde(default)]
    #[validate(range(min = 0, message = "expiration_in_minutes must not be negative"))]
    pub expiration_in_minutes: i64,
}

/// Response carrying the token produced by storage.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub shortlink: String,
}

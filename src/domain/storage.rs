//! Storage contract consumed by the HTTP handlers.

use async_trait::async_trait;

use crate::domain::shortlink::ShortlinkInfo;
use crate::error::AppError;

/// Persistence backend for shortlinks.
///
/// Token generation, uniqueness, and expiration are the implementation's
/// responsibility; the HTTP layer only forwards requests and maps results.
///
/// # Errors
///
/// Implementations classify their own failures: a missing or expired token
/// should be [`AppError::NotFound`], a malformed token
/// [`AppError::BadRequest`], and any other status can be expressed with
/// [`AppError::with_status`] (statuses below 400 are not errors and are
/// masked as 500). Everything else (I/O, driver errors) should be
/// returned as [`AppError::Unclassified`] and is answered with a masked 500.
///
/// # Implementations
///
/// None ship with this crate. Test mocks are generated with `mockall` under
/// `cfg(test)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Stores `url` and returns a freshly generated token.
    ///
    /// An `expiration_in_minutes` of `0` means the shortlink never expires.
    async fn shorten(&self, url: &str, expiration_in_minutes: i64) -> Result<String, AppError>;

    /// Returns metadata for `token`.
    async fn shortlink_info(&self, token: &str) -> Result<ShortlinkInfo, AppError>;

    /// Resolves `token` back to its original URL.
    async fn unshorten(&self, token: &str) -> Result<String, AppError>;
}

//! Shortlink metadata as reported by a storage backend.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about a stored shortlink, returned verbatim by `GET /api/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlinkInfo {
    pub url: String,
    pub created_at: DateTime<Utc>,
    /// Lifetime in minutes; `0` means the shortlink never expires.
    pub expiration_in_minutes: i64,
}

/// The HTTP layer never checks expiry itself. [`ShortlinkInfo::expires_at`]
/// and [`ShortlinkInfo::is_expired`] are helpers for [`crate::domain::Storage`]
/// implementations deciding whether `unshorten` should answer
/// [`crate::AppError::NotFound`].
impl ShortlinkInfo {
    /// Creates metadata for a shortlink created at `created_at`.
    pub fn new(url: String, created_at: DateTime<Utc>, expiration_in_minutes: i64) -> Self {
        Self {
            url,
            created_at,
            expiration_in_minutes,
        }
    }

    /// Returns the instant the shortlink stops resolving, if it expires at all.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        (self.expiration_in_minutes > 0)
            .then(|| self.created_at + Duration::minutes(self.expiration_in_minutes))
    }

    /// Returns true if the shortlink has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        self.expires_at().is_some_and(|e| Utc::now() >= e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_expiration_never_expires() {
        let info = ShortlinkInfo::new(
            "https://example.com".to_string(),
            Utc::now() - Duration::days(365),
            0,
        );

        assert_eq!(info.expires_at(), None);
        assert!(!info.is_expired());
    }

    #[test]
    fn test_expiration_window() {
        let created_at = Utc::now() - Duration::minutes(30);

        let live = ShortlinkInfo::new("https://example.com".to_string(), created_at, 60);
        assert_eq!(live.expires_at(), Some(created_at + Duration::minutes(60)));
        assert!(!live.is_expired());

        let expired = ShortlinkInfo::new("https://example.com".to_string(), created_at, 10);
        assert!(expired.is_expired());
    }

    #[test]
    fn test_serializes_with_snake_case_fields() {
        let created_at = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let info = ShortlinkInfo::new("https://www.baidu.com".to_string(), created_at, 1);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["url"], "https://www.baidu.com");
        assert_eq!(json["expiration_in_minutes"], 1);
        assert_eq!(json["created_at"], "2024-01-01T00:00:00Z");
    }
}

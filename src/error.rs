//! Error taxonomy and its HTTP encoding.
//!
//! Every failure that reaches the HTTP layer is an [`AppError`]. Domain
//! variants carry an explicit status and a client-facing message; anything
//! else is [`AppError::Unclassified`] and is masked as a generic
//! `500 Internal Server Error`.
//!
//! Error bodies are a single JSON string:
//!
//! ```text
//! HTTP/1.1 404 Not Found
//! Content-Type: application/json
//!
//! "shortlink not found"
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Errors surfaced by handlers, extractors, and [`crate::domain::Storage`]
/// implementations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or invalid client input (400).
    #[error("{message}")]
    BadRequest { message: String },

    /// Unknown route or token (404).
    #[error("{message}")]
    NotFound { message: String },

    /// Path matched but the method did not (405).
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Any other failure a collaborator classified with an explicit status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// Failure without a status; never shown to clients.
    #[error(transparent)]
    Unclassified(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Builds a domain error for an arbitrary status.
    ///
    /// 400 and 404 map onto their dedicated variants so callers can match on
    /// them regardless of which constructor produced the error. A status
    /// below 400 is not an error status; it becomes [`AppError::Unclassified`]
    /// and is answered with a masked 500.
    pub fn with_status(status: StatusCode, message: impl Into<String>) -> Self {
        if !status.is_client_error() && !status.is_server_error() {
            return Self::Unclassified(anyhow::anyhow!(
                "error raised with non-error status {}: {}",
                status,
                message.into()
            ));
        }

        match status {
            StatusCode::BAD_REQUEST => Self::bad_request(message),
            StatusCode::NOT_FOUND => Self::not_found(message),
            StatusCode::METHOD_NOT_ALLOWED => Self::MethodNotAllowed,
            status => Self::Status {
                status,
                message: message.into(),
            },
        }
    }

    /// Returns the declared status of a domain error, or `None` for
    /// unclassified failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::BadRequest { .. } => Some(StatusCode::BAD_REQUEST),
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::MethodNotAllowed => Some(StatusCode::METHOD_NOT_ALLOWED),
            Self::Status { status, .. } => Some(*status),
            Self::Unclassified(_) => None,
        }
    }
}

/// Canonical reason phrase for a status, used as the masked error body.
pub(crate) fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.status() {
            Some(status) => {
                let message = self.to_string();
                tracing::warn!("HTTP {} - {}", status.as_u16(), message);
                (status, Json(message)).into_response()
            }
            None => {
                tracing::error!(error = ?self, "unclassified error");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                (status, Json(status_text(status))).into_response()
            }
        }
    }
}

use std::sync::Arc;

use crate::config::DEFAULT_MAX_BODY_BYTES;
use crate::domain::Storage;

/// Shared, read-only application state cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    /// Upper bound for request bodies, in bytes.
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}

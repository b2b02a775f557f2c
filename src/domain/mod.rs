//! Domain layer: shortlink metadata and the storage contract.
//!
//! The HTTP layer depends only on the [`Storage`] trait. Backends live outside
//! this crate and are injected through [`crate::state::AppState`].

pub mod shortlink;
pub mod storage;

pub use shortlink::ShortlinkInfo;
pub use storage::Storage;

#[cfg(test)]
pub use storage::MockStorage;

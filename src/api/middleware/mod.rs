//! HTTP middleware applied around every route.
//!
//! Order is fixed by [`crate::routes::app_router`]: logging wraps recovery
//! wraps the handler, so recovered panics are still logged with their 500.

pub mod logging;
pub mod recovery;

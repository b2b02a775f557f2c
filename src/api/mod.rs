//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into storage calls and formats
//! responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`extract`] - Validating extractors that reject with [`crate::AppError`]
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Logging and panic recovery
//! - [`routes`] - Route table

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;

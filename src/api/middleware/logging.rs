//! Access logging middleware.

use axum::{
    extract::{ConnectInfo, Request},
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};

/// Logs method, path, status, and latency of every request.
///
/// The client IP is included when the server was started with connect info;
/// otherwise it is logged as `-`. The response passes through untouched.
///
/// # Example Logs
///
/// ```text
/// INFO 127.0.0.1 "POST /api/shorten" 201 3ms
/// INFO - "GET /IFHzaO" 307 0ms
/// ```
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/{token}", get(redirect_handler))
///     .layer(middleware::from_fn(logging::layer));
/// ```
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let ms = start.elapsed().as_millis();

    tracing::info!(
        r#"{ip} "{method} {path}" {status} {ms}ms"#,
        ip = ip,
        method = method,
        path = path,
        status = status,
        ms = ms,
    );

    response
}

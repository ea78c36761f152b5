//! Request-line logging middleware.
//!
//! Emits one event per incoming request with its method, path and an
//! RFC 3339 timestamp. Logging never inspects the body and cannot fail the
//! request.

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::{SecondsFormat, Utc};

/// Middleware that logs the request line before handing off to the router.
pub async fn log_request(request: Request<axum::body::Body>, next: Next) -> Response {
    tracing::info!(
        method = %request.method(),
        path = %request.uri().path(),
        at = %Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "Incoming request"
    );

    next.run(request).await
}

//! Responders for requests the routing table cannot serve. All of them mark
//! the response `Cache-Control: no-cache` so edge caches keep asking the
//! origin instead of replaying an error page.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::any::Any;

/// Serves any path that matches no registered route.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        [(header::CACHE_CONTROL, "no-cache")],
        "404 page not found",
    )
}

/// Serves a registered path hit with an unsupported method.
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::CACHE_CONTROL, "no-cache")],
        "405 method not allowed",
    )
}

/// Converts a panic caught while handling a request into a plain 500. The
/// payload only reaches the log, never the response body.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };
    tracing::error!(panic = %detail, "handler panicked while serving request");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CACHE_CONTROL, "no-cache")],
        "500 internal server error",
    )
        .into_response()
}

//! Request handlers.

pub mod update_site;
pub mod webhook;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

/// `GET /health`
pub async fn health() -> &'static str {
    "ok"
}

/// `OPTIONS` on an update endpoint. The CORS headers come from
/// [`with_cors_headers`].
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any method other than `POST` or `OPTIONS` on an update endpoint.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method not allowed" })),
    )
        .into_response()
}

/// Stamp the permissive CORS headers every update endpoint answers with.
pub async fn with_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    response
}

//! Health check endpoint.

use axum::http::StatusCode;

/// GET /api/healthz — fixed `OK` body for liveness probes. No side effects.
pub async fn check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}

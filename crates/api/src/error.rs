//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moderation::ModerationError;

/// API-level error type that maps to HTTP responses.
///
/// Every error renders as `{"error": <message>}` with the triggering status
/// code; success payloads are plain JSON, so the envelope stays uniform.
#[derive(Debug)]
pub enum ApiError {
    /// The request payload was not valid JSON of the expected shape.
    InvalidBody,
    /// The chirp was rejected by moderation.
    Moderation(ModerationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidBody => {
                (StatusCode::BAD_REQUEST, "Invalid Request Body".to_string())
            }
            ApiError::Moderation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ModerationError> for ApiError {
    fn from(err: ModerationError) -> Self {
        ApiError::Moderation(err)
    }
}

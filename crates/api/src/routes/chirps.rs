//! Chirp validation endpoint.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct ValidateChirpRequest {
    pub body: String,
}

// -- Response types --

#[derive(Debug, Serialize)]
pub struct ValidateChirpResponse {
    pub cleaned_body: String,
}

// -- Handlers --

/// POST /api/validate_chirp — validates a chirp and censors profanity.
///
/// Malformed payloads map to 400 before the length check runs; oversized
/// bodies map to 400 before the filter runs.
#[tracing::instrument(skip(payload))]
pub async fn validate(
    payload: Result<Json<ValidateChirpRequest>, JsonRejection>,
) -> Result<Json<ValidateChirpResponse>, ApiError> {
    let Json(req) = payload.map_err(|_| ApiError::InvalidBody)?;

    let cleaned_body = moderation::validate_chirp(&req.body)?;
    metrics::counter!("chirpy_chirps_validated_total").increment(1);

    Ok(Json(ValidateChirpResponse { cleaned_body }))
}

//! Chirp length validation.

use crate::error::ModerationError;
use crate::filter::censor;

/// Maximum chirp length in characters.
pub const MAX_CHIRP_LEN: usize = 140;

/// Validates a chirp body and returns the censored text.
///
/// Bodies longer than [`MAX_CHIRP_LEN`] characters are rejected before the
/// filter runs. Length is measured in characters rather than bytes, so
/// multibyte input is not penalized.
pub fn validate_chirp(body: &str) -> Result<String, ModerationError> {
    let length = body.chars().count();
    if length > MAX_CHIRP_LEN {
        return Err(ModerationError::TooLong { length });
    }

    Ok(censor(body))
}

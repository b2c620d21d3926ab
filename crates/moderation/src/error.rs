//! Moderation error types.

use thiserror::Error;

/// Errors that can occur while validating a chirp.
///
/// The `Display` output doubles as the client-facing error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModerationError {
    /// The chirp body exceeds the maximum allowed length.
    #[error("Chirp is too long")]
    TooLong {
        /// Offending length in characters.
        length: usize,
    },
}

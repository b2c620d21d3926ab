//! Moderation layer for Chirpy.
//!
//! This crate provides the pure chirp-processing logic:
//! - Length validation against the chirp character limit
//! - Whole-word profanity filtering with a fixed denylist
//!
//! No HTTP or async dependencies; the server crate calls [`validate_chirp`]
//! and maps the result onto the wire.

pub mod error;
pub mod filter;
pub mod validate;

pub use error::ModerationError;
pub use filter::censor;
pub use validate::{MAX_CHIRP_LEN, validate_chirp};

//! Error types for color and scheme parsing
//!
//! Every invalid color input, whether typed by the user or delivered by an
//! extraction collaborator, ends up as a [`ParseColorError`].

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not exactly six hexadecimal digits after
/// stripping surrounding whitespace and an optional leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has the wrong number of digits (must be 6 after stripping '#')
    #[error("invalid hex color length {0} (expected 6 digits)")]
    InvalidLength(usize),

    /// A non-hexadecimal character was found
    #[error("invalid hex character in {0:?}")]
    InvalidHex(String),
}

/// Error returned when a harmony scheme name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown harmony scheme {0:?}")]
pub struct ParseSchemeError(pub String);

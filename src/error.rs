use color_harmony::{ParseColorError, ParseSchemeError};
use thiserror::Error;

/// Failure of a palette or session action. Every variant is recoverable and
/// leaves the session state unchanged.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Invalid color: {0}")]
    InvalidColor(#[from] ParseColorError),

    #[error("Palette name must not be empty")]
    EmptyName,

    #[error("Palette has no colors")]
    EmptyPalette,

    #[error("Index {index} out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Palette is full ({capacity} colors)")]
    PaletteFull { capacity: usize },

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,

    #[error("Clipboard write denied: {0}")]
    Denied(String),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Extractor failed: {0}")]
    Failed(String),
}

/// Failure to parse a line of interactive input into a command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    #[error(transparent)]
    InvalidScheme(#[from] ParseSchemeError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

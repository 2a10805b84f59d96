//! Swatchbook - color picker, harmony generator and palette manager
//!
//! Session-scoped palette state on top of the `color-harmony` color model.
//! This library exposes modules for the binary and for integration testing.

pub mod commands;
pub mod error;
pub mod models;
pub mod services;
pub mod session;

pub use commands::{dispatch, Command, Outcome};
pub use error::{ClipboardError, CommandError, ConfigError, ExtractError, PaletteError};
pub use session::Session;

//! Color types and conversion utilities
//!
//! [`Color`] is the canonical value. The other types are views used by
//! specific computations:
//!
//! - [`Hsl`]: hue rotation for harmony schemes
//! - [`LinearRgb`]: relative luminance and the Oklab transform
//! - [`Oklab`] / [`Oklch`]: perceptually uniform lightness ramps
//!
//! # Example
//!
//! ```
//! use color_harmony::{Color, Hsl};
//!
//! let color: Color = "#3b82f6".parse().unwrap();
//! let hsl = Hsl::from(color);
//! assert_eq!(Color::from(hsl), color);
//! ```

mod hsl;
mod linear_rgb;
mod oklab;
mod rgb;

pub use hsl::{wrap_hue, Hsl};
pub use linear_rgb::{linear_to_srgb, srgb_to_linear, LinearRgb};
pub use oklab::{Oklab, Oklch};
pub use rgb::Color;

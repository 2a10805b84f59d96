#![allow(clippy::module_inception)]

//! color-harmony: color model and harmony derivation
//!
//! This library converts between hex, RGB and HSL color representations,
//! picks a readable text color for a background, and derives related colors
//! from a base color using classic color-theory harmony rules.
//!
//! # Quick Start
//!
//! ```
//! use color_harmony::{harmony, Color, HarmonyScheme};
//!
//! let base: Color = "#3b82f6".parse().unwrap();
//! let colors = harmony(base, HarmonyScheme::Triadic);
//!
//! assert_eq!(colors.len(), 3);
//! assert_eq!(colors[0], base);
//! assert_eq!(base.contrast_text(), Color::WHITE);
//! ```
//!
//! # Representations
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Color`] | Canonical value: three 8-bit channels, printed as `#RRGGBB` |
//! | [`Hsl`] | Hue rotation for the hue-based harmony schemes |
//! | [`LinearRgb`] | Relative luminance, input to Oklab |
//! | [`Oklab`] / [`Oklch`] | Perceptually uniform lightness ramp for the monochromatic scheme |
//!
//! Hex parsing is strict: exactly six hex digits with an optional leading
//! `#`, case-insensitive. Everything else is a [`ParseColorError`].
//!
//! ## HSL Round Trip
//!
//! `Color -> Hsl -> Color` reproduces the original channels. The forward
//! conversion uses the textbook branch structure (lightness is the midpoint
//! of the max and min channel, saturation switches formula at `l = 0.5`, hue
//! comes from whichever channel is largest) in `f64`, and the inverse uses
//! the six-sextant `hue_to_rgb` helper before rounding to the nearest 8-bit
//! value.
//!
//! ## Harmony Schemes
//!
//! | Scheme | Output (hue offsets in degrees) |
//! |--------|---------------------------------|
//! | complementary | `[0, +180]` |
//! | analogous | `[-30, 0, +30]` |
//! | triadic | `[0, +120, +240]` |
//! | split-complementary | `[0, +150, +210]` |
//! | tetradic | `[0, +90, +180, +270]` |
//! | monochromatic | 5-step lightness ramp |
//!
//! Offsets are added modulo 360 while saturation and lightness are held.
//! The monochromatic ramp shifts Oklab lightness by
//! [`MONOCHROMATIC_SHIFT`] in each direction and interpolates between the
//! darkened base, the base and the brightened base with hue and chroma held.
//! HSL lightness is not perceptually uniform (yellow at `l = 0.5` looks far
//! brighter than blue at `l = 0.5`), which is why the ramp is not built in
//! HSL.
//!
//! ## Contrast
//!
//! [`luminance`] is the WCAG relative luminance. [`contrast_text`] returns
//! black above [`TEXT_LUMINANCE_THRESHOLD`] (0.5) and white otherwise.

pub mod color;
pub mod contrast;
pub mod error;
pub mod harmony;
pub mod random;

#[cfg(test)]
mod domain_tests;

pub use color::{Color, Hsl, LinearRgb, Oklab, Oklch};
pub use contrast::{contrast_ratio, contrast_text, luminance, TEXT_LUMINANCE_THRESHOLD};
pub use error::{ParseColorError, ParseSchemeError};
pub use harmony::{
    harmony, harmony_from_str, HarmonyScheme, MONOCHROMATIC_SHIFT, MONOCHROMATIC_STEPS,
};
pub use random::{random_color, random_color_with};

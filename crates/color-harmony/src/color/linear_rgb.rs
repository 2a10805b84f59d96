//! Linear RGB color type
//!
//! Linear RGB is the color space where light addition is physically accurate.
//! Relative luminance and the Oklab transform both start from linear light.

use super::rgb::Color;

/// A color in linear RGB color space.
///
/// Values are typically in the range 0.0..=1.0, but may leave it for colors
/// coming back from Oklab that are outside the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamp every channel into 0.0..=1.0 (simple gamut clipping).
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }
}

/// IEC 61966-2-1 transfer function: gamma-encoded sRGB to linear.
#[inline]
pub fn srgb_to_linear(srgb: f64) -> f64 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 transfer function: linear to gamma-encoded sRGB.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

impl From<Color> for LinearRgb {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_unit();
        Self {
            r: srgb_to_linear(r),
            g: srgb_to_linear(g),
            b: srgb_to_linear(b),
        }
    }
}

impl From<LinearRgb> for Color {
    /// Gamma-encode, clipping out-of-gamut channels first.
    fn from(linear: LinearRgb) -> Self {
        let linear = linear.clamped();
        Color::from_unit(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}

//! Relative luminance and readable text color
//!
//! Luminance follows WCAG 2.x: gamma-decode each channel, then weight with
//! the Rec. 709 coefficients. The text color switch uses a single canonical
//! threshold of 0.5 on that 0..=1 scale.

use crate::color::{Color, LinearRgb};

/// Luminance above which black text is chosen over white.
pub const TEXT_LUMINANCE_THRESHOLD: f64 = 0.5;

/// WCAG relative luminance, `0.0` for black and `1.0` for white.
///
/// ```
/// use color_harmony::{luminance, Color};
///
/// assert_eq!(luminance(Color::BLACK), 0.0);
/// assert!((luminance(Color::WHITE) - 1.0).abs() < 1e-12);
/// ```
pub fn luminance(color: Color) -> f64 {
    let linear = LinearRgb::from(color);
    0.2126 * linear.r + 0.7152 * linear.g + 0.0722 * linear.b
}

/// Foreground color for text drawn on `background`: black when the
/// background luminance exceeds [`TEXT_LUMINANCE_THRESHOLD`], else white.
pub fn contrast_text(background: Color) -> Color {
    if luminance(background) > TEXT_LUMINANCE_THRESHOLD {
        Color::BLACK
    } else {
        Color::WHITE
    }
}

/// WCAG contrast ratio between two colors, from `1.0` to `21.0`.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

impl Color {
    /// See [`luminance`].
    #[inline]
    pub fn luminance(self) -> f64 {
        luminance(self)
    }

    /// See [`contrast_text`].
    #[inline]
    pub fn contrast_text(self) -> Color {
        contrast_text(self)
    }
}

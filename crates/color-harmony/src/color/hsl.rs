//! HSL (hue, saturation, lightness) representation
//!
//! HSL is a cylindrical re-parameterization of sRGB. Harmony schemes rotate
//! the hue around the cylinder while holding saturation and lightness, so the
//! conversions here must be exact inverses up to 8-bit rounding.

use super::rgb::Color;

/// A color in HSL notation.
///
/// - `h`: hue in degrees, `0.0..360.0`
/// - `s`: saturation, `0.0..=1.0`
/// - `l`: lightness, `0.0..=1.0`
///
/// Achromatic colors (greys) have `h == 0.0` and `s == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation as a fraction
    pub s: f64,
    /// Lightness as a fraction
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL value. The hue is wrapped into `[0, 360)`.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s,
            l,
        }
    }

    /// Return a copy with the hue rotated by `degrees` (negative rotates
    /// backwards), wrapped into `[0, 360)`.
    ///
    /// ```
    /// use color_harmony::Hsl;
    ///
    /// let hsl = Hsl::new(300.0, 0.5, 0.5).rotate(90.0);
    /// assert_eq!(hsl.h, 30.0);
    /// ```
    #[inline]
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }

    /// Hue in whole degrees with saturation and lightness as whole
    /// percentages, for display.
    pub fn rounded(self) -> (u16, u8, u8) {
        let h = (self.h.round() as u16) % 360;
        let s = (self.s * 100.0).round().clamp(0.0, 100.0) as u8;
        let l = (self.l * 100.0).round().clamp(0.0, 100.0) as u8;
        (h, s, l)
    }
}

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn wrap_hue(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

impl From<Color> for Hsl {
    fn from(color: Color) -> Self {
        let [r, g, b] = color.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self { h: 0.0, s: 0.0, l };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(h * 60.0, s, l)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        let h = wrap_hue(hsl.h) / 360.0;
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        if s == 0.0 {
            return Color::from_unit(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Color::from_unit(
            hue_to_rgb(p, q, h + 1.0 / 3.0),
            hue_to_rgb(p, q, h),
            hue_to_rgb(p, q, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl Color {
    /// Convert to HSL.
    #[inline]
    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self)
    }

    /// Build a color from hue in degrees and saturation/lightness fractions.
    ///
    /// The hue wraps, saturation and lightness are clamped to `0.0..=1.0`,
    /// and each channel is rounded to the nearest 8-bit value.
    ///
    /// ```
    /// use color_harmony::Color;
    ///
    /// assert_eq!(Color::from_hsl(0.0, 1.0, 0.5), Color::new(255, 0, 0));
    /// assert_eq!(Color::from_hsl(480.0, 1.0, 0.5), Color::new(0, 255, 0));
    /// ```
    #[inline]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Color::from(Hsl { h, s, l })
    }
}

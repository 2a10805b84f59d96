//! Harmony schemes
//!
//! A harmony scheme derives a set of related colors from a base color. Hue
//! based schemes rotate the HSL hue by fixed offsets while holding saturation
//! and lightness; the monochromatic scheme builds a lightness ramp in Oklch
//! so that the steps look evenly spaced.

use std::fmt;
use std::str::FromStr;

use crate::color::{Color, Oklch};
use crate::error::{ParseColorError, ParseSchemeError};

/// Number of colors produced by [`HarmonyScheme::Monochromatic`].
pub const MONOCHROMATIC_STEPS: usize = 5;

/// Oklab lightness removed from (added to) the base to reach the darkest
/// (lightest) end of the monochromatic ramp.
pub const MONOCHROMATIC_SHIFT: f64 = 0.36;

/// Named rule for deriving related colors from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HarmonyScheme {
    /// Base and its opposite: `[0, +180]`
    Complementary,
    /// Neighbours on either side: `[-30, 0, +30]`
    Analogous,
    /// Three evenly spaced hues: `[0, +120, +240]`
    Triadic,
    /// Base plus the two neighbours of its complement: `[0, +150, +210]`
    SplitComplementary,
    /// Four evenly spaced hues: `[0, +90, +180, +270]`
    Tetradic,
    /// Five-step lightness ramp from darkened to brightened base
    Monochromatic,
}

impl HarmonyScheme {
    /// All schemes, in presentation order.
    pub const ALL: [HarmonyScheme; 6] = [
        HarmonyScheme::Complementary,
        HarmonyScheme::Analogous,
        HarmonyScheme::Triadic,
        HarmonyScheme::SplitComplementary,
        HarmonyScheme::Tetradic,
        HarmonyScheme::Monochromatic,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            HarmonyScheme::Complementary => "complementary",
            HarmonyScheme::Analogous => "analogous",
            HarmonyScheme::Triadic => "triadic",
            HarmonyScheme::SplitComplementary => "split-complementary",
            HarmonyScheme::Tetradic => "tetradic",
            HarmonyScheme::Monochromatic => "monochromatic",
        }
    }

    /// Hue offsets in degrees, in output order. `None` for the
    /// monochromatic scheme, which does not rotate the hue.
    pub fn offsets(self) -> Option<&'static [f64]> {
        match self {
            HarmonyScheme::Complementary => Some(&[0.0, 180.0]),
            HarmonyScheme::Analogous => Some(&[-30.0, 0.0, 30.0]),
            HarmonyScheme::Triadic => Some(&[0.0, 120.0, 240.0]),
            HarmonyScheme::SplitComplementary => Some(&[0.0, 150.0, 210.0]),
            HarmonyScheme::Tetradic => Some(&[0.0, 90.0, 180.0, 270.0]),
            HarmonyScheme::Monochromatic => None,
        }
    }

    /// Number of colors the scheme produces.
    pub fn color_count(self) -> usize {
        self.offsets().map_or(MONOCHROMATIC_STEPS, <[f64]>::len)
    }
}

impl fmt::Display for HarmonyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyScheme {
    type Err = ParseSchemeError;

    /// Parse a scheme name. Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        HarmonyScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == normalized)
            .ok_or_else(|| ParseSchemeError(s.to_string()))
    }
}

/// Derive the colors of `scheme` from `base`, in the scheme's order.
///
/// The zero offset yields `base` itself, so the base always appears
/// unchanged in hue-based schemes.
///
/// ```
/// use color_harmony::{harmony, Color, HarmonyScheme};
///
/// let red = Color::new(255, 0, 0);
/// let colors = harmony(red, HarmonyScheme::Complementary);
/// assert_eq!(colors, vec![red, Color::new(0, 255, 255)]);
/// ```
pub fn harmony(base: Color, scheme: HarmonyScheme) -> Vec<Color> {
    match scheme.offsets() {
        Some(offsets) => {
            let hsl = base.to_hsl();
            offsets
                .iter()
                .map(|&offset| {
                    if offset == 0.0 {
                        base
                    } else {
                        Color::from(hsl.rotate(offset))
                    }
                })
                .collect()
        }
        None => monochromatic(base),
    }
}

/// Parse `input` and derive the colors of `scheme` from it.
///
/// Fails with the parse error when `input` is not a valid color; the
/// harmony step itself never fails.
pub fn harmony_from_str(input: &str, scheme: HarmonyScheme) -> Result<Vec<Color>, ParseColorError> {
    let base: Color = input.parse()?;
    Ok(harmony(base, scheme))
}

fn monochromatic(base: Color) -> Vec<Color> {
    let mid = Oklch::from(base);
    let dark = mid.with_lightness((mid.l - MONOCHROMATIC_SHIFT).clamp(0.0, 1.0));
    let bright = mid.with_lightness((mid.l + MONOCHROMATIC_SHIFT).clamp(0.0, 1.0));

    let last = (MONOCHROMATIC_STEPS - 1) as f64;
    (0..MONOCHROMATIC_STEPS)
        .map(|i| {
            let t = i as f64 / last;
            if t < 0.5 {
                Color::from(dark.mix(mid, t * 2.0))
            } else if t > 0.5 {
                Color::from(mid.mix(bright, (t - 0.5) * 2.0))
            } else {
                base
            }
        })
        .collect()
}

impl Color {
    /// See [`harmony`].
    #[inline]
    pub fn harmony(self, scheme: HarmonyScheme) -> Vec<Color> {
        harmony(self, scheme)
    }
}

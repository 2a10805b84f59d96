//! Hex color type
//!
//! [`Color`] is the canonical color value: three 8-bit sRGB channels that
//! print as an uppercase `#RRGGBB` string. All other representations
//! (normalized channels, HSL, linear light, Oklab) are derived from it.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color stored as three gamma-encoded 8-bit sRGB channels.
///
/// Colors are immutable values; every transformation returns a new `Color`.
/// Equality compares channels, so two colors parsed from `#3b82f6` and
/// `3B82F6` are equal.
///
/// # Example
///
/// ```
/// use color_harmony::Color;
///
/// let blue: Color = "#3b82f6".parse().unwrap();
/// assert_eq!(blue.rgb(), (59, 130, 246));
/// assert_eq!(blue.to_string(), "#3B82F6");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Color = Color::new(0, 0, 0);

    /// Pure white, `#FFFFFF`.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Create a color from normalized channels, rounding to the nearest
    /// 8-bit value and clamping to 0..=255.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The RGB triple, each channel in 0..=255.
    #[inline]
    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.b
    }

    /// Channels normalized to 0.0..=1.0.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Canonical `#RRGGBB` form with uppercase digits.
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode_upper(self.to_bytes()))
    }
}

fn unit_to_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 3]> for Color {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB` and `RRGGBB`, case-insensitive, with surrounding
    /// whitespace trimmed. Shorthand (`#RGB`) and CSS functions are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use color_harmony::{Color, ParseColorError};
    ///
    /// let a: Color = "#3b82f6".parse().unwrap();
    /// let b: Color = "3B82F6".parse().unwrap();
    /// assert_eq!(a, b);
    ///
    /// assert!(matches!(
    ///     "not-a-color".parse::<Color>(),
    ///     Err(ParseColorError::InvalidLength(_))
    /// ));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        let len = digits.chars().count();
        if len != 6 {
            return Err(ParseColorError::InvalidLength(len));
        }

        let mut bytes = [0u8; 3];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| ParseColorError::InvalidHex(s.to_string()))?;
        Ok(Self::from_bytes(bytes))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Color;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::ser::{Serialize, Serializer};

    impl Serialize for Color {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex())
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(de::Error::custom)
        }
    }
}

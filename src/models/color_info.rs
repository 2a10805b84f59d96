use color_harmony::{contrast_ratio, Color};
use serde::Serialize;
use std::fmt;

/// Display-ready description of a color.
///
/// HSL is rounded for display: hue in whole degrees, saturation and
/// lightness in whole percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    pub hex: String,
    pub rgb: [u8; 3],
    pub hsl: [u16; 3],
    pub text_color: Color,
    pub contrast_ratio: f64,
}

impl ColorInfo {
    pub fn new(color: Color) -> Self {
        let (h, s, l) = color.to_hsl().rounded();
        let text_color = color.contrast_text();
        Self {
            hex: color.to_hex(),
            rgb: color.to_bytes(),
            hsl: [h, u16::from(s), u16::from(l)],
            text_color,
            contrast_ratio: contrast_ratio(color, text_color),
        }
    }
}

impl From<Color> for ColorInfo {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl fmt::Display for ColorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        let [h, s, l] = self.hsl;
        writeln!(f, "HEX  {}", self.hex)?;
        writeln!(f, "RGB  {r}, {g}, {b}")?;
        writeln!(f, "HSL  {h}°, {s}%, {l}%")?;
        write!(
            f,
            "Text {} (contrast {:.2}:1)",
            self.text_color, self.contrast_ratio
        )
    }
}

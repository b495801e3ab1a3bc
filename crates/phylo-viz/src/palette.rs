//! Colours and the categorical palette
//!
//! The Okabe-Ito palette stays distinguishable under the common forms of
//! colour-vision deficiency.

use serde::{Deserialize, Serialize};

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGB (alpha = 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from hex string (e.g., "#FF5733" or "FF5733")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(
            f32::from(channel(0)?) / 255.0,
            f32::from(channel(2)?) / 255.0,
            f32::from(channel(4)?) / 255.0,
        ))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// Hex codes of the Okabe-Ito palette (black omitted)
pub const OKABE_ITO: [&str; 7] = [
    "#E69F00", "#56B4E9", "#009E73", "#F0E442", "#0072B2", "#D55E00", "#CC79A7",
];

/// A categorical palette that cycles through its colours
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    colors: Vec<Color>,
}

impl Palette {
    /// The Okabe-Ito palette
    pub fn okabe_ito() -> Self {
        Self {
            name: "okabe-ito".to_string(),
            colors: OKABE_ITO.iter().filter_map(|hex| Color::from_hex(hex)).collect(),
        }
    }

    /// Colour for the `index`-th category, wrapping around
    pub fn color(&self, index: usize) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        Some(self.colors[index % self.colors.len()])
    }

    /// All colours in order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::okabe_ito()
    }
}

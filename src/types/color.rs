//! Solid color representation for palette entries

use std::fmt;

/// A solid palette color
///
/// The format transmits two kinds of solid colors:
/// - opaque colors: 3 bytes (r, g, b)
/// - alpha colors: 4 bytes (r, g, b, a)
///
/// Both are kept distinct so the CSS rendering round-trips the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Opaque color
    Rgb { r: u8, g: u8, b: u8 },
    /// Color with an explicit alpha channel
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    /// Create an opaque color
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create a color with alpha
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Get RGB components
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Rgb { r, g, b } | Color::Rgba { r, g, b, .. } => (r, g, b),
        }
    }

    /// Alpha channel, 255 for opaque colors
    pub fn alpha(&self) -> u8 {
        match *self {
            Color::Rgb { .. } => 255,
            Color::Rgba { a, .. } => a,
        }
    }

    /// Returns `true` if the color was transmitted with an alpha channel
    pub fn has_alpha(&self) -> bool {
        matches!(self, Color::Rgba { .. })
    }

    /// CSS hex notation: `#rrggbb` or `#rrggbbaa`
    pub fn to_css_hex(&self) -> String {
        match *self {
            Color::Rgb { r, g, b } => format!("#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba { r, g, b, a } => format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
        }
    }

    pub const BLACK: Color = Color::Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_hex())
    }
}

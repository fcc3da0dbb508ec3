//! RGB color type, predefined palette constants, and hex parsing.

use serde::{Deserialize, Serialize};

/// Represents an opaque RGB color with 8-bit components.
///
/// Strokes are always painted fully opaque; transparency only exists on the
/// surface itself (unpainted pixels), so no alpha component is carried here.
///
/// # Examples
///
/// ```
/// use inkboard::draw::Color;
/// let red = Color { r: 255, g: 0, b: 0 };
/// assert_eq!(Color::from_hex("#ff0000"), Some(red));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB components.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` hex string (case-insensitive, leading `#` optional).
    ///
    /// This is the format produced by free-form color inputs. Returns `None`
    /// for malformed strings.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Formats the color as a lowercase `#rrggbb` hex string.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ============================================================================
// Predefined Color Constants (default swatch palette)
// ============================================================================

/// Predefined red color
pub const RED: Color = Color { r: 255, g: 0, b: 0 };

/// Predefined green color
pub const GREEN: Color = Color { r: 0, g: 255, b: 0 };

/// Predefined blue color
pub const BLUE: Color = Color { r: 0, g: 0, b: 255 };

/// Predefined yellow color
pub const YELLOW: Color = Color {
    r: 255,
    g: 255,
    b: 0,
};

/// Predefined orange color
pub const ORANGE: Color = Color {
    r: 255,
    g: 128,
    b: 0,
};

/// Predefined pink/magenta color
pub const PINK: Color = Color {
    r: 255,
    g: 0,
    b: 255,
};

/// Predefined white color (also the default surface background)
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

/// Predefined black color (default pen color)
pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

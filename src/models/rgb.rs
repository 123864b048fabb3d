//! RGB color handling with hex parsing.

use anyhow::{Context, Result};
use std::fmt;

/// RGB color value parsed from a swatch's hex string.
///
/// Swatch values are never validated; this type is only used to paint them.
/// Values that don't parse are shown as unknown colors but stay selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports "#RRGGBB", "RRGGBB", and the CSS shorthand "#RGB".
    ///
    /// # Examples
    ///
    /// ```
    /// use teamcolors::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#9E1B32").unwrap();
    /// assert_eq!(color, RgbColor::new(158, 27, 50));
    ///
    /// let color = RgbColor::from_hex("#FFF").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 255, 255));
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.is_ascii() {
            anyhow::bail!("Invalid hex color '{hex}'. Expected ASCII hex digits");
        }

        let channel = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16)
                .context(format!("Invalid {name} channel in hex color '{hex}'"))
        };

        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2], "red")?,
                channel(&hex[2..4], "green")?,
                channel(&hex[4..6], "blue")?,
            )),
            3 => {
                // #RGB expands each digit: #F80 == #FF8800
                let r = channel(&hex[0..1], "red")?;
                let g = channel(&hex[1..2], "green")?;
                let b = channel(&hex[2..3], "blue")?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 3 or 6 hex digits (RGB or RRGGBB)"
            ),
        }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(&self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

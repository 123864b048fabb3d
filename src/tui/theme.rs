//! Light and dark color roles for the TUI.
//!
//! School swatches are always painted in their own colors; the theme only
//! covers the chrome around them.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Color roles used by the widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Which variant these roles belong to
    pub variant: ThemeVariant,

    /// Titles, focused borders and section rules
    pub chrome: Color,
    /// Key names in hints and the help overlay
    pub hotkey: Color,
    /// Copy confirmations and selected-swatch marks
    pub confirm: Color,
    /// Error text
    pub error: Color,

    /// Body text
    pub text: Color,
    /// Labels and unselected tabs
    pub text_secondary: Color,
    /// Hints and empty states
    pub text_muted: Color,

    /// Background behind every widget
    pub background: Color,
    /// Background of the cursor row
    pub cursor_bg: Color,

    /// Border of the cursor card and the active tab
    pub focus: Color,
    /// Borders of everything without focus
    pub idle: Color,
}

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark background
    Dark,
    /// Light background
    Light,
}

impl Theme {
    /// Follows the OS appearance.
    ///
    /// Unknown or undetectable modes fall back to light.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Dark) => Self::dark(),
            Ok(dark_light::Mode::Light | dark_light::Mode::Unspecified) | Err(_) => Self::light(),
        }
    }

    /// Resolves a configured mode to a theme.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Auto => Self::detect(),
        }
    }

    /// High-contrast roles for dark terminals.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,
            chrome: Color::LightBlue,
            hotkey: Color::Rgb(255, 200, 60),
            confirm: Color::LightGreen,
            error: Color::LightRed,

            text: Color::Rgb(235, 235, 235),
            text_secondary: Color::Rgb(170, 170, 170),
            text_muted: Color::Rgb(110, 110, 110),

            background: Color::Rgb(18, 18, 24),
            cursor_bg: Color::Rgb(50, 54, 70),

            focus: Color::Rgb(255, 200, 60),
            idle: Color::Rgb(90, 90, 100),
        }
    }

    /// The default look.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,
            chrome: Color::Rgb(30, 70, 160),
            hotkey: Color::Rgb(170, 90, 0),
            confirm: Color::Rgb(20, 120, 40),
            error: Color::Rgb(190, 20, 30),

            text: Color::Rgb(20, 20, 20),
            text_secondary: Color::Rgb(70, 70, 70),
            text_muted: Color::Rgb(130, 130, 130),

            background: Color::Rgb(250, 250, 250),
            cursor_bg: Color::Rgb(220, 228, 245),

            focus: Color::Rgb(170, 90, 0),
            idle: Color::Rgb(190, 190, 190),
        }
    }

    /// Whether this is the dark variant.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self.variant, ThemeVariant::Dark)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes and the persisted theme mode.

use crate::ui::design_tokens::palette;
use dark_light;
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub frame_background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Placard (artwork caption strip)
    pub placard_background: Color,
    pub placard_text: Color,
}

impl ColorScheme {
    /// Light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            frame_background: palette::WHITE,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            placard_background: palette::PLACARD_LIGHT,
            placard_text: palette::GRAY_900,
        }
    }

    /// Dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            frame_background: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,

            placard_background: palette::PLACARD_DARK,
            placard_text: palette::GRAY_100,
        }
    }

    /// Detects the system theme and returns the matching `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }
}

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Resolved theme: the mode plus the colors it selects.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }
}

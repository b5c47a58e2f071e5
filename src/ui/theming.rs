// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming for the comparison viewer.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_frame: Color,
    pub border: Color,

    // Text colors
    pub text_muted: Color,

    // Accent used by the divider and the handle
    pub accent: Color,
    pub on_accent: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::STONE_100,
            surface_frame: palette::STONE_50,
            border: palette::STONE_200,

            text_muted: palette::STONE_500,

            accent: palette::ACCENT_500,
            on_accent: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::NEUTRAL_900,
            surface_frame: palette::NEUTRAL_950,
            border: palette::NEUTRAL_800,

            text_muted: palette::STONE_400,

            accent: palette::ACCENT_500,
            on_accent: palette::WHITE,
        }
    }

    /// Picks the scheme matching an Iced theme's background brightness.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

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

    /// Resolves the mode into one of Iced's built-in themes.
    #[must_use]
    pub fn to_iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

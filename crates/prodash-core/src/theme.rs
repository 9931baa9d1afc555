//! Theme mode and the resolved color tokens consumed by layouts.
//!
//! # Design
//! - Tokens are derived from tenant branding and the active mode, never stored independently.
//! - Each tenant palette carries all five colors; dark mode keeps a light surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DemoError;
use crate::tenant::Branding;

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light theme mode.
    #[default]
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in URLs and CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// All supported modes for toggle controls.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Light, Self::Dark]
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = DemoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(DemoError::InvalidThemeMode {
                value: value.to_string(),
            }),
        }
    }
}

/// CSS custom property names, in the order [`ThemeTokens::css_variables`] yields them.
pub const CSS_VARIABLES: [&str; 5] = [
    "--color-primary",
    "--color-secondary",
    "--color-accent",
    "--color-background",
    "--color-text",
];

/// Resolved color values for the active tenant and mode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    /// Brand primary color.
    pub primary_color: String,
    /// Brand secondary color.
    pub secondary_color: String,
    /// Accent color for callouts and interactive elements.
    pub accent_color: String,
    /// Page background color.
    pub background_color: String,
    /// Body text color.
    pub text_color: String,
}

impl ThemeTokens {
    /// Derive tokens from the tenant palette for `mode`.
    #[must_use]
    pub fn derive(branding: &Branding, mode: ThemeMode) -> Self {
        let palette = branding.palette(mode);
        Self {
            primary_color: palette.primary.clone(),
            secondary_color: palette.secondary.clone(),
            accent_color: palette.accent.clone(),
            background_color: palette.background.clone(),
            text_color: palette.text.clone(),
        }
    }

    /// Pairs of CSS custom property name and value.
    #[must_use]
    pub fn css_variables(&self) -> [(&'static str, &str); 5] {
        [
            (CSS_VARIABLES[0], self.primary_color.as_str()),
            (CSS_VARIABLES[1], self.secondary_color.as_str()),
            (CSS_VARIABLES[2], self.accent_color.as_str()),
            (CSS_VARIABLES[3], self.background_color.as_str()),
            (CSS_VARIABLES[4], self.text_color.as_str()),
        ]
    }

    /// Render the tokens as a CSS rule for `selector`.
    #[must_use]
    pub fn to_css_block(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.css_variables() {
            css.push_str("  ");
            css.push_str(name);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }
        css.push('}');
        css
    }
}

//! Theme configuration for TUI and CLI
//!
//! Centralizes all color definitions. Style derivation for ratatui lives in
//! `tui.rs`, ANSI rendering for one-shot CLI output in `cli.rs`.

use std::str::FromStr;

use ratatui::style::Color;

use crate::config::{ThemeColors, ThemeConfig};

pub mod cli;
pub mod tui;

pub use cli::{color_to_ansi, line_to_ansi, ANSI_RESET};
pub use tui::{StyleRole, Styles};

/// Errors raised while building a theme from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("Unknown theme preset '{0}' (expected default, classic or ocean)")]
    UnknownPreset(String),

    #[error("Invalid color for theme.colors.{key}: '{value}'")]
    InvalidColor { key: &'static str, value: String },
}

/// Theme colors for the dashboard chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Main content text
    pub primary_text: Color,
    /// Prompts and secondary labels
    pub secondary_text: Color,
    /// Placeholders and de-emphasized info
    pub faint_text: Color,
    /// Background of the footer row
    pub footer_background: Color,
    pub faint_border: Color,
    /// Foreground of the inactive view button. When unset, gray text falls
    /// back to `faint_text`.
    pub inactive_view: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dash()
    }
}

impl Theme {
    /// Default theme - muted indigo palette.
    pub fn dash() -> Self {
        Self {
            primary_text: Color::Rgb(0xE2, 0xE1, 0xED),
            secondary_text: Color::Rgb(0x66, 0x6C, 0xA6),
            faint_text: Color::Rgb(0x3E, 0x40, 0x57),
            footer_background: Color::Rgb(0x24, 0x23, 0x47),
            faint_border: Color::Rgb(0x2B, 0x2B, 0x40),
            inactive_view: None,
        }
    }

    /// Classic terminal theme - standard ANSI colors.
    pub fn classic() -> Self {
        Self {
            primary_text: Color::White,
            secondary_text: Color::Yellow,
            faint_text: Color::DarkGray,
            footer_background: Color::Black,
            faint_border: Color::DarkGray,
            inactive_view: Some(Color::Gray),
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            primary_text: Color::Cyan,
            secondary_text: Color::LightCyan,
            faint_text: Color::DarkGray,
            footer_background: Color::Reset,
            faint_border: Color::DarkGray,
            inactive_view: None,
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Result<Self, ThemeError> {
        match name {
            "default" | "dash" => Ok(Self::dash()),
            "classic" => Ok(Self::classic()),
            "ocean" => Ok(Self::ocean()),
            other => Err(ThemeError::UnknownPreset(other.to_string())),
        }
    }

    /// Build the theme from config: preset first, then per-color overrides.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let mut theme = Self::preset(&config.preset)?;
        theme.apply_overrides(&config.colors)?;
        Ok(theme)
    }

    fn apply_overrides(&mut self, colors: &ThemeColors) -> Result<(), ThemeError> {
        let slots: [(&'static str, &Option<String>, &mut Color); 5] = [
            ("primary_text", &colors.primary_text, &mut self.primary_text),
            ("secondary_text", &colors.secondary_text, &mut self.secondary_text),
            ("faint_text", &colors.faint_text, &mut self.faint_text),
            (
                "footer_background",
                &colors.footer_background,
                &mut self.footer_background,
            ),
            ("faint_border", &colors.faint_border, &mut self.faint_border),
        ];
        for (key, value, slot) in slots {
            if let Some(value) = value {
                *slot = parse_color(key, value)?;
            }
        }

        if let Some(value) = &colors.inactive_view {
            self.inactive_view = Some(parse_color("inactive_view", value)?);
        }
        Ok(())
    }

    /// Foreground used for gray, informational text.
    pub fn gray(&self) -> Color {
        self.inactive_view.unwrap_or(self.faint_text)
    }

    pub fn styles(&self) -> Styles {
        Styles::new(self)
    }
}

fn parse_color(key: &'static str, value: &str) -> Result<Color, ThemeError> {
    Color::from_str(value.trim()).map_err(|_| ThemeError::InvalidColor {
        key,
        value: value.to_string(),
    })
}

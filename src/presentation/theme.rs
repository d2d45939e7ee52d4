//! Color theme.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use crate::infrastructure::config::UiConfig;

/// Colors shared by all widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Titles, borders and focused inputs.
    pub accent: Color,
    /// Error text.
    pub error: Color,
    /// Secondary text.
    pub muted: Color,
}

impl Theme {
    /// Builds the theme from UI configuration, falling back to cyan on an
    /// unknown accent color.
    #[must_use]
    pub fn from_config(config: &UiConfig) -> Self {
        let accent = Color::from_str(&config.accent_color).unwrap_or_else(|_| {
            warn!(color = %config.accent_color, "Unknown accent color, using default");
            Color::Cyan
        });
        Self {
            accent,
            ..Self::default()
        }
    }

    /// Style for titles.
    #[must_use]
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Style for error messages.
    #[must_use]
    pub fn error_text(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for hints and secondary text.
    #[must_use]
    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            error: Color::Red,
            muted: Color::DarkGray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_from_name() {
        let config = UiConfig {
            accent_color: "yellow".to_string(),
            ..UiConfig::default()
        };
        assert_eq!(Theme::from_config(&config).accent, Color::Yellow);
    }

    #[test]
    fn test_accent_from_hex() {
        let config = UiConfig {
            accent_color: "#ff8800".to_string(),
            ..UiConfig::default()
        };
        assert_eq!(Theme::from_config(&config).accent, Color::Rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_unknown_accent_falls_back() {
        let config = UiConfig {
            accent_color: "not-a-color".to_string(),
            ..UiConfig::default()
        };
        assert_eq!(Theme::from_config(&config).accent, Color::Cyan);
    }
}

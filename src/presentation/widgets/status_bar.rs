//! Status bar widget.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status bar severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Informational.
    Info,
    /// Warning.
    Warning,
}

impl StatusLevel {
    /// Returns color for level.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Warning => Color::Yellow,
        }
    }
}

/// One-line footer: a message on the left, key hints on the right.
#[derive(Debug, Clone)]
pub struct StatusBar {
    left: String,
    right: String,
    level: StatusLevel,
}

impl StatusBar {
    /// Creates empty status bar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: String::new(),
            right: String::new(),
            level: StatusLevel::Info,
        }
    }

    /// Sets left content.
    #[must_use]
    pub fn left(mut self, content: impl Into<String>) -> Self {
        self.left = content.into();
        self
    }

    /// Sets right content.
    #[must_use]
    pub fn right(mut self, content: impl Into<String>) -> Self {
        self.right = content.into();
        self
    }

    /// Sets status level.
    #[must_use]
    pub const fn level(mut self, level: StatusLevel) -> Self {
        self.level = level;
        self
    }

    /// Creates warning status bar.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new().left(message).level(StatusLevel::Warning)
    }

    /// Returns the left-hand message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.left
    }

    /// Returns the severity of the left-hand message.
    #[must_use]
    pub const fn status_level(&self) -> StatusLevel {
        self.level
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let right_width = u16::try_from(unicode_width::UnicodeWidthStr::width(self.right.as_str()))
            .unwrap_or(u16::MAX);
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(right_width)]).areas(area);

        Paragraph::new(Line::from(Span::styled(
            self.left.as_str(),
            Style::default()
                .fg(self.level.color())
                .add_modifier(Modifier::BOLD),
        )))
        .render(left, buf);

        Paragraph::new(Line::from(Span::styled(
            self.right.as_str(),
            Style::default().fg(Color::DarkGray),
        )))
        .render(right, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let bar = StatusBar::warning("Fill in all fields").right("Tab: Next");
        assert_eq!(bar.message(), "Fill in all fields");
        assert_eq!(bar.status_level(), StatusLevel::Warning);
    }

    #[test]
    fn test_render_places_hints_right() {
        let bar = StatusBar::new().left("Ready").right("Ctrl+Q: Quit");
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        (&bar).render(area, &mut buf);

        let line: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(line.starts_with("Ready"));
        assert!(line.ends_with("Ctrl+Q: Quit"));
    }
}

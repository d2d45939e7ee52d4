//! Event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Screen-level commands bound to keys. Anything else is text editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Submit,
    NextField,
    PrevField,
    SelectNext,
    SelectPrev,
    Delete,
}

impl KeyAction {
    /// Maps a key press to a screen command.
    #[must_use]
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c' | 'q') if ctrl => Some(Self::Quit),
            KeyCode::Char('d') if ctrl => Some(Self::Delete),
            KeyCode::Enter => Some(Self::Submit),
            KeyCode::Tab => Some(Self::NextField),
            KeyCode::BackTab => Some(Self::PrevField),
            KeyCode::Down | KeyCode::PageDown => Some(Self::SelectNext),
            KeyCode::Up | KeyCode::PageUp => Some(Self::SelectPrev),
            _ => None,
        }
    }
}

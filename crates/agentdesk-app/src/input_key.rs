//! Terminal-independent input events.
//!
//! The TUI converts crossterm events into these at its boundary so the
//! update loop never sees terminal library types.

/// A key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (letters, digits, `*`, space)
    Char(char),
    /// Character with Ctrl held (Ctrl+c)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

impl InputKey {
    /// Character a text field should insert for this key, if any.
    pub fn as_text(&self) -> Option<char> {
        match self {
            InputKey::Char(c) => Some(*c),
            _ => None,
        }
    }
}

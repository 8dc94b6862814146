//! Abstract input key event, independent of terminal library.
//!
//! Converted from `crossterm::event::KeyEvent` at the TUI boundary so the
//! update loop and host apps never depend on crossterm directly.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// Short label used in toolbar hints (e.g. "F3", "^C").
    pub fn label(&self) -> String {
        match self {
            InputKey::Char(c) => c.to_string(),
            InputKey::CharCtrl(c) => format!("^{}", c.to_ascii_uppercase()),
            InputKey::F(n) => format!("F{n}"),
            other => format!("{other:?}"),
        }
    }
}

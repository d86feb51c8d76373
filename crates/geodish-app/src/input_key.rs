//! Abstract input key event, independent of terminal library.
//!
//! Converted from crossterm::event::KeyEvent at the TUI boundary so this
//! crate never depends on terminal-specific types.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('s'), InputKey::Char('s'));
        assert_ne!(InputKey::Char('s'), InputKey::CharCtrl('s'));
        assert_ne!(InputKey::Tab, InputKey::BackTab);
    }
}

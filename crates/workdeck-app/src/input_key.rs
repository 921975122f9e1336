//! Abstract input events, independent of terminal library.
//!
//! `InputKey` and `Click` abstract keyboard and mouse input from crossterm so
//! the application layer can be driven and tested without a terminal.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    Up,
    Down,

    Enter,
    Esc,
    Backspace,
}

/// Left mouse button press at a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub column: u16,
    pub row: u16,
}

impl Click {
    pub fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_eq!(InputKey::CharCtrl('c'), InputKey::CharCtrl('c'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_click_new() {
        let click = Click::new(3, 7);
        assert_eq!(click.column, 3);
        assert_eq!(click.row, 7);
    }
}

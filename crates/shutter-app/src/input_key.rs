//! Keyboard input as the update handlers see it
//!
//! The TUI converts terminal key events into [`InputKey`] before they reach
//! `handler::update`, so nothing in this crate depends on crossterm.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character
    Char(char),
    /// Character with Ctrl held (Ctrl+c, Ctrl+u, ...)
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

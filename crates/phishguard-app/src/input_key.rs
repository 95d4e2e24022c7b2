//! Abstract input key event, independent of terminal library.
//!
//! Keeps phishguard-app free of crossterm types so the headless runner and
//! tests can drive the update loop directly.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+s, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    // Action keys
    /// Enter/Return key
    Enter,
    /// Enter with Ctrl held (only reported by terminals with enhanced key reporting)
    CtrlEnter,
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    Backspace,
    Delete,

    // Function keys
    /// Function key (F1-F12)
    F(u8),
}

use std::fmt;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Symbolic name of a key, independent of how the terminal encoded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyName {
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Enter,
    Escape,
    Backspace,
    Resize,
    Char(char),
    Ctrl(char),
    Alt(char),
    /// A key we can name but never bind (function keys, Home, ...).
    Other(String),
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyName::Up => f.write_str("KEY_UP"),
            KeyName::Down => f.write_str("KEY_DOWN"),
            KeyName::Left => f.write_str("KEY_LEFT"),
            KeyName::Right => f.write_str("KEY_RIGHT"),
            KeyName::PageUp => f.write_str("KEY_PPAGE"),
            KeyName::PageDown => f.write_str("KEY_NPAGE"),
            KeyName::Enter => f.write_str("KEY_ENTER"),
            KeyName::Escape => f.write_str("KEY_ESC"),
            KeyName::Backspace => f.write_str("KEY_BACKSPACE"),
            KeyName::Resize => f.write_str("KEY_RESIZE"),
            KeyName::Char(c) => write!(f, "{c}"),
            KeyName::Ctrl(c) => write!(f, "^{}", c.to_ascii_uppercase()),
            KeyName::Alt(c) => write!(f, "M-{c}"),
            KeyName::Other(name) => f.write_str(name),
        }
    }
}

/// How the loop waits for the next key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Wait until a key arrives.
    Blocking,
    /// Give up after the duration and report no key.
    Polling(Duration),
}

/// Translate a raw crossterm key event into its symbolic name.
pub fn key_name(key: KeyEvent) -> KeyName {
    match (key.modifiers, key.code) {
        (m, KeyCode::Char(c)) if m.contains(KeyModifiers::CONTROL) => {
            KeyName::Ctrl(c.to_ascii_lowercase())
        }
        (m, KeyCode::Char(c)) if m.contains(KeyModifiers::ALT) => KeyName::Alt(c),
        (_, KeyCode::Char(c)) => KeyName::Char(c),
        (_, KeyCode::Up) => KeyName::Up,
        (_, KeyCode::Down) => KeyName::Down,
        (_, KeyCode::Left) => KeyName::Left,
        (_, KeyCode::Right) => KeyName::Right,
        (_, KeyCode::PageUp) => KeyName::PageUp,
        (_, KeyCode::PageDown) => KeyName::PageDown,
        (_, KeyCode::Enter) => KeyName::Enter,
        (_, KeyCode::Esc) => KeyName::Escape,
        (_, KeyCode::Backspace) => KeyName::Backspace,
        (_, KeyCode::F(n)) => KeyName::Other(format!("KEY_F{n}")),
        (_, code) => KeyName::Other(format!("KEY_{code:?}").to_uppercase()),
    }
}

/// Read the next key from the terminal.
///
/// Returns `Ok(None)` when polling timed out. Mouse, focus and paste events
/// are skipped, as are key releases on terminals that report them.
pub fn read_key(mode: InputMode) -> std::io::Result<Option<KeyName>> {
    loop {
        if let InputMode::Polling(timeout) = mode
            && !event::poll(timeout)?
        {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let name = key_name(key);
                log::debug!("Received key {:?} with {:?} ({})", key.code, key.modifiers, name);
                return Ok(Some(name));
            }
            Event::Resize(width, height) => {
                log::debug!("Terminal resized to {}x{}", width, height);
                return Ok(Some(KeyName::Resize));
            }
            _ => {
                if matches!(mode, InputMode::Polling(_)) {
                    return Ok(None);
                }
            }
        }
    }
}

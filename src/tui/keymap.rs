//! # Key Bindings
//!
//! Fixed table from symbolic key names to the commands the controller
//! knows how to run.

use crate::tui::event::KeyName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Next key is an Alt-combination for the focused pane.
    AltPrefix,
    Resize,
    FocusPrevious,
    FocusNext,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    HalfPageDown,
    HalfPageUp,
    Activate,
    /// Pop the top layout and return to its parent.
    Back,
}

pub const BINDINGS: &[(KeyName, Command)] = &[
    (KeyName::Char('q'), Command::Quit),
    (KeyName::Ctrl('c'), Command::Quit),
    (KeyName::Escape, Command::AltPrefix),
    (KeyName::Resize, Command::Resize),
    (KeyName::Left, Command::FocusPrevious),
    (KeyName::Char('h'), Command::FocusPrevious),
    (KeyName::Right, Command::FocusNext),
    (KeyName::Char('l'), Command::FocusNext),
    (KeyName::Down, Command::ScrollDown),
    (KeyName::Char('j'), Command::ScrollDown),
    (KeyName::Up, Command::ScrollUp),
    (KeyName::Char('k'), Command::ScrollUp),
    (KeyName::PageDown, Command::PageDown),
    (KeyName::PageUp, Command::PageUp),
    (KeyName::Ctrl('d'), Command::HalfPageDown),
    (KeyName::Ctrl('u'), Command::HalfPageUp),
    (KeyName::Enter, Command::Activate),
    (KeyName::Char('\n'), Command::Activate),
    (KeyName::Backspace, Command::Back),
];

pub fn lookup(key: &KeyName) -> Option<Command> {
    BINDINGS
        .iter()
        .find(|(bound, _)| bound == key)
        .map(|(_, command)| *command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vi_and_arrow_keys_agree() {
        assert_eq!(lookup(&KeyName::Char('j')), lookup(&KeyName::Down));
        assert_eq!(lookup(&KeyName::Char('k')), lookup(&KeyName::Up));
        assert_eq!(lookup(&KeyName::Char('h')), lookup(&KeyName::Left));
        assert_eq!(lookup(&KeyName::Char('l')), lookup(&KeyName::Right));
    }

    #[test]
    fn test_unbound_keys() {
        assert_eq!(lookup(&KeyName::Char('z')), None);
        assert_eq!(lookup(&KeyName::Other("KEY_F5".into())), None);
    }

    #[test]
    fn test_every_key_bound_once() {
        for (i, (key, _)) in BINDINGS.iter().enumerate() {
            assert!(
                BINDINGS[i + 1..].iter().all(|(other, _)| other != key),
                "{key} bound twice"
            );
        }
    }
}

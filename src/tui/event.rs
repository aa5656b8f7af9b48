//! Event handling utilities for tui-realm integration.

use std::sync::LazyLock;

use crossterm_actions::{TuiEvent, TuiRealmDispatcher, emacs_defaults};
use tuirealm::event::{Key as TermKey, KeyEvent, KeyModifiers};

use crate::gui::{Key, KeyInput};

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

/// Global dispatcher instance - shared by all components.
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<TuiEvent>> =
    LazyLock::new(|| TuiRealmDispatcher::new(emacs_defaults()));

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<TuiEvent> {
    &DISPATCHER
}

/// Translate a terminal key into panel input. Keys the panel has no use
/// for map to `None`.
pub fn key_input(event: &KeyEvent) -> Option<KeyInput> {
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);
    let key = match event.code {
        TermKey::Char(c) => Key::Char(c),
        TermKey::Backspace => Key::Backspace,
        TermKey::Delete => Key::Delete,
        TermKey::Left => Key::Left,
        TermKey::Right => Key::Right,
        TermKey::Home => Key::Home,
        TermKey::End => Key::End,
        TermKey::Tab => Key::Tab,
        TermKey::BackTab => return Some(KeyInput::shifted(Key::Tab)),
        TermKey::Enter => Key::Enter,
        TermKey::Esc => Key::Escape,
        _ => return None,
    };
    Some(KeyInput { key, shift })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_tab_is_shifted_tab() {
        let event = KeyEvent::new(TermKey::BackTab, KeyModifiers::NONE);
        assert_eq!(key_input(&event), Some(KeyInput::shifted(Key::Tab)));
    }

    #[test]
    fn test_unmapped_keys_are_dropped() {
        let event = KeyEvent::new(TermKey::PageUp, KeyModifiers::NONE);
        assert_eq!(key_input(&event), None);
    }
}

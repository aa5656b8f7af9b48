//! Host-neutral keyboard input.

/// Non-character keys the widgets react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Tab,
    Enter,
    Escape,
}

/// One key event delivered to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: Key,
    /// Shift held; reverses focus cycling.
    pub shift: bool,
}

impl KeyInput {
    pub const fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub const fn char(c: char) -> Self {
        Self::new(Key::Char(c))
    }

    pub const fn shifted(key: Key) -> Self {
        Self { key, shift: true }
    }

    /// Expand typed text into one event per character.
    pub fn text(s: &str) -> Vec<KeyInput> {
        s.chars().map(Self::char).collect()
    }
}

impl From<Key> for KeyInput {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

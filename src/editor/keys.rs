//! Keys understood by the line editor and the sources that produce them.

use std::collections::VecDeque;

use crate::error::Dsp420Error;

/// A decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character
    Char(char),
    Left,
    Right,
    Enter,
    Backspace,
    Delete,
    Escape,
    /// Anything else; the editor ignores it
    Other,
}

impl Key {
    /// Decode a raw key code as delivered by a terminal in raw mode.
    ///
    /// | Code | Key |
    /// |------|-----|
    /// | 10, 13 | Enter |
    /// | 27 | Escape |
    /// | 8, 127 | Backspace |
    /// | 32–126, 128 | Char |
    /// | other | Other |
    pub fn from_ascii(code: u32) -> Self {
        match code {
            10 | 13 => Self::Enter,
            27 => Self::Escape,
            8 | 127 => Self::Backspace,
            32..=126 | 128 => char::from_u32(code).map_or(Self::Other, Self::Char),
            _ => Self::Other,
        }
    }

    /// Decode a character, routing control codes through [`Key::from_ascii`].
    pub fn from_char(c: char) -> Self {
        Self::from_ascii(c as u32)
    }

    /// Whether the editor should insert this key into the buffer.
    pub fn is_printable(&self) -> bool {
        match self {
            // 127 (DEL) is in the range but always means backspace
            Self::Char(c) => (32..=128).contains(&(*c as u32)) && *c != '\u{7f}',
            _ => false,
        }
    }
}

/// Blocking source of keypresses.
///
/// `next_key` waits indefinitely; there is no timeout.
pub trait KeySource {
    fn next_key(&mut self) -> Result<Key, Dsp420Error>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn next_key(&mut self) -> Result<Key, Dsp420Error> {
        (**self).next_key()
    }
}

/// A fixed queue of keys, for tests and scripted input.
///
/// Running out of keys is an `Input` error, so a script that never presses
/// Enter or Escape fails instead of hanging.
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// One key per character of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.chars().map(Key::from_char))
    }

    /// Append more keys.
    pub fn then(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Key, Dsp420Error> {
        self.keys
            .pop_front()
            .ok_or_else(|| Dsp420Error::Input("key script exhausted".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ascii() {
        assert_eq!(Key::from_ascii(10), Key::Enter);
        assert_eq!(Key::from_ascii(13), Key::Enter);
        assert_eq!(Key::from_ascii(27), Key::Escape);
        assert_eq!(Key::from_ascii(127), Key::Backspace);
        assert_eq!(Key::from_ascii(b'a' as u32), Key::Char('a'));
        assert_eq!(Key::from_ascii(b' ' as u32), Key::Char(' '));
        assert_eq!(Key::from_ascii(1), Key::Other);
        assert_eq!(Key::from_ascii(300), Key::Other);
    }

    #[test]
    fn test_printable() {
        assert!(Key::Char('a').is_printable());
        assert!(Key::Char('~').is_printable());
        assert!(Key::Char('\u{80}').is_printable());
        assert!(!Key::Char('\u{7f}').is_printable());
        assert!(!Key::Char('\u{1}').is_printable());
        assert!(!Key::Char('é').is_printable());
        assert!(!Key::Left.is_printable());
    }

    #[test]
    fn test_decoded_chars_agree_with_printable() {
        for code in 0..=300u32 {
            let key = Key::from_ascii(code);
            if let Key::Char(_) = key {
                assert!(key.is_printable(), "code {} decoded but not insertable", code);
            }
        }
        assert_eq!(Key::from_ascii(128), Key::Char('\u{80}'));
        assert!(Key::from_ascii(128).is_printable());
        assert_eq!(Key::from_ascii(129), Key::Other);
    }

    #[test]
    fn test_scripted_keys() {
        let mut keys = ScriptedKeys::from_text("ab\n");
        assert_eq!(keys.next_key().unwrap(), Key::Char('a'));
        assert_eq!(keys.next_key().unwrap(), Key::Char('b'));
        assert_eq!(keys.next_key().unwrap(), Key::Enter);
        assert!(matches!(keys.next_key(), Err(Dsp420Error::Input(_))));
    }

    #[test]
    fn test_scripted_then() {
        let keys = ScriptedKeys::from_text("x").then([Key::Left, Key::Enter]);
        assert_eq!(keys.remaining(), 3);
    }
}

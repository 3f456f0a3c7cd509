//! Keyboard input from the controlling terminal.
//!
//! The terminal is switched to raw mode for as long as a [`TerminalKeys`]
//! exists so single keypresses arrive without waiting for Enter.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::debug;

use super::keys::{Key, KeySource};
use crate::error::Dsp420Error;

/// Raw-mode terminal key source. Raw mode is restored on drop.
#[derive(Debug)]
pub struct TerminalKeys {
    _raw: (),
}

impl TerminalKeys {
    pub fn new() -> Result<Self, Dsp420Error> {
        terminal::enable_raw_mode()
            .map_err(|e| Dsp420Error::Input(format!("Failed to enable raw mode: {}", e)))?;
        debug!("terminal raw mode on");
        Ok(Self { _raw: () })
    }
}

impl Drop for TerminalKeys {
    fn drop(&mut self) {
        // Nothing useful to do if the terminal is already gone.
        let _ = terminal::disable_raw_mode();
        debug!("terminal raw mode off");
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Key, Dsp420Error> {
        loop {
            let event =
                event::read().map_err(|e| Dsp420Error::Input(format!("Failed to read key: {}", e)))?;
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Release {
                    return Ok(map_key(key));
                }
            }
        }
    }
}

/// Translate a crossterm key event.
///
/// Ctrl+C and Ctrl+D map to Escape, since raw mode swallows the signal.
pub fn map_key(event: KeyEvent) -> Key {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    match event.code {
        KeyCode::Char('c' | 'd') if ctrl => Key::Escape,
        KeyCode::Char(_) if ctrl => Key::Other,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn test_map_printable() {
        assert_eq!(map_key(key_event(KeyCode::Char('a'), KeyModifiers::NONE)), Key::Char('a'));
        assert_eq!(map_key(key_event(KeyCode::Char('A'), KeyModifiers::SHIFT)), Key::Char('A'));
    }

    #[test]
    fn test_map_editing_keys() {
        assert_eq!(map_key(key_event(KeyCode::Enter, KeyModifiers::NONE)), Key::Enter);
        assert_eq!(map_key(key_event(KeyCode::Esc, KeyModifiers::NONE)), Key::Escape);
        assert_eq!(map_key(key_event(KeyCode::Backspace, KeyModifiers::NONE)), Key::Backspace);
        assert_eq!(map_key(key_event(KeyCode::Delete, KeyModifiers::NONE)), Key::Delete);
        assert_eq!(map_key(key_event(KeyCode::Left, KeyModifiers::NONE)), Key::Left);
        assert_eq!(map_key(key_event(KeyCode::Right, KeyModifiers::NONE)), Key::Right);
    }

    #[test]
    fn test_map_ctrl() {
        assert_eq!(map_key(key_event(KeyCode::Char('c'), KeyModifiers::CONTROL)), Key::Escape);
        assert_eq!(map_key(key_event(KeyCode::Char('x'), KeyModifiers::CONTROL)), Key::Other);
    }

    #[test]
    fn test_map_unhandled() {
        assert_eq!(map_key(key_event(KeyCode::Up, KeyModifiers::NONE)), Key::Other);
        assert_eq!(map_key(key_event(KeyCode::F(1), KeyModifiers::NONE)), Key::Other);
    }
}

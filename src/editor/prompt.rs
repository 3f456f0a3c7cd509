//! # Display Prompt
//!
//! Runs a [`LineEditor`] against the display: the title goes on the top row,
//! the editable line on the bottom row, and keys come from a [`KeySource`].
//!
//! ```text
//! ┌────────────────────┐
//! │Item name:          │
//! │? milk_             │
//! └────────────────────┘
//! ```

use tracing::debug;

use super::keys::KeySource;
use super::line::{LineEditor, VIEW_WIDTH};
use crate::display::{DisplaySession, Region, SharedDisplay, lock};
use crate::error::Dsp420Error;
use crate::transport::Transport;

/// How a prompt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Enter was pressed; the buffer as it stood
    Committed(String),
    /// Escape was pressed
    Cancelled,
}

impl PromptOutcome {
    /// The committed text, or an empty string when cancelled.
    pub fn into_value(self) -> String {
        match self {
            Self::Committed(value) => value,
            Self::Cancelled => String::new(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Edit `initial_value` on the display until Enter or Escape.
///
/// ## Example
///
/// ```
/// use dsp420::display::DisplaySession;
/// use dsp420::editor::{Key, PromptOutcome, ScriptedKeys, run_prompt};
/// use dsp420::transport::MemoryTransport;
///
/// let mut display = DisplaySession::new(MemoryTransport::new());
/// let mut keys = ScriptedKeys::from_text("eggs").then([Key::Enter]);
///
/// let outcome = run_prompt(&mut display, &mut keys, "Item name:", "")?;
/// assert_eq!(outcome, PromptOutcome::Committed("eggs".to_string()));
/// # Ok::<(), dsp420::error::Dsp420Error>(())
/// ```
pub fn run_prompt<T, K>(
    display: &mut DisplaySession<T>,
    keys: &mut K,
    title: &str,
    initial_value: &str,
) -> Result<PromptOutcome, Dsp420Error>
where
    T: Transport,
    K: KeySource + ?Sized,
{
    run_prompt_at(display, keys, title, initial_value, 0)
}

/// [`run_prompt`] with the cursor starting at `cursor`.
///
/// Used when the first character of the answer was already typed before the
/// prompt opened: pass it as `initial_value` with `cursor = 1`.
pub fn run_prompt_at<T, K>(
    display: &mut DisplaySession<T>,
    keys: &mut K,
    title: &str,
    initial_value: &str,
    cursor: usize,
) -> Result<PromptOutcome, Dsp420Error>
where
    T: Transport,
    K: KeySource + ?Sized,
{
    display.write(&title_line(title), Region::TOP, true)?;

    let mut editor = LineEditor::new(initial_value).with_cursor(cursor);
    loop {
        display.write(&editor.render(), Region::BOTTOM, true)?;

        let key = keys.next_key()?;
        if let Some(outcome) = editor.handle_key(key) {
            debug!(?outcome, "prompt finished");
            return Ok(outcome);
        }
    }
}

/// [`run_prompt_at`] against a shared display.
///
/// The lock is taken per frame and released while waiting for a key, so a
/// background animation elsewhere on the display keeps running.
pub fn run_prompt_shared<T, K>(
    display: &SharedDisplay<T>,
    keys: &mut K,
    title: &str,
    initial_value: &str,
    cursor: usize,
) -> Result<PromptOutcome, Dsp420Error>
where
    T: Transport,
    K: KeySource + ?Sized,
{
    lock(display)?.write(&title_line(title), Region::TOP, true)?;

    let mut editor = LineEditor::new(initial_value).with_cursor(cursor);
    loop {
        let visible = editor.render();
        lock(display)?.write(&visible, Region::BOTTOM, true)?;

        let key = keys.next_key()?;
        if let Some(outcome) = editor.handle_key(key) {
            debug!(?outcome, "prompt finished");
            return Ok(outcome);
        }
    }
}

fn title_line(title: &str) -> String {
    format!("{:<width$}", title, width = VIEW_WIDTH)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{Key, ScriptedKeys};
    use crate::protocol::commands;
    use crate::transport::MemoryTransport;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn session() -> DisplaySession<MemoryTransport> {
        DisplaySession::new(MemoryTransport::new()).with_settle_delay(Duration::ZERO)
    }

    #[test]
    fn test_commit() {
        let mut display = session();
        let mut keys = ScriptedKeys::from_text("abc").then([Key::Enter]);
        let outcome = run_prompt(&mut display, &mut keys, "Name:", "").unwrap();
        assert_eq!(outcome, PromptOutcome::Committed("abc".to_string()));
    }

    #[test]
    fn test_cancel() {
        let mut display = session();
        let mut keys = ScriptedKeys::from_text("abc").then([Key::Escape]);
        let outcome = run_prompt(&mut display, &mut keys, "Name:", "old").unwrap();
        assert!(outcome.is_cancelled());
        assert_eq!(outcome.into_value(), "");
    }

    #[test]
    fn test_edit_existing_value() {
        let mut display = session();
        let mut keys = ScriptedKeys::new([Key::Delete, Key::Char('M'), Key::Enter]);
        let outcome = run_prompt(&mut display, &mut keys, "Item:", "milk").unwrap();
        assert_eq!(outcome.into_value(), "Milk");
    }

    #[test]
    fn test_initial_cursor() {
        let mut display = session();
        let mut keys = ScriptedKeys::from_text("ilk").then([Key::Enter]);
        let outcome = run_prompt_at(&mut display, &mut keys, "Item name:", "m", 1).unwrap();
        assert_eq!(outcome.into_value(), "milk");
    }

    #[test]
    fn test_first_frames() {
        let mut display = session();
        let mut keys = ScriptedKeys::new([Key::Enter]);
        run_prompt(&mut display, &mut keys, "Item name:", "").unwrap();

        let mut expected = commands::clear(1, 20);
        expected.extend(commands::set_cursor(1));
        expected.extend(b"Item name:          ");
        expected.extend(commands::clear(21, 40));
        expected.extend(commands::set_cursor(21));
        expected.extend(b"? _");
        assert_eq!(display.transport().bytes(), expected.as_slice());
    }

    #[test]
    fn test_redraws_after_each_key() {
        let mut display = session();
        let mut keys = ScriptedKeys::from_text("ab").then([Key::Enter]);
        run_prompt(&mut display, &mut keys, "T", "").unwrap();

        let bytes = display.transport().bytes();
        let text = String::from_utf8_lossy(bytes);
        assert!(text.contains("? _"));
        assert!(text.contains("? a_"));
        assert!(text.contains("? ab_"));
    }

    #[test]
    fn test_exhausted_keys_is_error() {
        let mut display = session();
        let mut keys = ScriptedKeys::from_text("abc");
        let err = run_prompt(&mut display, &mut keys, "T", "").unwrap_err();
        assert!(matches!(err, Dsp420Error::Input(_)));
    }

    #[test]
    fn test_connection_error_ends_prompt() {
        let mut display = session();
        display.transport_mut().disconnect();
        let mut keys = ScriptedKeys::new([Key::Enter]);
        let err = run_prompt(&mut display, &mut keys, "T", "").unwrap_err();
        assert!(matches!(err, Dsp420Error::Connection(_)));
        assert_eq!(keys.remaining(), 1);
    }

    #[test]
    fn test_shared_prompt() {
        let display = session().into_shared();
        let mut keys = ScriptedKeys::from_text("tea").then([Key::Enter]);
        let outcome = run_prompt_shared(&display, &mut keys, "Drink:", "", 0).unwrap();
        assert_eq!(outcome.into_value(), "tea");
        assert!(!lock(&display).unwrap().transport().bytes().is_empty());
    }
}

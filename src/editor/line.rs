//! # Line Editor State Machine
//!
//! Cursor and viewport bookkeeping for editing a string on the 20-cell
//! bottom row.
//!
//! ## Viewport
//!
//! The rendered line is `"? "` followed by the buffer, with the character
//! under the cursor replaced by `_`. When that line is wider than 20 cells
//! only `view_start..view_start + 20` is shown. Typing keeps the marker in
//! the last cell, but the Right rule trails one cell further behind, so
//! stepping right through existing text pushes the marker just past the
//! window from cursor 18 on:
//!
//! | Key | Cursor | View |
//! |-----|--------|------|
//! | printable | +1 after insert | +1 if `cursor + 2 >= view + 20` |
//! | Right | +1 | +1 if `cursor + 1 >= view + 20` |
//! | Left | -1 | `= cursor + 2` if `cursor + 2 < view` |
//! | Backspace | -1 after delete | same as Left |
//! | Delete | unchanged | unchanged |
//!
//! After every non-terminal key the cursor is clamped to the buffer length,
//! and a cursor at (or below) zero snaps both cursor and view back to 0.
//! The right edge has no such reset.

use super::prompt::PromptOutcome;
use super::keys::Key;

/// Cells available for the prompt line
pub const VIEW_WIDTH: usize = 20;

/// Prefix drawn before the buffer
pub const PROMPT_PREFIX: &str = "? ";

/// Drawn in the cell under the cursor
pub const CURSOR_MARKER: char = '_';

/// Editing state for one prompt invocation.
///
/// ## Example
///
/// ```
/// use dsp420::editor::{Key, LineEditor, PromptOutcome};
///
/// let mut editor = LineEditor::new("");
/// for c in "hi".chars() {
///     editor.handle_key(Key::Char(c));
/// }
/// assert_eq!(editor.render(), "? hi_");
/// assert_eq!(
///     editor.handle_key(Key::Enter),
///     Some(PromptOutcome::Committed("hi".to_string()))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEditor {
    buffer: Vec<char>,
    cursor: usize,
    view_start: usize,
}

impl LineEditor {
    /// Start editing `initial` with the cursor at the beginning.
    pub fn new(initial: &str) -> Self {
        Self {
            buffer: initial.chars().collect(),
            cursor: 0,
            view_start: 0,
        }
    }

    /// Place the cursor, clamped to the buffer length.
    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor.min(self.buffer.len());
        self
    }

    pub fn buffer(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn view_start(&self) -> usize {
        self.view_start
    }

    /// Apply one keypress.
    ///
    /// Returns the outcome for Enter and Escape; every other key leaves the
    /// editor running and returns `None`.
    pub fn handle_key(&mut self, key: Key) -> Option<PromptOutcome> {
        // Signed so that stepping left of zero can be observed and reset.
        let mut cursor = self.cursor as isize;
        let mut view = self.view_start as isize;
        let width = VIEW_WIDTH as isize;

        match key {
            Key::Enter => return Some(PromptOutcome::Committed(self.buffer())),
            Key::Escape => return Some(PromptOutcome::Cancelled),
            Key::Left => {
                cursor -= 1;
                if cursor + 2 < view {
                    view = cursor + 2;
                }
            }
            Key::Right => {
                cursor += 1;
                if cursor + 1 >= view + width {
                    view += 1;
                }
            }
            Key::Backspace => {
                if cursor > 0 {
                    self.buffer.remove(self.cursor - 1);
                }
                cursor -= 1;
                if cursor + 2 < view {
                    view = cursor + 2;
                }
            }
            Key::Delete => {
                if self.cursor < self.buffer.len() {
                    self.buffer.remove(self.cursor);
                }
            }
            Key::Char(c) if key.is_printable() => {
                self.buffer.insert(self.cursor, c);
                cursor += 1;
                if cursor + 2 >= view + width {
                    view += 1;
                }
            }
            Key::Char(_) | Key::Other => {}
        }

        let len = self.buffer.len() as isize;
        if cursor >= len {
            cursor = len;
        }
        if cursor <= 0 {
            cursor = 0;
            view = 0;
        }

        self.cursor = cursor as usize;
        self.view_start = view.max(0) as usize;
        None
    }

    /// The full prompt line before windowing.
    fn prompt_line(&self) -> String {
        let mut line = String::with_capacity(PROMPT_PREFIX.len() + self.buffer.len() + 1);
        line.push_str(PROMPT_PREFIX);
        line.extend(&self.buffer[..self.cursor]);
        line.push(CURSOR_MARKER);
        if self.cursor + 1 < self.buffer.len() {
            line.extend(&self.buffer[self.cursor + 1..]);
        }
        line
    }

    /// The 20 (or fewer) cells to draw on the prompt row.
    ///
    /// A line that fits entirely snaps the view back to the start.
    pub fn render(&mut self) -> String {
        let line = self.prompt_line();
        if line.chars().count() <= VIEW_WIDTH {
            self.view_start = 0;
        }
        line.chars().skip(self.view_start).take(VIEW_WIDTH).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

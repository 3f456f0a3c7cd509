//! # Line Editor
//!
//! Modal text entry on the 20-character prompt row.
//!
//! ## Modules
//!
//! - [`keys`]: Key decoding and key sources
//! - [`line`]: Cursor/viewport state machine
//! - [`prompt`]: Driving the editor against a display
//! - [`terminal`]: Raw-mode terminal key source

pub mod keys;
pub mod line;
pub mod prompt;
pub mod terminal;

pub use keys::{Key, KeySource, ScriptedKeys};
pub use line::LineEditor;
pub use prompt::{PromptOutcome, run_prompt, run_prompt_at, run_prompt_shared};
pub use terminal::TerminalKeys;

//! # Busy Spinner
//!
//! A one-cell "working..." indicator: `\`, `|`, `/`, `-`, repeated. Frames
//! are drawn without a pre-clear, so every frame goes through the settle
//! delay.

use std::time::Duration;

use super::{Animation, BackgroundTask};
use crate::display::{DisplaySession, Region, SharedDisplay};
use crate::error::Dsp420Error;
use crate::transport::Transport;

/// Spinner glyphs in drawing order
pub const FRAMES: [char; 4] = ['\\', '|', '/', '-'];

/// Cycles [`FRAMES`] in one cell.
#[derive(Debug, Clone)]
pub struct Spinner {
    position: u8,
    index: usize,
}

impl Spinner {
    /// Time between glyphs
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

    /// Top-right corner, the usual spot
    pub const DEFAULT_POSITION: u8 = 20;

    pub fn new(position: u8) -> Self {
        Self { position, index: 0 }
    }

    /// Start spinning on a background thread.
    pub fn spawn<T: Transport + 'static>(
        position: u8,
        display: SharedDisplay<T>,
        interval: Duration,
    ) -> BackgroundTask<Self> {
        BackgroundTask::spawn(Self::new(position), display, interval)
    }

    pub fn position(&self) -> u8 {
        self.position
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_POSITION)
    }
}

impl Animation for Spinner {
    fn frame<T: Transport>(&mut self, display: &mut DisplaySession<T>) -> Result<(), Dsp420Error> {
        let glyph = FRAMES[self.index];
        self.index = (self.index + 1) % FRAMES.len();
        display.write(&glyph.to_string(), Region::cell(self.position), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::commands;
    use crate::transport::MemoryTransport;

    #[test]
    fn test_cycles_frames() {
        let mut display = DisplaySession::new(MemoryTransport::new()).with_settle_delay(Duration::ZERO);
        let mut spinner = Spinner::default();

        let mut expected = Vec::new();
        for glyph in FRAMES.iter().chain(FRAMES.iter().take(1)) {
            spinner.frame(&mut display).unwrap();
            expected.extend(commands::set_cursor(20));
            expected.push(*glyph as u8);
        }
        assert_eq!(display.transport().bytes(), expected.as_slice());
    }

    #[test]
    fn test_out_of_range_position() {
        let mut display = DisplaySession::new(MemoryTransport::new()).with_settle_delay(Duration::ZERO);
        let mut spinner = Spinner::new(41);
        assert!(matches!(spinner.frame(&mut display), Err(Dsp420Error::Range(_))));
    }
}

//! # Display Session
//!
//! A [`DisplaySession`] owns the transport for the lifetime of the process
//! and turns "put this text in these cells" into frames.
//!
//! ## Write Sequence
//!
//! ```text
//! write("Hi", 21..=40, pre_clear = true)
//!   04 01 'C' 'E' 'X' 17     clear 21..=40
//!   04 01 'P' 'E' 17         cursor to 21
//!   'H' 'i'                  text
//!
//! write("Hi", 21..=40, pre_clear = false)
//!   04 01 'P' 'E' 17         cursor to 21
//!   (settle delay)
//!   'H' 'i'                  text
//! ```
//!
//! The settle delay works around a firmware timing defect: text sent right
//! after a cursor frame is sometimes drawn at the old position. A preceding
//! clear gives the controller the time it needs, so the delay is only
//! inserted when there is no clear.

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use super::config::DisplayConfig;
use super::region::Region;
use crate::error::Dsp420Error;
use crate::protocol::{ascii, commands};
use crate::transport::Transport;
use crate::widget::Widget;

/// A display session shared between the foreground loop and one background
/// animation. The mutex is the write-path lock: whoever holds it owns the
/// wire until the frame is complete.
pub type SharedDisplay<T> = Arc<Mutex<DisplaySession<T>>>;

/// Lock a shared display, mapping lock poisoning to a connection error.
///
/// A poisoned lock means a writer panicked mid-frame, so the device state is
/// unknown.
pub fn lock<T: Transport>(
    display: &SharedDisplay<T>,
) -> Result<MutexGuard<'_, DisplaySession<T>>, Dsp420Error> {
    display
        .lock()
        .map_err(|_| Dsp420Error::Connection("display lock poisoned".to_string()))
}

/// # Display Session
///
/// ## Example
///
/// ```
/// use dsp420::display::{DisplaySession, Region};
/// use dsp420::transport::MemoryTransport;
///
/// let mut display = DisplaySession::new(MemoryTransport::new());
/// display.write("Hello", Region::TOP, true)?;
///
/// assert!(display.transport().bytes().ends_with(b"Hello"));
/// # Ok::<(), dsp420::error::Dsp420Error>(())
/// ```
#[derive(Debug)]
pub struct DisplaySession<T: Transport> {
    transport: T,
    settle_delay: Duration,
}

impl<T: Transport> DisplaySession<T> {
    /// Wrap an open transport using the DSP-420 defaults.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, &DisplayConfig::DSP420)
    }

    pub fn with_config(transport: T, config: &DisplayConfig) -> Self {
        debug!(
            model = config.name,
            cells = config.cells(),
            settle_ms = config.settle_delay_ms,
            "display session opened"
        );
        Self {
            transport,
            settle_delay: config.settle_delay(),
        }
    }

    /// Override the cursor-to-text settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Move the session behind the write-path lock.
    pub fn into_shared(self) -> SharedDisplay<T> {
        Arc::new(Mutex::new(self))
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Blank every cell in `region`.
    ///
    /// Idempotent; the cursor is not moved.
    pub fn clear(&mut self, region: Region) -> Result<(), Dsp420Error> {
        region.validate()?;
        let frame = commands::clear(region.start, region.end);
        trace!(?frame, %region, "clear");
        self.transport.write_all(&frame)
    }

    /// Blank the whole display.
    pub fn clear_all(&mut self) -> Result<(), Dsp420Error> {
        self.clear(Region::FULL)
    }

    /// Move the cursor; the next raw write starts at `position`.
    pub fn set_cursor(&mut self, position: u8) -> Result<(), Dsp420Error> {
        Region::cell(position).validate()?;
        let frame = commands::set_cursor(position);
        trace!(?frame, position, "set cursor");
        self.transport.write_all(&frame)
    }

    /// Draw `text` into `region`.
    ///
    /// Text longer than the region is truncated to fit. With `pre_clear`
    /// the region is blanked first; without it the settle delay is slept
    /// between the cursor frame and the text.
    pub fn write(&mut self, text: &str, region: Region, pre_clear: bool) -> Result<(), Dsp420Error> {
        region.validate()?;

        let text: String = text.chars().take(region.len()).collect();

        if pre_clear {
            self.clear(region)?;
        }
        self.set_cursor(region.start)?;
        if !pre_clear && !self.settle_delay.is_zero() {
            thread::sleep(self.settle_delay);
        }

        let data = ascii::encode(&text);
        if data.is_empty() {
            return Ok(());
        }
        trace!(%text, %region, "write");
        self.transport.write_all(&data)
    }

    /// Render `widget` into its own region (pre-cleared).
    pub fn render_widget(&mut self, widget: &mut Widget) -> Result<(), Dsp420Error> {
        let region = widget.region()?;
        let text = widget.render();
        self.write(&text, region, true)
    }

    /// Render `widget` only if it changed since the last render.
    ///
    /// Returns whether anything was written.
    pub fn refresh_widget(&mut self, widget: &mut Widget) -> Result<bool, Dsp420Error> {
        if !widget.is_dirty() {
            return Ok(false);
        }
        self.render_widget(widget)?;
        Ok(true)
    }
}

// ============================================================================
// TESTS
// ============================================================================

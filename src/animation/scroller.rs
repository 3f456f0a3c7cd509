//! # Widget Scroller
//!
//! Marquee-scrolls a widget whose value is wider than its region, one cell
//! per frame. Typical use is a product title on the bottom row while the top
//! row asks a yes/no question:
//!
//! ```no_run
//! use std::time::Duration;
//! use dsp420::animation::Scroller;
//! use dsp420::display::DisplaySession;
//! use dsp420::editor::{KeySource, TerminalKeys};
//! use dsp420::transport::SerialTransport;
//! use dsp420::widget::Widget;
//!
//! let display = DisplaySession::new(SerialTransport::open_default()?).into_shared();
//! let title = Widget::new("Organic Whole Milk 2L Carton", 21, 20)?;
//!
//! let task = Scroller::spawn(title, display.clone(), Scroller::DEFAULT_INTERVAL);
//! TerminalKeys::new()?.next_key()?;
//! let _title = task.cancel()?.into_widget();
//! # Ok::<(), dsp420::error::Dsp420Error>(())
//! ```

use std::time::Duration;

use super::{Animation, BackgroundTask};
use crate::display::{DisplaySession, SharedDisplay};
use crate::error::Dsp420Error;
use crate::transport::Transport;
use crate::widget::Widget;

/// Scrolls one widget per frame.
#[derive(Debug, Clone)]
pub struct Scroller {
    widget: Widget,
}

impl Scroller {
    /// Time between scroll steps
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);

    pub fn new(widget: Widget) -> Self {
        Self { widget }
    }

    /// Start scrolling `widget` on a background thread.
    pub fn spawn<T: Transport + 'static>(
        widget: Widget,
        display: SharedDisplay<T>,
        interval: Duration,
    ) -> BackgroundTask<Self> {
        BackgroundTask::spawn(Self::new(widget), display, interval)
    }

    pub fn widget(&self) -> &Widget {
        &self.widget
    }

    pub fn into_widget(self) -> Widget {
        self.widget
    }
}

impl Animation for Scroller {
    /// Step the scroll, then draw the widget into its region.
    fn frame<T: Transport>(&mut self, display: &mut DisplaySession<T>) -> Result<(), Dsp420Error> {
        self.widget.increment_scroll();
        display.render_widget(&mut self.widget)
    }
}

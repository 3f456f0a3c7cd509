//! # Background Animation
//!
//! Periodic display updates that run while the foreground waits for input:
//! a scrolling widget, or a spinner in a corner cell.
//!
//! ## Task Lifecycle
//!
//! ```text
//! spawn ──► frame ──► wait(interval) ──► frame ──► wait ...
//!                          │
//!            cancel() ─────┘  (wakes the wait, thread exits, cancel joins)
//! ```
//!
//! Each frame runs with the display lock held, so a frame is never
//! interleaved with foreground writes. Cancellation is only observed between
//! frames. [`BackgroundTask::cancel`] does not return until the thread has
//! exited, so no byte reaches the display after it returns.
//!
//! ## Modules
//!
//! - [`scroller`]: Scrolls a [`Widget`](crate::widget::Widget) that is wider than its region
//! - [`spinner`]: Cycles `\ | / -` in a single cell

pub mod scroller;
pub mod spinner;

pub use scroller::Scroller;
pub use spinner::Spinner;

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::display::{DisplaySession, SharedDisplay, lock};
use crate::error::Dsp420Error;
use crate::transport::Transport;

/// One step of a periodic display update.
pub trait Animation: Send + 'static {
    /// Draw the next frame. Called with the display lock held.
    fn frame<T: Transport>(&mut self, display: &mut DisplaySession<T>) -> Result<(), Dsp420Error>;
}

/// Handle to a running animation thread.
///
/// Dropping the handle cancels and joins the thread, discarding the result.
pub struct BackgroundTask<A: Animation> {
    cancel_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<Result<A, Dsp420Error>>>,
}

impl<A: Animation> BackgroundTask<A> {
    /// Start drawing `animation` every `interval`.
    ///
    /// The first frame is drawn immediately.
    pub fn spawn<T: Transport + 'static>(
        animation: A,
        display: SharedDisplay<T>,
        interval: Duration,
    ) -> Self {
        let (cancel_tx, cancel_rx) = mpsc::channel();
        let handle = thread::spawn(move || run(animation, display, interval, cancel_rx));
        debug!(?interval, "background animation started");

        Self {
            cancel_tx: Some(cancel_tx),
            handle: Some(handle),
        }
    }

    /// Whether the thread already stopped on its own (after an error).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Stop the animation and wait for the thread to exit.
    ///
    /// Returns the animation so its state (a scrolled widget, say) can be
    /// reused, or the error that stopped the thread early.
    pub fn cancel(mut self) -> Result<A, Dsp420Error> {
        self.stop()
            .unwrap_or_else(|| Err(Dsp420Error::Connection("animation already stopped".to_string())))
    }

    fn stop(&mut self) -> Option<Result<A, Dsp420Error>> {
        if let Some(tx) = self.cancel_tx.take() {
            // The thread may already be gone; the join below reports why.
            let _ = tx.send(());
        }
        let handle = self.handle.take()?;
        let result = handle
            .join()
            .unwrap_or_else(|_| Err(Dsp420Error::Connection("animation thread panicked".to_string())));
        debug!(ok = result.is_ok(), "background animation stopped");
        Some(result)
    }
}

impl<A: Animation> Drop for BackgroundTask<A> {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

fn cancelled(cancel: &Receiver<()>) -> bool {
    !matches!(cancel.try_recv(), Err(TryRecvError::Empty))
}

fn run<A: Animation, T: Transport>(
    mut animation: A,
    display: SharedDisplay<T>,
    interval: Duration,
    cancel: Receiver<()>,
) -> Result<A, Dsp420Error> {
    loop {
        if cancelled(&cancel) {
            return Ok(animation);
        }

        {
            let mut session = lock(&display)?;
            if let Err(e) = animation.frame(&mut *session) {
                warn!(error = %e, "background animation failed");
                return Err(e);
            }
        }

        match cancel.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => {}
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return Ok(animation),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::Region;
    use crate::transport::MemoryTransport;

    /// Counts frames and writes one byte per frame.
    struct Counter {
        frames: usize,
    }

    impl Animation for Counter {
        fn frame<T: Transport>(&mut self, display: &mut DisplaySession<T>) -> Result<(), Dsp420Error> {
            self.frames += 1;
            display.write("*", Region::cell(1), true)
        }
    }

    fn shared() -> SharedDisplay<MemoryTransport> {
        DisplaySession::new(MemoryTransport::new())
            .with_settle_delay(Duration::ZERO)
            .into_shared()
    }

    #[test]
    fn test_runs_until_cancelled() {
        let display = shared();
        let task = BackgroundTask::spawn(Counter { frames: 0 }, display.clone(), Duration::from_millis(5));
        thread::sleep(Duration::from_millis(60));
        let counter = task.cancel().unwrap();
        assert!(counter.frames >= 2);
    }

    #[test]
    fn test_no_writes_after_cancel() {
        let display = shared();
        let task = BackgroundTask::spawn(Counter { frames: 0 }, display.clone(), Duration::from_millis(1));
        thread::sleep(Duration::from_millis(20));
        task.cancel().unwrap();

        let before = lock(&display).unwrap().transport().bytes().len();
        thread::sleep(Duration::from_millis(20));
        let after = lock(&display).unwrap().transport().bytes().len();
        assert_eq!(before, after);
    }

    #[test]
    fn test_cancel_wakes_long_interval() {
        let display = shared();
        let task = BackgroundTask::spawn(Counter { frames: 0 }, display, Duration::from_secs(60));
        thread::sleep(Duration::from_millis(20));
        let counter = task.cancel().unwrap();
        assert_eq!(counter.frames, 1);
    }

    #[test]
    fn test_error_stops_task() {
        let display = shared();
        lock(&display).unwrap().transport_mut().disconnect();

        let task = BackgroundTask::spawn(Counter { frames: 0 }, display, Duration::from_millis(1));
        thread::sleep(Duration::from_millis(20));
        assert!(task.is_finished());
        assert!(matches!(task.cancel(), Err(Dsp420Error::Connection(_))));
    }

    #[test]
    fn test_drop_joins() {
        let display = shared();
        {
            let _task = BackgroundTask::spawn(Counter { frames: 0 }, display.clone(), Duration::from_millis(1));
            thread::sleep(Duration::from_millis(10));
        }
        let before = lock(&display).unwrap().transport().write_count();
        thread::sleep(Duration::from_millis(10));
        assert_eq!(lock(&display).unwrap().transport().write_count(), before);
    }
}

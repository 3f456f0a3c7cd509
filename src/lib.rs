//! # dsp420 - Character LCD Driver
//!
//! dsp420 is a Rust library for driving DSP-420 2×20 character LCD displays
//! over a serial line. It provides:
//!
//! - **Protocol implementation**: Clear and cursor frame builders
//! - **Display session**: Region-based writes with the firmware's settle-time workaround
//! - **Widgets**: Fixed-width fields with alignment, `MM:SS` formatting and marquee scrolling
//! - **Line editor**: Cursor-driven text entry on a 20-cell viewport
//! - **Background animation**: Cancellable scroller and spinner threads
//!
//! ## Quick Start
//!
//! ```no_run
//! use dsp420::{
//!     display::{DisplaySession, Region},
//!     editor::{TerminalKeys, run_prompt},
//!     transport::SerialTransport,
//! };
//!
//! // Open connection to the display
//! let transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
//! let mut display = DisplaySession::new(transport);
//!
//! display.clear_all()?;
//! display.write("Scan Product Barcode", Region::TOP, true)?;
//! display.write("or Type Product Name", Region::BOTTOM, true)?;
//!
//! // Ask for a value
//! let mut keys = TerminalKeys::new()?;
//! let name = run_prompt(&mut display, &mut keys, "Item name:", "")?.into_value();
//!
//! # Ok::<(), dsp420::error::Dsp420Error>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | DSP-420 frame builders |
//! | [`transport`] | Serial and in-memory byte sinks |
//! | [`display`] | Display session, regions and hardware config |
//! | [`widget`] | Aligned, formatted, scrolling text fields |
//! | [`editor`] | Line editor and key sources |
//! | [`animation`] | Background scroller and spinner |
//! | [`config`] | TOML runtime configuration |
//! | [`error`] | Error types |
//!
//! ## Concurrency
//!
//! The serial line is one shared resource. A foreground loop and at most one
//! [`animation::BackgroundTask`] share a [`display::SharedDisplay`]; every
//! frame is written with its lock held, and cancelling a task joins it before
//! returning.

pub mod animation;
pub mod config;
pub mod display;
pub mod editor;
pub mod error;
pub mod protocol;
pub mod transport;
pub mod widget;

// Re-exports for convenience
pub use display::{DisplayConfig, DisplaySession};
pub use error::Dsp420Error;
pub use transport::SerialTransport;
pub use widget::Widget;

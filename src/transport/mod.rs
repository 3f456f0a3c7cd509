//! # Display Transport Layer
//!
//! This module provides the byte sinks a display session writes to.
//!
//! ## Available Transports
//!
//! - [`serial`]: Serial tty (RS-232 / USB adapter), configured raw at 9600 baud
//! - [`memory`]: In-memory recorder for tests and dry runs

pub mod memory;
pub mod serial;

pub use memory::MemoryTransport;
pub use serial::SerialTransport;

use crate::error::Dsp420Error;

/// A byte sink connected to the display.
///
/// Implementations must write the whole buffer or fail with
/// [`Dsp420Error::Connection`].
pub trait Transport: Send {
    fn write_all(&mut self, data: &[u8]) -> Result<(), Dsp420Error>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write_all(&mut self, data: &[u8]) -> Result<(), Dsp420Error> {
        (**self).write_all(data)
    }
}

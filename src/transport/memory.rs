//! # In-Memory Transport
//!
//! Records every byte written to it. Used by the test suite and by the CLI's
//! `--dry-run` mode to show the frames a command would send.

use super::Transport;
use crate::error::Dsp420Error;

/// A transport that stores writes in a buffer.
///
/// ## Example
///
/// ```
/// use dsp420::transport::{MemoryTransport, Transport};
///
/// let mut transport = MemoryTransport::new();
/// transport.write_all(b"hi")?;
/// assert_eq!(transport.bytes(), b"hi");
///
/// # Ok::<(), dsp420::error::Dsp420Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryTransport {
    data: Vec<u8>,
    writes: usize,
    disconnected: bool,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Number of `write_all` calls that succeeded.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Drain the recorded bytes.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.data)
    }

    /// Make every later write fail, as an unplugged adapter would.
    pub fn disconnect(&mut self) {
        self.disconnected = true;
    }
}

impl Transport for MemoryTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), Dsp420Error> {
        if self.disconnected {
            return Err(Dsp420Error::Connection("Write failed: device disconnected".to_string()));
        }
        self.data.extend_from_slice(data);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_writes() {
        let mut transport = MemoryTransport::new();
        transport.write_all(&[1, 2]).unwrap();
        transport.write_all(&[3]).unwrap();

        assert_eq!(transport.bytes(), &[1, 2, 3]);
        assert_eq!(transport.write_count(), 2);
    }

    #[test]
    fn test_take_drains() {
        let mut transport = MemoryTransport::new();
        transport.write_all(b"abc").unwrap();

        assert_eq!(transport.take(), b"abc".to_vec());
        assert!(transport.bytes().is_empty());
    }

    #[test]
    fn test_disconnect_fails_writes() {
        let mut transport = MemoryTransport::new();
        transport.disconnect();

        let err = transport.write_all(b"x").unwrap_err();
        assert!(matches!(err, Dsp420Error::Connection(_)));
        assert!(transport.bytes().is_empty());
    }
}

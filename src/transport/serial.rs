//! # Serial TTY Transport
//!
//! This module provides communication with a DSP-420 display over an RS-232
//! or USB-serial adapter (`/dev/ttyUSB0`, `/dev/ttyS0`, ...).
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so frame bytes reach the controller
//! unmodified:
//!
//! - **Speed**: 9600 baud by default (input and output)
//! - **No input processing**: Disable IGNBRK, BRKINT, PARMRK, ISTRIP, etc.
//! - **No output processing**: Disable OPOST (no CR/LF translation)
//! - **8-bit characters**: CS8, no parity, one stop bit
//! - **No flow control**: Disable CRTSCTS and IXON/IXOFF/IXANY
//! - **No echo**: Disable ECHO, ECHONL
//! - **Non-canonical mode**: Disable ICANON (no line buffering)
//!
//! ## Permissions
//!
//! Serial devices usually belong to the `dialout` group:
//!
//! ```bash
//! $ sudo usermod -aG dialout $USER
//! ```

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;

use tracing::debug;

use super::Transport;
use crate::display::DisplayConfig;
use crate::error::Dsp420Error;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Default line speed of the DSP-420
pub const DEFAULT_BAUD: u32 = DisplayConfig::DSP420.baud;

/// # Serial Display Transport
///
/// Manages a connection to a DSP-420 over a serial tty.
///
/// ## Example
///
/// ```no_run
/// use dsp420::transport::{SerialTransport, Transport};
/// use dsp420::protocol::commands;
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB0", 9600)?;
/// transport.write_all(&commands::clear_all())?;
///
/// # Ok::<(), dsp420::error::Dsp420Error>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: File,
}

impl SerialTransport {
    /// Open a serial connection to the display.
    ///
    /// ## Errors
    ///
    /// Returns a connection error if:
    /// - The device doesn't exist
    /// - Permission denied (may need the dialout group)
    /// - The baud rate is not a standard speed
    /// - TTY configuration fails
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, Dsp420Error> {
        let path = device.as_ref();

        let file = OpenOptions::new().write(true).open(path).map_err(|e| {
            Dsp420Error::Connection(format!("Failed to open {}: {}", path.display(), e))
        })?;

        configure_tty_raw(file.as_raw_fd(), baud)?;
        debug!(device = %path.display(), baud, "serial transport open");

        Ok(Self { file })
    }

    /// Open with default device path (/dev/ttyUSB0) at 9600 baud
    pub fn open_default() -> Result<Self, Dsp420Error> {
        Self::open(DEFAULT_DEVICE, DEFAULT_BAUD)
    }
}

impl Transport for SerialTransport {
    fn write_all(&mut self, data: &[u8]) -> Result<(), Dsp420Error> {
        if data.is_empty() {
            return Ok(());
        }

        self.file
            .write_all(data)
            .map_err(|e| Dsp420Error::Connection(format!("Write failed: {}", e)))?;
        self.file
            .flush()
            .map_err(|e| Dsp420Error::Connection(format!("Flush failed: {}", e)))?;

        Ok(())
    }
}

/// Map a numeric baud rate to its termios speed constant.
fn speed_for(baud: u32) -> Option<libc::speed_t> {
    let speed = match baud {
        1200 => libc::B1200,
        2400 => libc::B2400,
        4800 => libc::B4800,
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        _ => return None,
    };
    Some(speed)
}

/// Configure a file descriptor for raw TTY mode at `baud`.
///
/// ## What Gets Disabled
///
/// - **Input flags**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL, IXON, IXOFF, IXANY
/// - **Output flags**: OPOST
/// - **Local flags**: ECHO, ECHONL, ICANON, ISIG, IEXTEN
/// - **Control flags**: CSIZE, PARENB, CSTOPB, CRTSCTS (then CS8 | CLOCAL | CREAD)
fn configure_tty_raw(fd: i32, baud: u32) -> Result<(), Dsp420Error> {
    use std::mem::MaybeUninit;

    let speed = speed_for(baud)
        .ok_or_else(|| Dsp420Error::Connection(format!("Unsupported baud rate: {}", baud)))?;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(Dsp420Error::Connection(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    termios.c_oflag &= !libc::OPOST;

    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // 8N1, hardware flow control off, ignore modem lines
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB | libc::CSTOPB | libc::CRTSCTS);
    termios.c_cflag |= libc::CS8 | libc::CLOCAL | libc::CREAD;

    let result = unsafe { libc::cfsetispeed(&mut termios, speed) };
    if result != 0 {
        return Err(Dsp420Error::Connection(format!(
            "cfsetispeed failed: {}",
            io::Error::last_os_error()
        )));
    }
    let result = unsafe { libc::cfsetospeed(&mut termios, speed) };
    if result != 0 {
        return Err(Dsp420Error::Connection(format!(
            "cfsetospeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(Dsp420Error::Connection(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_path() {
        assert_eq!(DEFAULT_DEVICE, "/dev/ttyUSB0");
        assert_eq!(DEFAULT_BAUD, 9600);
        assert_eq!(DEFAULT_BAUD, DisplayConfig::DSP420.baud);
    }

    #[test]
    fn test_standard_speeds() {
        assert_eq!(speed_for(9600), Some(libc::B9600));
        assert_eq!(speed_for(115200), Some(libc::B115200));
    }

    #[test]
    fn test_nonstandard_speed_rejected() {
        assert_eq!(speed_for(9601), None);
        assert_eq!(speed_for(0), None);
    }

    #[test]
    fn test_open_missing_device_is_connection_error() {
        let err = SerialTransport::open("/dev/does-not-exist-dsp420", 9600).unwrap_err();
        assert!(matches!(err, Dsp420Error::Connection(_)));
    }

    // Note: Writing requires actual hardware.
    // Run the CLI against a connected display to check the wiring end to end.
}

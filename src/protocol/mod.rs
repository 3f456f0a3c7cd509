//! # DSP-420 Protocol Implementation
//!
//! This module provides low-level frame builders for the DSP-420 character
//! LCD controller.
//!
//! ## Module Structure
//!
//! - [`commands`]: Control frames (clear, set cursor) and position encoding
//! - [`ascii`]: Text-to-byte encoding for raw writes
//!
//! ## Usage Example
//!
//! ```
//! use dsp420::protocol::{ascii, commands};
//!
//! let mut data = Vec::new();
//!
//! // Blank the bottom row, then draw into it
//! data.extend(commands::clear(21, 40));
//! data.extend(commands::set_cursor(21));
//! data.extend(ascii::encode("Hello"));
//!
//! assert_eq!(&data[..6], &[0x04, 0x01, b'C', b'E', b'X', 0x17]);
//! ```

pub mod ascii;
pub mod commands;

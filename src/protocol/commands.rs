//! # DSP-420 Protocol Commands
//!
//! This module implements the control frames understood by the DSP-420
//! character LCD controller.
//!
//! ## Protocol Overview
//!
//! The DSP-420 is a 2×20 character display addressed as a single run of 40
//! cells. Cell 1 is the top-left corner, cell 21 the start of the second row.
//! The controller accepts two kinds of input:
//!
//! - **Control frames**: `EOT SOH <command> <params...> ETB`
//! - **Raw text**: any other bytes are drawn at the cursor, which advances
//!   one cell per byte
//!
//! ## Frame Structure
//!
//! | Command | Bytes | Effect |
//! |---------|-------|--------|
//! | Clear   | `04 01 'C' s e 17` | Blank cells `s..=e` |
//! | Cursor  | `04 01 'P' p 17`   | Move cursor to cell `p` |
//!
//! ## Position Encoding
//!
//! Positions are not sent as binary. Each one is offset by 48 so that it
//! lands in the printable range: cell 1 is `'1'` (0x31), cell 40 is `'X'`
//! (0x58). See [`hex_control`].
//!
//! ## Range Contract
//!
//! The builders in this module never validate their arguments. Positions
//! outside `1..=40` produce frames the firmware does not define. The display
//! session checks ranges before calling in here.

// ============================================================================
// FRAME CONSTANTS
// ============================================================================

/// EOT (End of Transmission) - first byte of every control frame
pub const EOT: u8 = 0x04;

/// SOH (Start of Heading) - second byte of every control frame
pub const SOH: u8 = 0x01;

/// ETB (End of Transmission Block) - closes a control frame
pub const ETB: u8 = 0x17;

/// Clear command byte
pub const CLEAR: u8 = b'C';

/// Set-cursor command byte
pub const CURSOR: u8 = b'P';

/// Offset added to a position to make it a printable control character
pub const POSITION_OFFSET: u8 = 48;

/// First addressable cell
pub const FIRST_POSITION: u8 = 1;

/// Last addressable cell (2 rows × 20 columns)
pub const LAST_POSITION: u8 = 40;

// ============================================================================
// POSITION ENCODING
// ============================================================================

/// # Encode a Position (i + 48)
///
/// Converts a cell index into the single control byte used inside frames.
///
/// | Position | Byte | ASCII |
/// |----------|------|-------|
/// | 1        | 0x31 | `1`   |
/// | 9        | 0x39 | `9`   |
/// | 10       | 0x3A | `:`   |
/// | 40       | 0x58 | `X`   |
///
/// ## Example
///
/// ```
/// use dsp420::protocol::commands::hex_control;
///
/// assert_eq!(hex_control(1), b'1');
/// assert_eq!(hex_control(40), b'X');
/// ```
#[inline]
pub const fn hex_control(position: u8) -> u8 {
    position.wrapping_add(POSITION_OFFSET)
}

/// Whether `position` is an addressable cell (1..=40).
#[inline]
pub const fn is_valid_position(position: u8) -> bool {
    position >= FIRST_POSITION && position <= LAST_POSITION
}

// ============================================================================
// CONTROL FRAMES
// ============================================================================

/// # Clear Range (EOT SOH C s e ETB)
///
/// Blanks every cell from `start` to `end` inclusive. The cursor position is
/// left untouched.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | EOT SOH C s e ETB |
/// | Hex     | 04 01 43 (s+30) (e+30) 17 |
///
/// ## Example
///
/// ```
/// use dsp420::protocol::commands;
///
/// let clear = commands::clear(1, 40);
/// assert_eq!(clear, vec![0x04, 0x01, b'C', b'1', b'X', 0x17]);
/// ```
#[inline]
pub fn clear(start: u8, end: u8) -> Vec<u8> {
    vec![EOT, SOH, CLEAR, hex_control(start), hex_control(end), ETB]
}

/// Clear the whole display (cells 1..=40)
#[inline]
pub fn clear_all() -> Vec<u8> {
    clear(FIRST_POSITION, LAST_POSITION)
}

/// # Set Cursor (EOT SOH P p ETB)
///
/// Moves the write cursor. The next raw text byte lands at `position`.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | EOT SOH P p ETB |
/// | Hex     | 04 01 50 (p+30) 17 |
///
/// ## Timing
///
/// The firmware needs a short settle time after this frame before it
/// reliably accepts text. When the range was not cleared right before, the
/// session sleeps between the two writes.
///
/// ## Example
///
/// ```
/// use dsp420::protocol::commands;
///
/// let cursor = commands::set_cursor(21);
/// assert_eq!(cursor, vec![0x04, 0x01, b'P', b'E', 0x17]);
/// ```
#[inline]
pub fn set_cursor(position: u8) -> Vec<u8> {
    vec![EOT, SOH, CURSOR, hex_control(position), ETB]
}

// ============================================================================
// TESTS
// ============================================================================

//! # Text Widgets
//!
//! A [`Widget`] is a fixed-width field on the display: a value, the cell it
//! starts at, how many cells it owns, and how to fit the value into them.
//!
//! ## Fitting Rules
//!
//! | Value vs. width | Output |
//! |-----------------|--------|
//! | shorter or equal | value aligned left/right/center, space padded |
//! | longer | a `length`-wide window onto `"  " + value + "  "` |
//!
//! The window position is the widget's scroll offset (1-based).
//! [`Widget::increment_scroll`] moves it one step and wraps back to the
//! start once the window would run past the padded text:
//!
//! ```text
//! value = "ABCDEFGH", length = 6, padded = "  ABCDEFGH  " (12)
//!
//! offset 1  "  ABCD"
//! offset 2  " ABCDE"
//!   ...
//! offset 7  "GH    "  ─┐ last full window
//! offset 1  "  ABCD"  ◄┘ wrap
//! ```
//!
//! ## Time Format
//!
//! With [`Format::Time`] the value is read as whole seconds and shown as
//! `MM:SS`. Negative and non-numeric values show `00:00`.

use std::fmt;
use std::str::FromStr;

use crate::display::Region;
use crate::error::Dsp420Error;

/// Blank cells on each side of a scrolling value
const SCROLL_PAD: &str = "  ";

// ============================================================================
// OPTIONS
// ============================================================================

/// How the value is interpreted before fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Shown as-is
    #[default]
    None,
    /// Seconds shown as zero-padded `MM:SS`
    Time,
}

impl FromStr for Format {
    type Err = Dsp420Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "time" => Ok(Self::Time),
            other => Err(Dsp420Error::InvalidOption(format!(
                "Unknown format '{}'. Use 'none' or 'time'",
                other
            ))),
        }
    }
}

/// Placement of a value shorter than the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    /// Extra space goes on the right when the padding is odd
    Center,
}

impl FromStr for Align {
    type Err = Dsp420Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "ljust" => Ok(Self::Left),
            "right" | "rjust" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            other => Err(Dsp420Error::InvalidOption(format!(
                "Unknown alignment '{}'. Use 'left', 'right' or 'center'",
                other
            ))),
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        };
        f.write_str(name)
    }
}

// ============================================================================
// WIDGET
// ============================================================================

/// A bounded display field with alignment, formatting and scrolling.
///
/// ## Example
///
/// ```
/// use dsp420::widget::{Align, Widget};
///
/// let mut price = Widget::new("4.99", 35, 6)?.align(Align::Right);
/// assert_eq!(price.render(), "  4.99");
/// # Ok::<(), dsp420::error::Dsp420Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    value: String,
    position: u8,
    length: usize,
    format: Format,
    align: Align,
    scroll_offset: usize,
    dirty: bool,
}

impl Widget {
    /// Create a widget owning `length` cells from `position`.
    ///
    /// New widgets start dirty so the first refresh draws them.
    ///
    /// ## Errors
    ///
    /// `InvalidOption` when `length` is zero.
    pub fn new(value: impl Into<String>, position: u8, length: usize) -> Result<Self, Dsp420Error> {
        if length == 0 {
            return Err(Dsp420Error::InvalidOption(
                "widget length must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            value: value.into(),
            position,
            length,
            format: Format::None,
            align: Align::Left,
            scroll_offset: 1,
            dirty: true,
        })
    }

    /// A right-aligned `MM:SS` widget wide enough for `seconds` and every
    /// smaller value, so a countdown never falls into the scroll path.
    pub fn countdown(seconds: i64, position: u8) -> Result<Self, Dsp420Error> {
        let length = format_time(seconds).len();
        Ok(Self::new(seconds.to_string(), position, length)?
            .format(Format::Time)
            .align(Align::Right))
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The cells this widget draws into.
    pub fn region(&self) -> Result<Region, Dsp420Error> {
        Region::span(self.position, self.length)
    }

    /// Replace the value and mark the widget for redraw.
    ///
    /// A changed value starts scrolling from the beginning again; a stale
    /// offset could otherwise point past the end of a shorter value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value != self.value {
            self.scroll_offset = 1;
        }
        self.value = value;
        self.dirty = true;
    }

    /// Convenience for time widgets.
    pub fn set_seconds(&mut self, seconds: i64) {
        self.set_value(seconds.to_string());
    }

    /// Advance the scroll window by one cell.
    ///
    /// Only values longer than the widget scroll. Returns whether a step was
    /// taken.
    pub fn increment_scroll(&mut self) -> bool {
        let value_len = self.value.chars().count();
        if value_len <= self.length {
            return false;
        }

        let padded_len = value_len + 2 * SCROLL_PAD.len();
        self.scroll_offset += 1;
        if padded_len.saturating_sub(self.scroll_offset - 1) < self.length {
            self.scroll_offset = 1;
        }
        self.dirty = true;
        true
    }

    /// Produce exactly `length` characters for the current frame.
    pub fn render(&mut self) -> String {
        self.dirty = false;

        let text = match self.format {
            Format::None => self.value.clone(),
            Format::Time => format_time(parse_seconds(&self.value)),
        };

        let text_len = text.chars().count();
        if text_len > self.length {
            let padded = format!("{SCROLL_PAD}{text}{SCROLL_PAD}");
            let padded_len = text_len + 2 * SCROLL_PAD.len();
            let mut start = self.scroll_offset - 1;
            if start + self.length > padded_len {
                start = 0;
            }
            padded.chars().skip(start).take(self.length).collect()
        } else {
            align(&text, text_len, self.length, self.align)
        }
    }
}

// ============================================================================
// TEXT HELPERS
// ============================================================================

fn align(text: &str, text_len: usize, width: usize, align: Align) -> String {
    let pad = width - text_len;
    let (left, right) = match align {
        Align::Left => (0, pad),
        Align::Right => (pad, 0),
        Align::Center => (pad / 2, pad - pad / 2),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Format whole seconds as `MM:SS`.
///
/// ```
/// use dsp420::widget::format_time;
///
/// assert_eq!(format_time(125), "02:05");
/// assert_eq!(format_time(-5), "00:00");
/// ```
pub fn format_time(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Read the leading integer of `s`, or 0 when there is none.
fn parse_seconds(s: &str) -> i64 {
    let s = s.trim_start();
    let digits_start = usize::from(s.starts_with(['-', '+']));
    let digits_end = s[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_start);
    s[..digits_end].parse().unwrap_or(0)
}

/// Left-pad `text` so it sits centered in `width` cells.
///
/// Only the left side is padded; text at least `width` long is returned
/// unchanged. Used for one-off headline frames written with pre-clear.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        format!("{}{}", " ".repeat((width - len) / 2), text)
    } else {
        text.to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================

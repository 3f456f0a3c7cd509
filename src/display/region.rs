//! Inclusive cell ranges on the display.

use std::fmt;

use crate::error::Dsp420Error;
use crate::protocol::commands::{FIRST_POSITION, LAST_POSITION, is_valid_position};

/// An inclusive run of cells `start..=end`.
///
/// Construction does not validate; [`Region::validate`] is called by the
/// display session before anything is framed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub start: u8,
    pub end: u8,
}

impl Region {
    /// All 40 cells
    pub const FULL: Self = Self::new(FIRST_POSITION, LAST_POSITION);

    /// First row (cells 1..=20)
    pub const TOP: Self = Self::new(1, 20);

    /// Second row (cells 21..=40)
    pub const BOTTOM: Self = Self::new(21, 40);

    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// A single cell
    pub const fn cell(position: u8) -> Self {
        Self::new(position, position)
    }

    /// `length` cells starting at `start`
    pub fn span(start: u8, length: usize) -> Result<Self, Dsp420Error> {
        let overflow = || Dsp420Error::Range(format!("{} cells from {} overflows", length, start));
        let end = usize::from(start)
            .checked_add(length.saturating_sub(1))
            .ok_or_else(overflow)?;
        let end = u8::try_from(end).map_err(|_| overflow())?;
        let region = Self::new(start, end);
        region.validate()?;
        Ok(region)
    }

    /// Number of cells covered
    pub const fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the region against the addressable cell range.
    pub fn validate(&self) -> Result<(), Dsp420Error> {
        if !is_valid_position(self.start) || !is_valid_position(self.end) {
            return Err(Dsp420Error::Range(format!(
                "region {} outside {}..={}",
                self, FIRST_POSITION, LAST_POSITION
            )));
        }
        if self.start > self.end {
            return Err(Dsp420Error::Range(format!("region {} starts after it ends", self)));
        }
        Ok(())
    }
}

impl Default for Region {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

//! # Display Configuration
//!
//! Hardware facts about supported character displays.
//!
//! | Model | Columns | Rows | Cells | Baud | Settle delay |
//! |-------|---------|------|-------|------|--------------|
//! | DSP-420 | 20 | 2 | 40 | 9600 | 100 ms |
//!
//! ## Usage
//!
//! ```
//! use dsp420::display::DisplayConfig;
//!
//! let config = DisplayConfig::DSP420;
//! assert_eq!(config.cells(), 40);
//! ```

use std::time::Duration;

/// # Display Configuration
///
/// - **columns**: Characters per row
/// - **rows**: Number of rows
/// - **baud**: Factory line speed
/// - **settle_delay_ms**: Pause the firmware needs between a cursor frame and
///   text that was not preceded by a clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Display model name
    pub name: &'static str,

    /// Characters per row
    pub columns: u8,

    /// Number of rows
    pub rows: u8,

    /// Factory line speed
    pub baud: u32,

    /// Cursor-to-text settle time in milliseconds
    pub settle_delay_ms: u64,
}

impl DisplayConfig {
    /// # DSP-420 Configuration
    ///
    /// Two rows of twenty characters, addressed as one run of 40 cells:
    ///
    /// ```text
    /// ┌────────────────────┐
    /// │ 1 ............. 20 │
    /// │21 ............. 40 │
    /// └────────────────────┘
    /// ```
    pub const DSP420: Self = Self {
        name: "DSP-420",
        columns: 20,
        rows: 2,
        baud: 9600,
        settle_delay_ms: 100,
    };

    /// Total addressable cells
    #[inline]
    pub const fn cells(&self) -> u8 {
        self.columns * self.rows
    }

    /// Settle delay as a `Duration`
    #[inline]
    pub const fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DSP420
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dsp420_dimensions() {
        let config = DisplayConfig::DSP420;
        assert_eq!(config.columns, 20);
        assert_eq!(config.rows, 2);
        assert_eq!(config.cells(), 40);
    }

    #[test]
    fn test_settle_delay() {
        assert_eq!(DisplayConfig::DSP420.settle_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_default_is_dsp420() {
        assert_eq!(DisplayConfig::default(), DisplayConfig::DSP420);
    }
}

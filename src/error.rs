//! # Error Types
//!
//! This module defines error types used throughout the dsp420 library.

use thiserror::Error;

/// Main error type for dsp420 operations
#[derive(Debug, Error)]
pub enum Dsp420Error {
    /// Transport-level errors (device unavailable, write failed)
    ///
    /// Fatal to the display session. Reconnecting is up to the caller.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Position or region outside the 1..=40 cell range
    #[error("Out of range: {0}")]
    Range(String),

    /// Invalid widget option (format, alignment, length)
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// Key source failed or ran dry
    #[error("Input error: {0}")]
    Input(String),

    /// Configuration file could not be read or parsed
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

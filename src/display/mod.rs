//! # Display Module
//!
//! Session-level access to a DSP-420 display.
//!
//! ## Modules
//!
//! - [`config`]: Display hardware constants
//! - [`region`]: Inclusive cell ranges
//! - [`session`]: Clear / set-cursor / write built on the protocol frames

pub mod config;
pub mod region;
pub mod session;

pub use config::DisplayConfig;
pub use region::Region;
pub use session::{DisplaySession, SharedDisplay, lock};

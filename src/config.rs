//! # Configuration
//!
//! Runtime settings loaded from TOML. The default location is
//! `~/.dsp420/config.toml`; every key is optional.
//!
//! ```toml
//! # Serial device the display is attached to
//! device = "/dev/ttyUSB0"
//! baud = 9600
//!
//! [timing]
//! # Pause between a cursor move and text that was not pre-cleared
//! settle_delay_ms = 100
//! scroll_interval_ms = 300
//! spinner_interval_ms = 100
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::animation::{Scroller, Spinner};
use crate::display::DisplayConfig;
use crate::error::Dsp420Error;
use crate::transport::serial::{DEFAULT_BAUD, DEFAULT_DEVICE};

/// Main configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Serial device path
    pub device: String,
    /// Line speed
    pub baud: u32,
    /// Delays
    pub timing: TimingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            baud: DEFAULT_BAUD,
            timing: TimingConfig::default(),
        }
    }
}

/// Delay settings, all in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub settle_delay_ms: u64,
    pub scroll_interval_ms: u64,
    pub spinner_interval_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DisplayConfig::DSP420.settle_delay_ms,
            scroll_interval_ms: Scroller::DEFAULT_INTERVAL.as_millis() as u64,
            spinner_interval_ms: Spinner::DEFAULT_INTERVAL.as_millis() as u64,
        }
    }
}

impl TimingConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn scroll_interval(&self) -> Duration {
        Duration::from_millis(self.scroll_interval_ms)
    }

    pub fn spinner_interval(&self) -> Duration {
        Duration::from_millis(self.spinner_interval_ms)
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, Dsp420Error> {
        toml::from_str(content).map_err(|e| Dsp420Error::Config(format!("Invalid config: {}", e)))
    }

    /// Load an explicitly named config file. Missing or invalid files are errors.
    pub fn load(path: &Path) -> Result<Self, Dsp420Error> {
        let content = fs::read_to_string(path).map_err(|e| {
            Dsp420Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `~/.dsp420/config.toml`, falling back to defaults.
    ///
    /// An unreadable default file is logged and ignored.
    pub fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "ignoring default config");
                Self::default()
            }
        }
    }

    /// Render as TOML, e.g. to seed a config file.
    pub fn to_toml(&self) -> Result<String, Dsp420Error> {
        toml::to_string_pretty(self)
            .map_err(|e| Dsp420Error::Config(format!("Failed to serialize config: {}", e)))
    }

    /// `~/.dsp420/config.toml`, when a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        home_dir().map(|home| home.join(".dsp420").join("config.toml"))
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.device, "/dev/ttyUSB0");
        assert_eq!(config.baud, 9600);
        assert_eq!(config.timing.settle_delay(), Duration::from_millis(100));
        assert_eq!(config.timing.scroll_interval(), Duration::from_millis(300));
        assert_eq!(config.timing.spinner_interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = Config::from_toml(
            r#"
            device = "/dev/ttyS1"

            [timing]
            scroll_interval_ms = 150
            "#,
        )
        .unwrap();

        assert_eq!(config.device, "/dev/ttyS1");
        assert_eq!(config.baud, 9600);
        assert_eq!(config.timing.scroll_interval_ms, 150);
        assert_eq!(config.timing.settle_delay_ms, 100);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("baud = \"fast\"").unwrap_err();
        assert!(matches!(err, Dsp420Error::Config(_)));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = Config::default();
        config.timing.settle_delay_ms = 150;
        let text = config.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/dsp420.toml")).unwrap_err();
        assert!(matches!(err, Dsp420Error::Config(_)));
    }
}

//! Runtime configuration.
//!
//! All tunable parameters for the display. Values come from defaults,
//! an optional JSON file, and finally command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::pixel::ChannelOrder;
use crate::protocol::transport::SOCKET_PATH;

/// Time kept free at the end of each batch so the next fetch starts on
/// time. Subtracted from the refresh interval by the display loop.
pub const BATCH_SLACK: Duration = Duration::from_secs(1);

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    // --- Daemon ---
    /// Path of the `unicornd` Unix socket
    pub socket_path: PathBuf,
    /// Upper bound on a single socket write (milliseconds)
    pub write_timeout_ms: u64,
    /// Wire order of colour channels
    pub channel_order: ChannelOrder,

    // --- Output ---
    /// Global LED brightness (0-255)
    pub brightness: u8,
    /// Log every command sent to the daemon
    pub verbose: bool,

    // --- Timing ---
    /// Blank frame hold time at start-up (milliseconds)
    pub startup_hold_ms: u64,
    /// Time each value stays on screen (milliseconds)
    pub frame_interval_ms: u64,
    /// How long one batch of arrivals is cycled before fetching the next (seconds)
    pub refresh_interval_secs: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            // Daemon
            socket_path: PathBuf::from(SOCKET_PATH),
            write_timeout_ms: 2000,
            channel_order: ChannelOrder::Grb,

            // Output
            brightness: 10,
            verbose: false,

            // Timing
            startup_hold_ms: 2000,
            frame_interval_ms: 2000,  // 0.5 Hz
            refresh_interval_secs: 60, // 1/min
        }
    }
}

/// Errors from [`DisplayConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A field failed range validation. Names the field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl DisplayConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall or spin the display loop.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.write_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "write_timeout_ms must be non-zero",
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "frame_interval_ms must be non-zero",
            ));
        }
        // At least one frame must fit in the batch budget.
        if self.refresh_interval() <= BATCH_SLACK + self.frame_interval() {
            return Err(ConfigError::ValidationFailed(
                "refresh_interval_secs must exceed frame_interval_ms plus 1 s of slack",
            ));
        }
        Ok(())
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_millis(self.write_timeout_ms)
    }

    pub fn startup_hold(&self) -> Duration {
        Duration::from_millis(self.startup_hold_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = DisplayConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.socket_path, PathBuf::from("/var/run/unicornd.socket"));
        assert_eq!(c.channel_order, ChannelOrder::Grb);
        assert!(c.brightness > 0);
    }

    #[test]
    fn serde_roundtrip() {
        let c = DisplayConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: DisplayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.socket_path, c2.socket_path);
        assert_eq!(c.brightness, c2.brightness);
        assert_eq!(c.frame_interval_ms, c2.frame_interval_ms);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let c: DisplayConfig =
            serde_json::from_str(r#"{ "brightness": 40, "channel_order": "rgb" }"#).unwrap();
        assert_eq!(c.brightness, 40);
        assert_eq!(c.channel_order, ChannelOrder::Rgb);
        assert_eq!(c.refresh_interval_secs, 60);
    }

    #[test]
    fn frame_must_fit_in_refresh() {
        let c = DisplayConfig {
            frame_interval_ms: 60_000,
            ..DisplayConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn huge_refresh_interval_is_accepted() {
        let c: DisplayConfig =
            serde_json::from_str(r#"{ "refresh_interval_secs": 18446744073709552 }"#).unwrap();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn refresh_must_leave_room_for_slack_and_one_frame() {
        let short = DisplayConfig {
            refresh_interval_secs: 1,
            frame_interval_ms: 500,
            ..DisplayConfig::default()
        };
        assert!(short.validate().is_err());

        let exact = DisplayConfig {
            refresh_interval_secs: 2,
            frame_interval_ms: 1000,
            ..DisplayConfig::default()
        };
        assert!(exact.validate().is_err());

        let smallest = DisplayConfig {
            refresh_interval_secs: 2,
            frame_interval_ms: 999,
            ..DisplayConfig::default()
        };
        assert!(smallest.validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let c = DisplayConfig {
            write_timeout_ms: 0,
            ..DisplayConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("display.json");
        fs::write(&path, r#"{ "socket_path": "/tmp/u.sock", "verbose": true }"#).unwrap();
        let c = DisplayConfig::load(&path).unwrap();
        assert_eq!(c.socket_path, PathBuf::from("/tmp/u.sock"));
        assert!(c.verbose);
    }

    #[test]
    fn brightness_above_byte_is_a_parse_error() {
        assert!(serde_json::from_str::<DisplayConfig>(r#"{ "brightness": 256 }"#).is_err());
    }
}

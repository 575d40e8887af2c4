//! Panel configuration.
//!
//! Loaded from a TOML file at startup; every field has a default so a
//! missing or partial file still yields a working panel.

use serde::Deserialize;

use crate::error::Result;

/// Configuration for the bellboard panel.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Device service host.
    pub device_host: String,
    /// Device service port.
    pub device_port: u16,
    /// Cadence of the play-status poll, in milliseconds.
    pub poll_interval_ms: u64,
    /// Path polled for play status.
    pub status_path: String,
    /// Path posted to trigger playback.
    pub play_path: String,
    /// Path serving the filter widget's option set.
    pub options_path: String,
    /// Whether filter options start checked.
    pub default_checked: bool,
    /// Whether the filter option list starts collapsed.
    pub default_hidden: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            device_host: "127.0.0.1".to_string(),
            device_port: 8000,
            poll_interval_ms: 100,
            status_path: "/is_playing".to_string(),
            play_path: "/play".to_string(),
            options_path: "/sounds/options".to_string(),
            default_checked: true,
            default_hidden: true,
        }
    }
}

impl PanelConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a file, falling back to defaults if the file
    /// does not exist.
    pub fn load(path: &std::path::Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Device service address as `host:port`.
    pub fn device_addr(&self) -> String {
        format!("{}:{}", self.device_host, self.device_port)
    }
}

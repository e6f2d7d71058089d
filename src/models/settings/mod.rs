// Settings module
// Application configuration read from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Shortest refresh interval accepted for `watch`.
pub const MIN_WATCH_INTERVAL_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// SQLite file backing the key-value store. `None` uses the data dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
    /// Show the new-week notice as a desktop notification.
    pub desktop_notifications: bool,
    /// Seconds between re-checks in `watch`.
    pub watch_interval_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: None,
            desktop_notifications: false,
            watch_interval_secs: 60,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.watch_interval_secs < MIN_WATCH_INTERVAL_SECS {
            return Err(format!(
                "watch_interval_secs must be at least {}",
                MIN_WATCH_INTERVAL_SECS
            ));
        }

        if let Some(ref path) = self.database_path {
            if path.as_os_str().is_empty() {
                return Err("database_path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

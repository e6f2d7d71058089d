use anyhow::Result;
use notify_rust::{Notification, Timeout};

use crate::services::week_tracker::NewWeekNotice;

/// How long the banner stays on screen.
const NEW_WEEK_TIMEOUT_MS: u32 = 4300;

/// Service for displaying desktop notifications
pub struct NotificationService {
    enabled: bool,
}

impl NotificationService {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if desktop notifications are enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show the new-week banner as a desktop notification.
    ///
    /// Returns `Ok(false)` when desktop notifications are disabled so the
    /// caller can print the banner instead.
    pub fn show_new_week(&self, notice: &NewWeekNotice) -> Result<bool> {
        if !self.enabled {
            return Ok(false);
        }

        Notification::new()
            .summary("Wardiya")
            .body(&notice.to_string())
            .timeout(Timeout::Milliseconds(NEW_WEEK_TIMEOUT_MS))
            .show()
            .map_err(|e| anyhow::anyhow!("Failed to show notification: {}", e))?;

        Ok(true)
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new(false)
    }
}

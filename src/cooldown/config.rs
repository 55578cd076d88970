use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Sliding-window limits for how often a mood can be logged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct CooldownConfig {
    /// Length of the rapid window ending at "now".
    pub window_minutes: u32,

    /// Entries inside the window that trigger a cooldown.
    pub max_entries: u32,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            window_minutes: 30,
            max_entries: 3,
        }
    }
}

impl CooldownConfig {
    pub fn window(&self) -> Duration {
        Duration::minutes(i64::from(self.window_minutes))
    }
}

//! User-facing notification configuration.

use serde::{Deserialize, Serialize};

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// When false, success/failure toasts are discarded.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// With toasts disabled, record each notification as a tracing event
    /// instead of discarding it.
    #[serde(default)]
    pub log: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            log: false,
        }
    }
}

fn default_enabled() -> bool {
    true
}

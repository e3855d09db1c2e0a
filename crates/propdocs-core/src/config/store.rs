//! Document store configuration.

use serde::{Deserialize, Serialize};

/// In-memory document store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Populate a fresh session with the demo property dataset.
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
    /// Maximum size of a single uploaded file in bytes (default 100 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_seed() -> bool {
    true
}

fn default_max_upload() -> u64 {
    104_857_600 // 100 MB
}

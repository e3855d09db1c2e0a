//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section, and every field carries a default so that running without a
//! configuration file yields a usable session.

pub mod logging;
pub mod notification;
pub mod store;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use self::logging::LoggingConfig;
pub use self::notification::NotificationConfig;
pub use self::store::StoreConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "PROPDOCS";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (`default.toml` + environment overlay) and `PROPDOCS__*`
/// environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Document store settings.
    #[serde(default)]
    pub store: StoreConfig,
    /// Toast notification settings.
    #[serde(default)]
    pub notifications: NotificationConfig,
}

impl AppConfig {
    /// Load configuration from TOML files in `dir`.
    ///
    /// Merges `default.toml` with an environment-specific overlay
    /// (`{env}.toml`) and environment variables such as
    /// `PROPDOCS__STORE__SEED_DEMO_DATA=false`. Missing files are skipped.
    pub fn load_from(dir: &Path, env: &str) -> Result<Self, AppError> {
        let default_file = dir.join("default");
        let env_file = dir.join(env);

        let config = config::Config::builder()
            .add_source(config::File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(config::File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate()?;
        Ok(parsed)
    }

    /// Reject values that would make the session unusable.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.store.max_upload_size_bytes == 0 {
            return Err(AppError::configuration(
                "store.max_upload_size_bytes must be greater than zero",
            ));
        }
        match self.logging.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(AppError::configuration(format!(
                "Unknown logging.format '{other}' (expected 'json' or 'pretty')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_missing_files_yield_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::load_from(dir.path(), "test").expect("load");
        assert!(config.store.seed_demo_data);
        assert_eq!(config.store.max_upload_size_bytes, 104_857_600);
        assert!(config.notifications.enabled);
        assert!(!config.notifications.log);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_env_overlay_overrides_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("default.toml"),
            "[store]\nseed_demo_data = true\nmax_upload_size_bytes = 2048\n",
        )
        .expect("write default");
        std::fs::write(
            dir.path().join("staging.toml"),
            "[store]\nseed_demo_data = false\n\n[logging]\nformat = \"json\"\n",
        )
        .expect("write overlay");

        let config = AppConfig::load_from(dir.path(), "staging").expect("load");
        assert!(!config.store.seed_demo_data);
        assert_eq!(config.store.max_upload_size_bytes, 2048);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("default.toml"),
            "[logging]\nformat = \"xml\"\n",
        )
        .expect("write default");

        let err = AppConfig::load_from(dir.path(), "test").expect_err("should fail");
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}

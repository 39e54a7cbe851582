//! Application configuration module
//!
//! Configuration is read from environment variables with the `config` and
//! `dotenvy` crates. Variables carry the `SIX_QUESTIONS` prefix and nested
//! values are separated by double underscores. Every value has a default, so
//! the wizard runs with no environment at all.
//!
//! # Example
//!
//! ```no_run
//! use six_questions::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("State lives in {}", config.storage.data_dir.display());
//! ```

mod error;
mod logging;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Where the saved session and printed summaries live
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `SIX_QUESTIONS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SIX_QUESTIONS__STORAGE__DATA_DIR=/var/lib/6q` -> `storage.data_dir`
    /// - `SIX_QUESTIONS__LOGGING__LEVEL=debug` -> `logging.level`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SIX_QUESTIONS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::Path;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SIX_QUESTIONS__STORAGE__DATA_DIR");
        env::remove_var("SIX_QUESTIONS__STORAGE__STATE_KEY");
        env::remove_var("SIX_QUESTIONS__LOGGING__LEVEL");
        env::remove_var("SIX_QUESTIONS__LOGGING__FORMAT");
    }

    #[test]
    fn test_load_with_no_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.storage.data_dir, Path::new("./data"));
        assert_eq!(config.storage.state_key, "6q_state");
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SIX_QUESTIONS__STORAGE__DATA_DIR", "/tmp/six-questions");
        env::set_var("SIX_QUESTIONS__STORAGE__STATE_KEY", "team_state");
        env::set_var("SIX_QUESTIONS__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.storage.data_dir, Path::new("/tmp/six-questions"));
        assert_eq!(config.storage.state_key, "team_state");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_rejects_bad_state_key() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SIX_QUESTIONS__STORAGE__STATE_KEY", "../outside");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStateKey(_))
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}

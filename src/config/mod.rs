//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the `LUDORA`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ludora_core::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod api;
mod error;

pub use api::ApiConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Platform REST API configuration.
    pub api: ApiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads variables with the
    /// `LUDORA` prefix:
    ///
    /// - `LUDORA__API__BASE_URL=https://api.ludora.app` -> `api.base_url`
    /// - `LUDORA__API__TIMEOUT_SECS=10` -> `api.timeout_secs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or cannot be
    /// parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("LUDORA")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("LUDORA__API__BASE_URL", "https://api.ludora.example");
    }

    fn clear_env() {
        env::remove_var("LUDORA__API__BASE_URL");
        env::remove_var("LUDORA__API__TIMEOUT_SECS");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.api.base_url, "https://api.ludora.example");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        assert!(result.unwrap().validate().is_ok());
    }

    #[test]
    fn test_timeout_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().api.timeout_secs, 30);
    }

    #[test]
    fn test_custom_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("LUDORA__API__TIMEOUT_SECS", "10");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().api.timeout_secs, 10);
    }
}

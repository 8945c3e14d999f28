//! Platform REST API configuration

use serde::Deserialize;

use super::error::ValidationError;

fn default_timeout_secs() -> u64 {
    30
}

/// REST API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the platform API server.
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Validate API configuration.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("LUDORA__API__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> ApiConfig {
        ApiConfig {
            base_url: "https://api.ludora.example".to_string(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let mut config = valid_config();
        config.base_url = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_base_url_rejected() {
        let mut config = valid_config();
        config.base_url = "ftp://api.ludora.example".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = valid_config();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}

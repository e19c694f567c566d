//! Delivery endpoint configuration.

use serde::{Deserialize, Serialize};

/// Default delivery API host.
pub const DEFAULT_BASE_URL: &str = "https://cdn.contentful.com";

/// Default environment within a space.
pub const DEFAULT_ENVIRONMENT: &str = "master";

/// Default maximum entries per fetch.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Configuration for the delivery API client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmsConfig {
    /// Delivery API host, without a trailing path
    pub base_url: String,
    /// Space identifier
    pub space_id: String,
    /// Environment within the space
    pub environment: String,
    /// Delivery access token
    pub access_token: String,
    /// Maximum entries per fetch
    pub page_size: u32,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            space_id: String::new(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            access_token: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CmsConfig {
    /// Check that the config can actually reach a space.
    pub fn validate(&self) -> Result<(), String> {
        if self.space_id.trim().is_empty() {
            return Err("space_id is not set".to_string());
        }
        if self.access_token.trim().is_empty() {
            return Err("access_token is not set".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CmsConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.environment, DEFAULT_ENVIRONMENT);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_validate_requires_space_and_token() {
        let mut config = CmsConfig::default();
        assert!(config.validate().is_err());

        config.space_id = "space123".to_string();
        assert!(config.validate().is_err());

        config.access_token = "token".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = CmsConfig {
            space_id: "space123".to_string(),
            access_token: "token".to_string(),
            ..CmsConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: CmsConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

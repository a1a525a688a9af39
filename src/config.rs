//! Configuration handling for the relay client

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Relay endpoint used when nothing is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Tenant access key baked into the client.
///
/// This is the site key the public websites ship to every visitor's
/// browser; it identifies the account to the relay and is public by the
/// nature of the integration. It is not a secret and must not be treated
/// as one.
pub const DEFAULT_ACCESS_KEY: &str = "276695ce-1e44-4cb0-bc1f-df51e6a92587";

/// User configuration for the relay
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RelayConfig {
    /// Web3Forms tenant access key
    pub access_key: Option<String>,
    /// Relay endpoint override
    pub endpoint: Option<String>,
}

impl RelayConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "inquiry", "inquiry-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: RelayConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayConfig::default();
        assert!(config.access_key.is_none());
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = RelayConfig {
            access_key: Some("key-123".to_string()),
            endpoint: Some("https://relay.example.com/submit".to_string()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: RelayConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.access_key, Some("key-123".to_string()));
        assert_eq!(
            parsed.endpoint,
            Some("https://relay.example.com/submit".to_string())
        );
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: RelayConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.access_key.is_none());
        assert!(parsed.endpoint.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"access_key": "key-123", "unknown_field": "value"}"#;
        let parsed: RelayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.access_key, Some("key-123".to_string()));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = RelayConfig::load();
        assert!(result.is_ok());
    }
}

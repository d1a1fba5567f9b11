/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed client configuration
[POS]:    Configuration layer - owner and connection setup
[UPDATE]: When adding new configuration options
*/

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use taskdock_adapter::{ClientConfig, DEFAULT_BASE_URL};

/// Top-level configuration for the taskdock CLI
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Owner identifier whose remote collection is addressed
    pub owner: String,
    /// Collection root of the remote service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Configuration for `owner` with default connection settings
    pub fn for_owner(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }

    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Connection settings for the adapter client
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

//! Store connection configuration

use lawcases_types::Connector;
use serde::{Deserialize, Serialize};

/// Store connection configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store connector type
    #[serde(default)]
    pub connector: Connector,

    /// Endpoint URL, connection string, or fixture path depending on the connector
    #[serde(alias = "connection_string")]
    #[serde(default)]
    pub url: String,

    /// Access key sent with every request to a hosted store
    #[serde(default)]
    pub key: String,

    /// Per-request timeout for the store client, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl StoreConfig {
    /// Create a new store configuration
    pub fn new(connector: Connector, url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            connector,
            url: url.into(),
            key: key.into(),
            timeout_secs: None,
        }
    }

    /// Names of the settings that are required but empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.connector != Connector::Memory && self.url.trim().is_empty() {
            missing.push("url");
        }
        if self.connector.requires_key() && self.key.trim().is_empty() {
            missing.push("key");
        }
        missing
    }

    /// True when every required setting has a value
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

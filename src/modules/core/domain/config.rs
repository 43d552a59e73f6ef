//! Root service configuration

use serde::{Deserialize, Serialize};

use super::{CasesConfig, LogFormat, ServerConfig, StoreConfig};

/// Root configuration, built once at startup and shared read-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Name of the service, used in logs and generated docs
    #[serde(default = "default_name")]
    pub name: String,

    /// Store connection
    #[serde(default)]
    pub store: StoreConfig,

    /// Case listing settings
    #[serde(default)]
    pub cases: CasesConfig,

    /// Server configuration (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

fn default_name() -> String {
    "lawcases".to_string()
}

impl Config {
    /// Create a configuration with the given store and default settings elsewhere
    pub fn new(store: StoreConfig) -> Self {
        Self {
            name: default_name(),
            store,
            cases: CasesConfig::default(),
            server: None,
        }
    }

    /// Get the server port, defaulting to 8080
    pub fn port(&self) -> u16 {
        self.server
            .as_ref()
            .and_then(|s| s.port.as_ref())
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(8080)
    }

    /// Override the server port
    pub fn set_port(&mut self, port: u16) {
        self.server.get_or_insert_with(ServerConfig::default).port = Some(port.to_string());
    }

    /// Get the log level, defaulting to 1 (INFO)
    pub fn log_level(&self) -> u8 {
        self.server
            .as_ref()
            .and_then(|s| s.log_level)
            .unwrap_or(1)
    }

    /// Get the log format, defaulting to text
    pub fn log_format(&self) -> LogFormat {
        self.server
            .as_ref()
            .and_then(|s| s.log_format)
            .unwrap_or_default()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

//! Additional configuration types

use serde::{Deserialize, Serialize};

/// Connection pool configuration for the direct PostgreSQL connector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Maximum number of connections in the pool (default: 10)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,

    /// Minimum number of connections to maintain (default: 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_connections: Option<u32>,

    /// Connection acquire timeout in seconds (default: 30)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acquire_timeout_secs: Option<u64>,

    /// Idle connection timeout in seconds (default: 600)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout_secs: Option<u64>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: Some(10),
            min_connections: Some(0),
            acquire_timeout_secs: Some(30),
            idle_timeout_secs: Some(600),
        }
    }
}

impl PoolConfig {
    /// Get max connections with default fallback
    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(10)
    }

    /// Get min connections with default fallback
    pub fn min_connections(&self) -> u32 {
        self.min_connections.unwrap_or(0)
    }

    /// Get acquire timeout with default fallback
    pub fn acquire_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.acquire_timeout_secs.unwrap_or(30))
    }

    /// Get idle timeout with default fallback
    pub fn idle_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.idle_timeout_secs.unwrap_or(600))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on (default: 8080)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,

    /// Log level: 0=DEBUG, 1=INFO, 2=WARN, 3=ERROR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<u8>,

    /// Log output format (default: text)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_format: Option<LogFormat>,

    /// Connection pool configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolConfig>,
}

/// Where the cases live and how they are listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasesConfig {
    /// Table holding the case rows
    #[serde(default = "default_table")]
    pub table: String,

    /// Column compared against the `type` query parameter
    #[serde(default = "default_type_column")]
    pub type_column: String,

    /// Column the listing is ordered by, newest first
    #[serde(default = "default_order_column")]
    pub order_column: String,

    /// Upper bound applied to the requested page size
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

fn default_table() -> String {
    "law_cases".to_string()
}

fn default_type_column() -> String {
    "case_type".to_string()
}

fn default_order_column() -> String {
    "crawl_time".to_string()
}

fn default_max_page_size() -> u32 {
    100
}

impl Default for CasesConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            type_column: default_type_column(),
            order_column: default_order_column(),
            max_page_size: default_max_page_size(),
        }
    }
}

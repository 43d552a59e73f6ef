//! YAML configuration parser

use lawcases_core::{CasesConfig, Config, LawCasesError, LogFormat, PoolConfig, ServerConfig, StoreConfig};
use serde::Deserialize;

use crate::env::EnvSubstitutor;

/// YAML parser for lawcases configuration files
pub struct YamlParser;

/// On-disk schema. Mirrors `Config` but accepts a numeric `server.port`.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    store: StoreConfig,

    #[serde(default)]
    cases: CasesConfig,

    #[serde(default)]
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    #[serde(default)]
    port: Option<serde_yaml::Value>,

    #[serde(default)]
    log_level: Option<u8>,

    #[serde(default)]
    log_format: Option<LogFormat>,

    #[serde(default)]
    pool: Option<PoolConfig>,
}

impl YamlParser {
    /// Parse a YAML string into a Config, substituting `{{ env.VAR }}` placeholders
    pub fn parse(content: &str) -> Result<Config, LawCasesError> {
        let substituted = EnvSubstitutor::lenient().substitute(content)?;
        Self::parse_raw(&substituted)
    }

    /// Parse a YAML string without environment variable substitution
    pub fn parse_raw(content: &str) -> Result<Config, LawCasesError> {
        let raw = serde_yaml::from_str::<RawConfig>(content)
            .map_err(|e| LawCasesError::Config(format!("YAML parse error: {}", e)))?;
        Ok(raw_to_config(raw))
    }
}

fn raw_to_config(raw: RawConfig) -> Config {
    let server = raw.server.map(|s| ServerConfig {
        port: s.port.and_then(yaml_scalar_to_string),
        log_level: s.log_level,
        log_format: s.log_format,
        pool: s.pool,
    });

    let mut config = Config::new(raw.store);
    if let Some(name) = raw.name {
        config.name = name;
    }
    config.cases = raw.cases;
    config.server = server;
    config
}

fn yaml_scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Null => None,
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) if s.trim().is_empty() => None,
        serde_yaml::Value::String(s) => Some(s),
        _ => None,
    }
}

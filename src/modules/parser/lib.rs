//! Configuration parsing for lawcases
//!
//! This crate loads the service configuration from a YAML file (with
//! `{{ env.VAR }}` placeholders) or, when no file exists, straight from the
//! environment, and validates it.

pub mod env;
pub mod validator;
pub mod yaml;

pub use env::{config_from_env, EnvSubstitutor};
pub use validator::ConfigValidator;
pub use yaml::YamlParser;

use lawcases_core::{Config, LawCasesError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Environment,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// Load the configuration from `path`, falling back to the environment
/// when the file does not exist
pub fn load(path: impl AsRef<Path>) -> Result<(Config, ConfigSource), LawCasesError> {
    env::load_dotenv();

    let path = path.as_ref();
    if path.exists() {
        let config = parse_file(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }

    let config = config_from_env()?;
    ConfigValidator::new().validate(&config)?;
    Ok((config, ConfigSource::Environment))
}

/// Parse a configuration file from a path
pub fn parse_file(path: impl AsRef<Path>) -> Result<Config, LawCasesError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        LawCasesError::Config(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    parse_string(&content)
}

/// Parse a configuration from a string
pub fn parse_string(content: &str) -> Result<Config, LawCasesError> {
    let config = YamlParser::parse(content)?;

    // Warnings are reported by the caller at startup.
    ConfigValidator::new().validate(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawcases_types::Connector;
    use std::io::Write;

    #[test]
    fn test_parse_simple_config() {
        let yaml = r#"
name: law-cases
store:
  connector: memory
"#;
        let config = parse_string(yaml).unwrap();
        assert_eq!(config.name, "law-cases");
        assert_eq!(config.store.connector, Connector::Memory);
    }

    #[test]
    fn test_parse_string_rejects_invalid_identifiers() {
        let yaml = "cases:\n  table: \"cases; --\"\n";
        assert!(matches!(parse_string(yaml), Err(LawCasesError::Validation(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "store:\n  connector: memory\nserver:\n  port: 7070").unwrap();

        let (config, source) = load(file.path()).unwrap();
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
        assert_eq!(config.port(), 7070);
    }

    #[test]
    fn test_load_falls_back_to_environment() {
        let dir = tempfile::tempdir().unwrap();
        let (_, source) = load(dir.path().join("missing.yaml")).unwrap();
        assert_eq!(source, ConfigSource::Environment);
        assert_eq!(source.to_string(), "environment");
    }
}

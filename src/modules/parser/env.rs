//! Environment variable handling
//!
//! Placeholder substitution for configuration files and the
//! environment-only configuration used when no file is present.

use lawcases_core::{Config, LawCasesError, StoreConfig};
use lawcases_types::Connector;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for environment variable placeholders: {{ env.VAR_NAME }}
static ENV_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap()
});

/// Hosted store endpoint
pub const STORE_URL_VAR: &str = "SUPABASE_URL";

/// Hosted store access key
pub const STORE_KEY_VAR: &str = "SUPABASE_KEY";

/// Optional connector override (`postgrest`, `postgres`, `memory`)
pub const STORE_CONNECTOR_VAR: &str = "STORE_CONNECTOR";

/// Listening port, as set by most hosting platforms
pub const PORT_VAR: &str = "PORT";

/// Load a `.env` file from the working directory, if any
pub fn load_dotenv() {
    // A missing .env is the normal case in deployed environments.
    let _ = dotenvy::dotenv();
}

/// Environment variable substitutor
pub struct EnvSubstitutor {
    /// Whether to fail on missing environment variables
    strict: bool,
}

impl EnvSubstitutor {
    /// Create a substitutor that fails on missing variables
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Create a substitutor that replaces missing variables with an empty string
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    /// Substitute environment variables in the given content
    pub fn substitute(&self, content: &str) -> Result<String, LawCasesError> {
        self.substitute_with(content, |name| std::env::var(name).ok())
    }

    /// Substitute placeholders using `lookup` to resolve variable names
    pub fn substitute_with<F>(&self, content: &str, lookup: F) -> Result<String, LawCasesError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<String> = Vec::new();

        let result = ENV_PATTERN.replace_all(content, |cap: &regex::Captures<'_>| {
            let name = &cap[1];
            match lookup(name) {
                Some(value) => value,
                None => {
                    if !missing.iter().any(|m| m == name) {
                        missing.push(name.to_string());
                    }
                    String::new()
                }
            }
        });

        if self.strict && !missing.is_empty() {
            return Err(LawCasesError::Config(format!(
                "Environment variable not found: {}",
                missing.join(", ")
            )));
        }

        Ok(result.into_owned())
    }

}

impl Default for EnvSubstitutor {
    fn default() -> Self {
        Self::lenient()
    }
}

/// Build a configuration from the process environment
pub fn config_from_env() -> Result<Config, LawCasesError> {
    config_from_lookup(|name| std::env::var(name).ok())
}

/// Build a configuration from variables resolved through `lookup`
pub fn config_from_lookup<F>(lookup: F) -> Result<Config, LawCasesError>
where
    F: Fn(&str) -> Option<String>,
{
    let connector = match lookup(STORE_CONNECTOR_VAR).filter(|v| !v.trim().is_empty()) {
        Some(value) => value
            .parse::<Connector>()
            .map_err(|e| LawCasesError::Config(format!("{}: {}", STORE_CONNECTOR_VAR, e)))?,
        None => Connector::default(),
    };

    let store = StoreConfig::new(
        connector,
        lookup(STORE_URL_VAR).unwrap_or_default(),
        lookup(STORE_KEY_VAR).unwrap_or_default(),
    );

    let mut config = Config::new(store);
    if let Some(port) = lookup(PORT_VAR).filter(|p| !p.trim().is_empty()) {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| LawCasesError::Config(format!("{} is not a valid port: {}", PORT_VAR, port)))?;
        config.set_port(port);
    }

    Ok(config)
}

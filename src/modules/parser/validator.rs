//! Configuration validation

use lawcases_core::{Config, LawCasesError};
use lawcases_types::Connector;
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for table and column names that are safe to splice into queries
static IDENTIFIER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]{0,62}$").unwrap());

/// Regex pattern for http(s) endpoints
static HTTP_URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/]+").unwrap());

/// Configuration validator
///
/// Hard problems are returned as errors. A missing store URL or key is only
/// a warning: the server still starts and requests fail once they reach the
/// store.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate the configuration, returning non-fatal warnings on success
    pub fn validate(&self, config: &Config) -> Result<Vec<LawCasesError>, LawCasesError> {
        self.validate_name(&config.name)?;
        self.validate_cases(config)?;
        self.validate_store(config)?;
        Ok(self.warnings(config))
    }

    /// Non-fatal problems with the configuration
    pub fn warnings(&self, config: &Config) -> Vec<LawCasesError> {
        let missing = config.store.missing_fields();
        if missing.is_empty() {
            return Vec::new();
        }

        vec![LawCasesError::ConfigurationMissing(format!(
            "store {} not set for the {} connector",
            missing.join(" and "),
            config.store.connector
        ))]
    }

    fn validate_name(&self, name: &str) -> Result<(), LawCasesError> {
        if name.trim().is_empty() {
            return Err(LawCasesError::Validation(
                "Service name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_cases(&self, config: &Config) -> Result<(), LawCasesError> {
        let cases = &config.cases;
        for (field, value) in [
            ("table", &cases.table),
            ("type_column", &cases.type_column),
            ("order_column", &cases.order_column),
        ] {
            if !IDENTIFIER_PATTERN.is_match(value) {
                return Err(LawCasesError::Validation(format!(
                    "Invalid cases.{} '{}': must be a plain SQL identifier",
                    field, value
                )));
            }
        }

        if cases.max_page_size == 0 {
            return Err(LawCasesError::Validation(
                "cases.max_page_size must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_store(&self, config: &Config) -> Result<(), LawCasesError> {
        let store = &config.store;
        if store.connector == Connector::Postgrest
            && !store.url.trim().is_empty()
            && !HTTP_URL_PATTERN.is_match(store.url.trim())
        {
            return Err(LawCasesError::Validation(format!(
                "Store url '{}' must start with http:// or https://",
                store.url
            )));
        }

        if store.timeout_secs == Some(0) {
            return Err(LawCasesError::Validation(
                "store.timeout_secs must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

//! Validate command implementation

use clap::Args;
use lawcases_core::{Config, LawCasesError};
use lawcases_parser::{ConfigSource, ConfigValidator};
use lawcases_runtime::Runtime;
use tracing::{info, warn};

/// Validate command arguments
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Also query the store to check that it is reachable
    #[arg(long)]
    pub check_store: bool,

    /// Treat missing store credentials as an error
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub async fn execute(&self, config: Config, source: &ConfigSource) -> Result<(), LawCasesError> {
        // Hard errors were already raised while loading.
        let warnings = ConfigValidator::new().warnings(&config);
        for warning in &warnings {
            warn!("{}", warning);
        }
        if self.strict {
            if let Some(first) = warnings.into_iter().next() {
                return Err(first);
            }
        }

        println!("Configuration OK ({})", source);
        println!("  store:   {}", config.store.connector);
        println!("  table:   {}", config.cases.table);
        println!("  port:    {}", config.port());

        if self.check_store {
            let runtime = Runtime::new(config).await?;
            runtime.executor().health_check().await?;
            info!("Store reachable");
            println!("  store check: ok");
            runtime.shutdown().await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawcases_core::StoreConfig;
    use lawcases_types::Connector;

    #[tokio::test]
    async fn test_validate_memory_store() {
        let cmd = ValidateCommand {
            check_store: true,
            strict: true,
        };
        let config = Config::new(StoreConfig::new(Connector::Memory, "", ""));
        assert!(cmd.execute(config, &ConfigSource::Environment).await.is_ok());
    }

    #[tokio::test]
    async fn test_strict_rejects_missing_credentials() {
        let cmd = ValidateCommand {
            check_store: false,
            strict: true,
        };
        let config = Config::new(StoreConfig::new(Connector::Postgrest, "", ""));
        let result = cmd.execute(config, &ConfigSource::Environment).await;
        assert!(matches!(result, Err(LawCasesError::ConfigurationMissing(_))));
    }

    #[tokio::test]
    async fn test_check_store_fails_without_credentials() {
        let cmd = ValidateCommand {
            check_store: true,
            strict: false,
        };
        let config = Config::new(StoreConfig::new(Connector::Postgrest, "", ""));
        assert!(cmd.execute(config, &ConfigSource::Environment).await.is_err());
    }
}

//! Store connectors for lawcases
//!
//! This module provides the hosted (PostgREST), direct PostgreSQL and
//! in-memory connectors, plus the factory that picks one from configuration.

mod memory;
mod postgres;
mod postgrest;
mod traits;

pub use memory::MemoryConnector;
pub use postgres::PostgresConnector;
pub use postgrest::PostgrestConnector;
pub use traits::{Connector, Page};

use async_trait::async_trait;
use lawcases_core::{CaseQuery, Config, LawCasesError};
use lawcases_types::Connector as ConnectorType;
use std::sync::Arc;

/// Create the connector described by `config`
///
/// Never touches the network. A store with missing credentials yields a
/// connector that fails every query, so the server can still start. The
/// missing fields are reported by `ConfigValidator::warnings`.
pub fn connect(config: &Config) -> Result<Arc<dyn Connector>, LawCasesError> {
    let store = &config.store;
    let missing = store.missing_fields();
    if !missing.is_empty() {
        return Ok(Arc::new(UnconfiguredConnector {
            missing: missing.join(" and "),
        }));
    }

    match store.connector {
        ConnectorType::Postgrest => Ok(Arc::new(PostgrestConnector::new(store)?)),
        ConnectorType::Postgres => {
            let pool = config
                .server
                .as_ref()
                .and_then(|s| s.pool.clone())
                .unwrap_or_default();
            Ok(Arc::new(PostgresConnector::new(&store.url, &pool)?))
        }
        ConnectorType::Memory => {
            if store.url.trim().is_empty() {
                Ok(Arc::new(MemoryConnector::new(Vec::new())))
            } else {
                Ok(Arc::new(MemoryConnector::from_file(store.url.trim())?))
            }
        }
    }
}

/// Stand-in used when the store URL or key is missing
struct UnconfiguredConnector {
    missing: String,
}

impl UnconfiguredConnector {
    fn error(&self) -> LawCasesError {
        LawCasesError::ConfigurationMissing(format!("store {} not set", self.missing))
    }
}

#[async_trait]
impl Connector for UnconfiguredConnector {
    async fn fetch_page(&self, _query: &CaseQuery) -> Result<Page, LawCasesError> {
        Err(self.error())
    }

    async fn health_check(&self, _table: &str) -> Result<(), LawCasesError> {
        Err(self.error())
    }

    async fn close(&self) -> Result<(), LawCasesError> {
        Ok(())
    }

    fn connector_type(&self) -> &'static str {
        "unconfigured"
    }
}

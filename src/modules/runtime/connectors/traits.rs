//! Connector trait definition

use async_trait::async_trait;
use lawcases_core::{CaseQuery, LawCasesError};
use lawcases_types::CaseRecord;

/// One page of rows plus the exact number of matching rows, when the store
/// reported it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub rows: Vec<CaseRecord>,
    pub total: Option<u64>,
}

/// Trait for store connectors
///
/// Every connector answers the same query shape: one table, an optional
/// equality filter, a single sort column and an inclusive row range.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Fetch the rows selected by `query` together with the total match count
    async fn fetch_page(&self, query: &CaseQuery) -> Result<Page, LawCasesError>;

    /// Check that the store answers queries against `table`
    async fn health_check(&self, table: &str) -> Result<(), LawCasesError>;

    /// Close the connection and release resources
    async fn close(&self) -> Result<(), LawCasesError>;

    /// Get the connector type name
    fn connector_type(&self) -> &'static str;
}

//! Case listing execution
//!
//! Turns listing parameters into a store query, runs it and shapes the
//! page into the response payload.

use lawcases_core::{CaseQuery, CasesConfig, LawCasesError, ListParams};
use lawcases_types::{CaseList, Pagination};
use std::sync::Arc;
use tracing::{debug, info};

use crate::connectors::Connector;

/// Executes case listings against a single store
pub struct CaseExecutor {
    connector: Arc<dyn Connector>,
    cases: CasesConfig,
}

impl CaseExecutor {
    /// Create a new executor
    pub fn new(connector: Arc<dyn Connector>, cases: CasesConfig) -> Self {
        Self { connector, cases }
    }

    /// Decode listing parameters using this executor's page size cap
    pub fn params<I, K, V>(&self, pairs: I) -> ListParams
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        ListParams::from_pairs(pairs, self.cases.max_page_size)
    }

    /// List one page of cases
    pub async fn list(&self, params: &ListParams) -> Result<CaseList, LawCasesError> {
        let query = CaseQuery::for_params(&self.cases, params);
        debug!(
            table = %query.table,
            filter = ?query.filter,
            from = query.range.from,
            to = query.range.to,
            "Querying store"
        );

        let page = self.connector.fetch_page(&query).await?;

        let mut list = page.rows;
        list.truncate(params.size as usize);
        let pagination = Pagination::new(params.page, params.size, page.total.unwrap_or(0));

        info!(
            "Listed {} of {} cases (page {}, size {})",
            list.len(),
            pagination.total,
            pagination.page,
            pagination.size
        );

        Ok(CaseList { list, pagination })
    }

    /// Check that the store can serve the cases table
    pub async fn health_check(&self) -> Result<(), LawCasesError> {
        self.connector.health_check(&self.cases.table).await
    }

    /// Get the connector type name
    pub fn connector_type(&self) -> &'static str {
        self.connector.connector_type()
    }

    /// Close the underlying connector
    pub async fn close(&self) -> Result<(), LawCasesError> {
        self.connector.close().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connectors::{MemoryConnector, Page};
    use async_trait::async_trait;
    use lawcases_types::CaseRecord;
    use serde_json::{json, Value};

    fn rows(count: u64) -> Vec<CaseRecord> {
        (1..=count)
            .map(|i| {
                let case_type = if i % 2 == 0 { "civil" } else { "criminal" };
                let crawl_time = format!("2024-01-{:02}", i);
                match json!({"id": i, "case_type": case_type, "crawl_time": crawl_time}) {
                    Value::Object(map) => map,
                    _ => unreachable!(),
                }
            })
            .collect()
    }

    fn executor(count: u64) -> CaseExecutor {
        CaseExecutor::new(
            Arc::new(MemoryConnector::new(rows(count))),
            CasesConfig::default(),
        )
    }

    /// Store that ignores the requested range and reports no count
    struct SloppyStore;

    #[async_trait]
    impl Connector for SloppyStore {
        async fn fetch_page(&self, _query: &CaseQuery) -> Result<Page, LawCasesError> {
            Ok(Page {
                rows: rows(30),
                total: None,
            })
        }

        async fn health_check(&self, _table: &str) -> Result<(), LawCasesError> {
            Ok(())
        }

        async fn close(&self) -> Result<(), LawCasesError> {
            Ok(())
        }

        fn connector_type(&self) -> &'static str {
            "sloppy"
        }
    }

    #[tokio::test]
    async fn test_second_page_of_twelve() {
        let executor = executor(12);
        let params = executor.params([("page", "2"), ("size", "5")]);
        let result = executor.list(&params).await.unwrap();

        assert_eq!(result.list.len(), 5);
        assert_eq!(
            result.pagination,
            Pagination {
                page: 2,
                size: 5,
                total: 12,
                pages: 3
            }
        );
        // Newest first: ids 12..1, so page 2 starts at id 7.
        assert_eq!(result.list[0]["id"], 7);
    }

    #[tokio::test]
    async fn test_filter_and_order() {
        let executor = executor(12);
        let params = executor.params([("type", "civil")]);
        let result = executor.list(&params).await.unwrap();

        assert_eq!(result.pagination.total, 6);
        assert!(result.list.iter().all(|r| r["case_type"] == "civil"));
        let times: Vec<&str> = result
            .list
            .iter()
            .map(|r| r["crawl_time"].as_str().unwrap())
            .collect();
        assert!(times.windows(2).all(|w| w[0] >= w[1]));
    }

    #[tokio::test]
    async fn test_empty_store() {
        let executor = executor(0);
        let result = executor.list(&ListParams::default()).await.unwrap();
        assert!(result.list.is_empty());
        assert_eq!(result.pagination.total, 0);
        assert_eq!(result.pagination.pages, 0);
    }

    #[tokio::test]
    async fn test_missing_count_and_oversized_page() {
        let executor = CaseExecutor::new(Arc::new(SloppyStore), CasesConfig::default());
        let result = executor.list(&ListParams::default()).await.unwrap();
        assert_eq!(result.list.len(), 10);
        assert_eq!(result.pagination.total, 0);
        assert_eq!(result.pagination.pages, 0);
    }
}

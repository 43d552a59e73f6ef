//! Store query shape for one page of cases

use serde::{Deserialize, Serialize};

use super::{CasesConfig, ListParams};

/// Equality filter on a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

/// Sort order on a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

/// Inclusive, zero-based row window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRange {
    pub from: u64,
    pub to: u64,
}

impl RowRange {
    /// Number of rows in the window
    pub fn limit(&self) -> u64 {
        self.to.saturating_sub(self.from) + 1
    }
}

/// A filtered, ordered, ranged select over the cases table
///
/// Always selects every column and asks for the exact number of matching
/// rows alongside the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseQuery {
    pub table: String,
    pub filter: Option<Filter>,
    pub order: Order,
    pub range: RowRange,
}

impl CaseQuery {
    /// Build the query for a page of cases
    pub fn for_params(cases: &CasesConfig, params: &ListParams) -> Self {
        let filter = params
            .case_type
            .as_ref()
            .filter(|t| !t.is_empty())
            .map(|value| Filter {
                column: cases.type_column.clone(),
                value: value.clone(),
            });

        Self {
            table: cases.table.clone(),
            filter,
            order: Order {
                column: cases.order_column.clone(),
                descending: true,
            },
            range: params.range(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_without_filter() {
        let query = CaseQuery::for_params(&CasesConfig::default(), &ListParams::default());
        assert_eq!(query.table, "law_cases");
        assert!(query.filter.is_none());
        assert_eq!(query.order.column, "crawl_time");
        assert!(query.order.descending);
        assert_eq!(query.range, RowRange { from: 0, to: 9 });
        assert_eq!(query.range.limit(), 10);
    }

    #[test]
    fn test_query_with_type_filter() {
        let params = ListParams::new(3, 4, Some("civil".to_string()));
        let query = CaseQuery::for_params(&CasesConfig::default(), &params);
        assert_eq!(
            query.filter,
            Some(Filter {
                column: "case_type".to_string(),
                value: "civil".to_string(),
            })
        );
        assert_eq!(query.range, RowRange { from: 8, to: 11 });
    }

    #[test]
    fn test_query_uses_configured_columns() {
        let cases = CasesConfig {
            table: "archive".to_string(),
            type_column: "kind".to_string(),
            order_column: "fetched_at".to_string(),
            max_page_size: 50,
        };
        let params = ListParams::new(1, 10, Some("criminal".to_string()));
        let query = CaseQuery::for_params(&cases, &params);
        assert_eq!(query.table, "archive");
        assert_eq!(query.filter.unwrap().column, "kind");
        assert_eq!(query.order.column, "fetched_at");
    }
}

//! In-process connector over a fixed set of rows

use async_trait::async_trait;
use lawcases_core::{CaseQuery, LawCasesError};
use lawcases_types::CaseRecord;
use serde_json::Value;
use std::cmp::Ordering;
use std::path::Path;

use super::traits::{Connector, Page};

/// Connector answering queries from rows held in memory
///
/// Ordering follows PostgreSQL: missing and `null` values sort as the
/// largest value, so they come first in descending order.
pub struct MemoryConnector {
    rows: Vec<CaseRecord>,
}

impl MemoryConnector {
    /// Create a connector over `rows`
    pub fn new(rows: Vec<CaseRecord>) -> Self {
        Self { rows }
    }

    /// Load rows from a JSON file holding an array of objects
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LawCasesError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LawCasesError::Config(format!("Failed to read fixture '{}': {}", path.display(), e))
        })?;
        let rows: Vec<CaseRecord> = serde_json::from_str(&content)?;
        Ok(Self::new(rows))
    }

    /// Number of rows held
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Text form used for equality filters, matching how the value is written
/// in a query string
fn filter_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[async_trait]
impl Connector for MemoryConnector {
    async fn fetch_page(&self, query: &CaseQuery) -> Result<Page, LawCasesError> {
        let mut matching: Vec<&CaseRecord> = self
            .rows
            .iter()
            .filter(|row| match &query.filter {
                Some(filter) => row
                    .get(&filter.column)
                    .and_then(filter_text)
                    .is_some_and(|text| text == filter.value),
                None => true,
            })
            .collect();

        let column = &query.order.column;
        matching.sort_by(|a, b| {
            let ordering = compare_values(a.get(column), b.get(column));
            if query.order.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });

        let total = matching.len() as u64;
        let skip = usize::try_from(query.range.from).unwrap_or(usize::MAX);
        let take = usize::try_from(query.range.limit()).unwrap_or(usize::MAX);
        let rows = matching.into_iter().skip(skip).take(take).cloned().collect();

        Ok(Page {
            rows,
            total: Some(total),
        })
    }

    async fn health_check(&self, _table: &str) -> Result<(), LawCasesError> {
        Ok(())
    }

    async fn close(&self) -> Result<(), LawCasesError> {
        Ok(())
    }

    fn connector_type(&self) -> &'static str {
        "memory"
    }
}

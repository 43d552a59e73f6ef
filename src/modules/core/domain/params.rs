//! Listing parameters decoded from the request query string

use serde::{Deserialize, Serialize};

use super::RowRange;

/// Page used when `page` is absent or malformed
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when `size` is absent or malformed
pub const DEFAULT_SIZE: u32 = 10;

/// Typed listing parameters for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    /// 1-based page number
    pub page: u32,
    /// Rows per page
    pub size: u32,
    /// Exact `case_type` to filter on, if any
    pub case_type: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_SIZE,
            case_type: None,
        }
    }
}

impl ListParams {
    /// Create parameters from already validated values
    pub fn new(page: u32, size: u32, case_type: Option<String>) -> Self {
        Self {
            page,
            size,
            case_type: case_type.filter(|t| !t.is_empty()),
        }
    }

    /// Decode parameters from query-string pairs
    ///
    /// Values that are missing, non-numeric or below 1 fall back to the
    /// defaults. `size` is clamped to `max_size`. When a key repeats, the
    /// first occurrence wins.
    pub fn from_pairs<I, K, V>(pairs: I, max_size: u32) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut page = None;
        let mut size = None;
        let mut case_type = None;

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "page" if page.is_none() => page = Some(parse_positive(value)),
                "size" if size.is_none() => size = Some(parse_positive(value)),
                "type" if case_type.is_none() => case_type = Some(value.to_string()),
                _ => {}
            }
        }

        let page = page
            .flatten()
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(DEFAULT_PAGE);
        let size = size
            .flatten()
            .map(|s| s.min(u64::from(max_size.max(1))) as u32)
            .unwrap_or_else(|| DEFAULT_SIZE.min(max_size.max(1)));

        Self::new(page, size, case_type)
    }

    /// Number of rows skipped before this page
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.size)
    }

    /// Inclusive row window covered by this page
    pub fn range(&self) -> RowRange {
        let from = self.offset();
        RowRange {
            from,
            to: from + u64::from(self.size.max(1)) - 1,
        }
    }
}

fn parse_positive(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().filter(|v| *v >= 1)
}

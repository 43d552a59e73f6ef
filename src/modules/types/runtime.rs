//! Runtime type definitions for request/response handling

use serde::{Deserialize, Serialize};

/// A single row from the cases table, passed through untouched
pub type CaseRecord = serde_json::Map<String, serde_json::Value>;

/// Message carried by every successful envelope
pub const SUCCESS_MESSAGE: &str = "success";

/// Response envelope wrapping every JSON body the server produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Mirrors the HTTP status code
    pub code: u16,
    /// Human-readable outcome
    pub msg: String,
    /// Payload; serialized as `null` on errors
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Create a 200 envelope carrying `data`
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            msg: SUCCESS_MESSAGE.to_string(),
            data: Some(data),
        }
    }

    /// Create an envelope with no payload
    pub fn error(code: u16, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

/// Pagination metadata returned alongside a page of cases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    /// Build pagination metadata; `pages` is 0 when nothing matched
    pub fn new(page: u32, size: u32, total: u64) -> Self {
        let pages = if total == 0 || size == 0 {
            0
        } else {
            total.div_ceil(u64::from(size))
        };

        Self {
            page,
            size,
            total,
            pages,
        }
    }
}

/// Payload of a successful case listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseList {
    /// Rows of the requested page, never absent
    #[serde(default)]
    pub list: Vec<CaseRecord>,
    pub pagination: Pagination,
}

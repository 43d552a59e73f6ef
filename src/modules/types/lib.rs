//! Type definitions for lawcases
//!
//! Shared wire types used across the workspace: the store connector kind,
//! the response envelope and the paginated case list it carries.

pub mod connector;
pub mod runtime;

pub use connector::Connector;
pub use runtime::{CaseList, CaseRecord, Envelope, Pagination};

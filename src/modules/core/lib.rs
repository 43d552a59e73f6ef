//! Core domain logic for lawcases
//!
//! This crate contains the configuration model, request parameter parsing,
//! store query construction and the error type shared by every crate.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::LawCasesError;

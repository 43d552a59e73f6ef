//! Runtime server for lawcases
//!
//! This crate provides the HTTP server, store connectors, case listing
//! execution, and request handlers.

pub mod connectors;
pub mod executor;
pub mod handlers;
pub mod server;
pub mod state;

pub use connectors::{Connector, MemoryConnector, Page};
pub use executor::CaseExecutor;
pub use handlers::{CasesHandler, HealthHandler, OpenApiHandler};
pub use server::{build_router, Runtime};
pub use state::AppState;

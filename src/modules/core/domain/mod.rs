//! Domain models for lawcases

mod config;
mod params;
mod query;
mod store;
mod types;

pub use config::Config;
pub use params::{ListParams, DEFAULT_PAGE, DEFAULT_SIZE};
pub use query::{CaseQuery, Filter, Order, RowRange};
pub use store::StoreConfig;
pub use types::{CasesConfig, LogFormat, PoolConfig, ServerConfig};

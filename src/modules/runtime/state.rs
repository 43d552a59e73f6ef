//! Shared runtime application state (HTTP handlers)

use lawcases_core::Config;
use std::sync::Arc;

use crate::executor::CaseExecutor;

/// Application state shared across handlers.
///
/// Built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<CaseExecutor>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(executor: Arc<CaseExecutor>, config: Arc<Config>) -> Self {
        Self { executor, config }
    }
}

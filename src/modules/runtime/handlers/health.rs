//! Health check handler

use axum::{extract::State, response::Response};
use lawcases_types::Envelope;
use serde::Serialize;
use tracing::warn;

use super::respond;
use crate::state::AppState;

/// Health payload
#[derive(Debug, Serialize)]
pub struct Health {
    pub store: &'static str,
}

/// Handler for store health checks
pub struct HealthHandler;

impl HealthHandler {
    /// Handle GET /health
    pub async fn handle(State(state): State<AppState>) -> Response {
        match state.executor.health_check().await {
            Ok(()) => respond(Envelope {
                code: 200,
                msg: "ok".to_string(),
                data: Some(Health {
                    store: state.executor.connector_type(),
                }),
            }),
            Err(e) => {
                warn!("Health check failed: {}", e);
                respond(Envelope::<Health>::error(503, format!("Store unavailable: {}", e)))
            }
        }
    }
}

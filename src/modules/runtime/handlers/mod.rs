//! HTTP request handlers for the lawcases server
//!
//! This module contains the case listing handler, the health check,
//! the OpenAPI document and the not-found and method fallbacks.

mod cases;
mod health;
mod openapi;

pub use cases::CasesHandler;
pub use health::HealthHandler;
pub use openapi::OpenApiHandler;

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use lawcases_core::LawCasesError;
use lawcases_types::Envelope;
use serde::Serialize;

/// Serialize an envelope with the status code it carries
pub(crate) fn respond<T: Serialize>(envelope: Envelope<T>) -> Response {
    let status = StatusCode::from_u16(envelope.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope)).into_response()
}

/// Convert an error into its envelope response
pub(crate) fn error_response(err: &LawCasesError) -> Response {
    respond(Envelope::<()>::error(err.status_code(), err.envelope_message()))
}

/// Fallback for unknown paths
pub async fn not_found(uri: Uri) -> Response {
    error_response(&LawCasesError::NotFound(uri.path().to_string()))
}

/// Fallback for methods a GET-only route does not serve
pub async fn method_not_allowed(method: Method) -> Response {
    error_response(&LawCasesError::MethodNotAllowed(method.to_string()))
}

//! Case listing handler

use axum::{
    extract::{RawQuery, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use lawcases_core::LawCasesError;
use lawcases_types::Envelope;
use tracing::{error, info, warn};

use super::{error_response, respond};
use crate::state::AppState;

/// Handler for `/api/cases`
pub struct CasesHandler;

impl CasesHandler {
    /// Handle any method on /api/cases
    ///
    /// OPTIONS answers the CORS preflight with an empty body, GET lists
    /// cases and every other method gets a 405 envelope.
    pub async fn handle(
        State(state): State<AppState>,
        method: Method,
        RawQuery(query): RawQuery,
    ) -> Response {
        if method == Method::OPTIONS {
            return StatusCode::OK.into_response();
        }

        match Self::list(&state, &method, query.as_deref().unwrap_or_default()).await {
            Ok(response) => response,
            Err(e) => {
                if e.is_error() {
                    error!("Case listing failed: {}", e);
                } else {
                    warn!("Rejected {} /api/cases: {}", method, e);
                }
                error_response(&e)
            }
        }
    }

    async fn list(state: &AppState, method: &Method, query: &str) -> Result<Response, LawCasesError> {
        if method != Method::GET {
            return Err(LawCasesError::MethodNotAllowed(method.to_string()));
        }

        let params = state
            .executor
            .params(url::form_urlencoded::parse(query.as_bytes()));
        info!(
            page = params.page,
            size = params.size,
            case_type = params.case_type.as_deref().unwrap_or(""),
            "Listing cases"
        );

        let cases = state.executor.list(&params).await?;
        Ok(respond(Envelope::success(cases)))
    }
}

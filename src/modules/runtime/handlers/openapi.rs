//! OpenAPI documentation handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use lawcases_core::{Config, DEFAULT_PAGE, DEFAULT_SIZE};
use serde_json::json;

use crate::state::AppState;

/// Handler for OpenAPI documentation
pub struct OpenApiHandler;

impl OpenApiHandler {
    /// Handle GET /docs
    pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
        (StatusCode::OK, Json(Self::generate_spec(&state.config)))
    }

    /// Generate the OpenAPI 3.0 document for the service
    pub fn generate_spec(config: &Config) -> serde_json::Value {
        let envelope = |data: serde_json::Value| {
            json!({
                "type": "object",
                "required": ["code", "msg", "data"],
                "properties": {
                    "code": {"type": "integer"},
                    "msg": {"type": "string"},
                    "data": data
                }
            })
        };
        let error = envelope(json!({"nullable": true}));

        json!({
            "openapi": "3.0.3",
            "info": {
                "title": config.name,
                "version": env!("CARGO_PKG_VERSION")
            },
            "paths": {
                "/api/cases": {
                    "get": {
                        "summary": format!("List rows of {}, newest first", config.cases.table),
                        "operationId": "list_cases",
                        "tags": ["cases"],
                        "parameters": [
                            {
                                "name": "page",
                                "in": "query",
                                "schema": {"type": "integer", "minimum": 1, "default": DEFAULT_PAGE}
                            },
                            {
                                "name": "size",
                                "in": "query",
                                "schema": {
                                    "type": "integer",
                                    "minimum": 1,
                                    "maximum": config.cases.max_page_size,
                                    "default": DEFAULT_SIZE
                                }
                            },
                            {
                                "name": "type",
                                "in": "query",
                                "description": format!("Exact match on {}", config.cases.type_column),
                                "schema": {"type": "string"}
                            }
                        ],
                        "responses": {
                            "200": {
                                "description": "One page of cases",
                                "content": {"application/json": {"schema": envelope(json!({
                                    "type": "object",
                                    "properties": {
                                        "list": {"type": "array", "items": {"type": "object"}},
                                        "pagination": {
                                            "type": "object",
                                            "properties": {
                                                "page": {"type": "integer"},
                                                "size": {"type": "integer"},
                                                "total": {"type": "integer"},
                                                "pages": {"type": "integer"}
                                            }
                                        }
                                    }
                                }))}}
                            },
                            "405": {
                                "description": "Method other than GET or OPTIONS",
                                "content": {"application/json": {"schema": error.clone()}}
                            },
                            "500": {
                                "description": "Store or internal error",
                                "content": {"application/json": {"schema": error}}
                            }
                        }
                    },
                    "options": {
                        "summary": "CORS preflight",
                        "responses": {"200": {"description": "Empty body"}}
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Store health check",
                        "responses": {
                            "200": {"description": "Store reachable"},
                            "503": {"description": "Store unavailable"}
                        }
                    }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_spec() {
        let spec = OpenApiHandler::generate_spec(&Config::default());
        assert_eq!(spec["info"]["title"], "lawcases");

        let get = &spec["paths"]["/api/cases"]["get"];
        assert_eq!(get["parameters"][1]["schema"]["maximum"], 100);
        assert_eq!(get["parameters"][1]["schema"]["default"], 10);
        assert!(get["responses"]["405"].is_object());
    }
}

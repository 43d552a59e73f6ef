//! HTTP server for lawcases

use axum::{
    http::{header, HeaderValue},
    response::Response,
    routing::{any, get},
    Router,
};
use lawcases_core::{Config, LawCasesError};
use lawcases_parser::ConfigValidator;
use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::connectors;
use crate::executor::CaseExecutor;
use crate::handlers::{self, error_response, CasesHandler, HealthHandler, OpenApiHandler};
use crate::state::AppState;

/// Runtime server for lawcases
pub struct Runtime {
    config: Arc<Config>,
    executor: Arc<CaseExecutor>,
}

impl Runtime {
    /// Create a new runtime from a configuration
    ///
    /// Missing store credentials are logged and tolerated.
    pub async fn new(config: Config) -> Result<Self, LawCasesError> {
        for warning in ConfigValidator::new().warnings(&config) {
            warn!("{}", warning);
        }

        let connector = connectors::connect(&config)?;
        let executor = Arc::new(CaseExecutor::new(connector, config.cases.clone()));

        Ok(Self {
            config: Arc::new(config),
            executor,
        })
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        build_router(AppState::new(self.executor.clone(), self.config.clone()))
    }

    /// Start the server
    pub async fn run(&self) -> Result<(), LawCasesError> {
        let addr: SocketAddr = format!("0.0.0.0:{}", self.config.port())
            .parse()
            .map_err(|e| LawCasesError::Server(format!("Invalid address: {}", e)))?;

        let app = self.router();

        info!("Starting lawcases server on http://{}", addr);
        info!("Service: {}", self.config.name);
        info!(
            "Store: {} (table {})",
            self.executor.connector_type(),
            self.config.cases.table
        );
        info!("Cases endpoint: http://{}/api/cases", addr);
        info!("OpenAPI docs: http://{}/docs", addr);

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| LawCasesError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| LawCasesError::Server(format!("Server error: {}", e)))?;

        info!("Server stopped");
        self.shutdown().await
    }

    /// Gracefully shutdown the runtime
    pub async fn shutdown(&self) -> Result<(), LawCasesError> {
        info!("Closing store connection...");
        if let Err(e) = self.executor.close().await {
            warn!("Error closing store connection: {}", e);
        }
        info!("Shutdown complete");
        Ok(())
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the executor
    pub fn executor(&self) -> &CaseExecutor {
        &self.executor
    }
}

/// Build the router around `state`
///
/// Every response, including errors and panics, carries the JSON content
/// type and the CORS headers. Unsupported methods get a 405 envelope.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/cases", any(CasesHandler::handle))
        .route(
            "/health",
            get(HealthHandler::handle).fallback(handlers::method_not_allowed),
        )
        .route(
            "/docs",
            get(OpenApiHandler::handle).fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
        .layer(TraceLayer::new_for_http())
}

/// Turn a handler panic into a 500 envelope
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!("Request handler panicked: {}", detail);
    error_response(&LawCasesError::Internal(detail))
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for CTRL+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            debug!("Received CTRL+C, shutting down...");
        }
        _ = terminate => {
            debug!("Received SIGTERM, shutting down...");
        }
    }
}

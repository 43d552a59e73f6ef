//! Error types for lawcases

use thiserror::Error;

/// Main error type for lawcases operations
#[derive(Error, Debug)]
pub enum LawCasesError {
    /// Configuration file parsing error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store endpoint or key not configured
    #[error("Store configuration missing: {0}")]
    ConfigurationMissing(String),

    /// Request used a method other than GET or OPTIONS
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    /// No route matched the request path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Store connection or transport error
    #[error("Database error: {0}")]
    Database(String),

    /// The store rejected or failed the query
    #[error("Store query failed: {0}")]
    DataAccess(String),

    /// HTTP server error
    #[error("Server error: {0}")]
    Server(String),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Message returned to clients for 405 responses
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only GET requests are supported";

impl LawCasesError {
    /// Returns true if this error should be logged at error level
    pub fn is_error(&self) -> bool {
        !self.is_client_error()
    }

    /// Returns true if this error is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LawCasesError::MethodNotAllowed(_) | LawCasesError::NotFound(_)
        )
    }

    /// Returns the appropriate HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            LawCasesError::MethodNotAllowed(_) => 405,
            LawCasesError::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// Message placed in the response envelope
    ///
    /// Server-side failures keep the underlying text so callers can see what
    /// the store reported.
    pub fn envelope_message(&self) -> String {
        match self {
            LawCasesError::MethodNotAllowed(_) => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            LawCasesError::NotFound(path) => format!("Not found: {}", path),
            _ => format!("Internal server error: {}", self),
        }
    }
}

/// Result type alias using LawCasesError
pub type Result<T> = std::result::Result<T, LawCasesError>;

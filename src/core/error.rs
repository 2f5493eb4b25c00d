use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use crate::core::response;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// The store rejected or failed to execute a statement
    #[error("Query error: {0}")]
    Query(#[source] sqlx::Error),

    /// A returned row did not match the expected record shape
    #[error("Scan error: {0}")]
    Scan(#[source] sqlx::Error),

    /// Validation errors for request payloads
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invariant broken inside the service itself
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => AppError::Scan(err),
            other => AppError::Query(other),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        response::error(self.status_code(), self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Scan(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Build the client-facing error envelope.
    ///
    /// Validation messages are safe to show and are returned as-is;
    /// everything else is replaced by `fallback` so store internals never
    /// leak into the response body.
    pub fn to_public_response(&self, fallback: &str) -> HttpResponse {
        let message = match self {
            AppError::Validation(msg) => msg.clone(),
            _ => fallback.to_string(),
        };

        response::error(self.status_code(), message)
    }
}

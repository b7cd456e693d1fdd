//! Unified error types for all layers of the application.

use thiserror::Error;

/// Unified error type for the phrases service.
///
/// Every layer reports failures through this enum; the REST layer maps
/// each variant to an HTTP status code.
#[derive(Error, Debug)]
pub enum PhrasesError {
    /// Lookup by id yielded no record.
    #[error("Record with id {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Payload failed a constraint check outside the HTTP layer.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any store-access fault. Carries the underlying cause for logging;
    /// the client-visible message is a fixed, operation-specific string
    /// chosen by the controller.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A remote service call failed (network error, timeout, non-2xx).
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    /// The circuit breaker rejected the call.
    #[error("Service unavailable: circuit breaker open for {0}")]
    CircuitBreakerOpen(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhrasesError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::ExternalService { .. } => 502,
            Self::CircuitBreakerOpen(_) => 503,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::CircuitBreakerOpen(_) => "CIRCUIT_BREAKER_OPEN",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub const fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a database error from an underlying cause.
    #[must_use]
    pub fn database<T: Into<String>>(cause: T) -> Self {
        Self::Database(cause.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Creates an external service error.
    #[must_use]
    pub fn external_service<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for PhrasesError {
    fn from(err: sqlx::Error) -> Self {
        // Every store fault (connection failure, constraint violation,
        // decode error) is a database-access error; the controller picks
        // the client-facing message per operation.
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for PhrasesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

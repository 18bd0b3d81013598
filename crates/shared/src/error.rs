//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-domain input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An operation that needs at least one record received none.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A lookup returned nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Export artifact could not be produced.
    #[error("Export error: {0}")]
    Export(String),

    /// External collaborator (backend lookup) failed.
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "INVALID_INPUT",
            Self::EmptyInput(_) => "EMPTY_INPUT",
            Self::NotFound(_) => "MISSING_LOOKUP",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Export(_) => "EXPORT_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for conditions the caller can recover from by falling back
    /// to defaults.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::EmptyInput(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<crate::types::ParseError> for AppError {
    fn from(err: crate::types::ParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

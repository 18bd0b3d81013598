//! Report error types.

use spendtrack_shared::AppError;
use thiserror::Error;

/// Errors that can occur while shaping or exporting reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Malformed or out-of-domain argument.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The operation needs at least one report.
    #[error("No reports to export")]
    EmptyInput,

    /// The delimited writer failed.
    #[error("Export failed: {0}")]
    Export(String),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidInput(msg) => Self::Validation(msg),
            ReportError::EmptyInput => Self::EmptyInput("no reports to export".to_string()),
            ReportError::Export(msg) => Self::Export(msg),
        }
    }
}

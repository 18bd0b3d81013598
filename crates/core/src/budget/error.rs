//! Budget error types.

use spendtrack_shared::AppError;
use spendtrack_shared::types::CategoryId;
use thiserror::Error;

/// Budget-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// Malformed or out-of-domain argument, e.g. a non-positive limit.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No budget is configured for the category.
    #[error("No budget configured for {0}")]
    MissingLookup(CategoryId),

    /// The budget lookup for a category failed.
    #[error("Budget lookup for {category} failed: {message}")]
    LookupFailed {
        /// Category whose lookup failed.
        category: CategoryId,
        /// Failure reported by the lookup.
        message: String,
    },
}

/// Failure reported by a `BudgetLookup` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The backend has no budget for this category and month.
    #[error("budget not found")]
    NotFound,

    /// Any other failure (transport, decoding, server error).
    #[error("{0}")]
    Failed(String),
}

impl LookupError {
    /// Attaches the category the lookup was for.
    #[must_use]
    pub fn for_category(self, category: CategoryId) -> BudgetError {
        match self {
            Self::NotFound => BudgetError::MissingLookup(category),
            Self::Failed(message) => BudgetError::LookupFailed { category, message },
        }
    }
}

impl From<BudgetError> for AppError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::InvalidInput(msg) => Self::Validation(msg),
            BudgetError::MissingLookup(category) => Self::NotFound(category.to_string()),
            BudgetError::LookupFailed { category, message } => {
                Self::ExternalService(format!("{category}: {message}"))
            }
        }
    }
}

//! Common types used across the application.

pub mod amounts;
pub mod category;
pub mod month;
pub mod payment;

pub use amounts::CategoryAmounts;
pub use category::CategoryId;
pub use month::Month;
pub use payment::PaymentMethod;

use thiserror::Error;

/// Errors raised when parsing the shared vocabularies from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Text is not one of the known categories.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Text is not one of the known payment methods.
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// Text is not a valid `YYYY-MM` month.
    #[error("Invalid month (expected YYYY-MM): {0}")]
    InvalidMonth(String),
}

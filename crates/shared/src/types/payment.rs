//! Payment methods.

use serde::{Deserialize, Serialize};

use super::ParseError;

/// Closed set of payment methods an expense can be settled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash.
    Cash,
    /// Credit card.
    #[serde(rename = "Credit Card")]
    CreditCard,
    /// Debit card.
    #[serde(rename = "Debit Card")]
    DebitCard,
    /// Unified Payments Interface.
    #[serde(rename = "UPI")]
    Upi,
    /// Net banking transfer.
    #[serde(rename = "Net Banking")]
    NetBanking,
}

impl PaymentMethod {
    /// Every payment method.
    pub const ALL: [Self; 5] = [
        Self::Cash,
        Self::CreditCard,
        Self::DebitCard,
        Self::Upi,
        Self::NetBanking,
    ];

    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::Upi => "UPI",
            Self::NetBanking => "Net Banking",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownPaymentMethod(s.to_string()))
    }
}

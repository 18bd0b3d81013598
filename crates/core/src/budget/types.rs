//! Budget data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spendtrack_shared::BudgetConfig;
use spendtrack_shared::types::CategoryId;

/// Severity tier of a category's spend against its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTier {
    /// Comfortably under the limit.
    Safe,
    /// At or above the warning threshold.
    Warning,
    /// Exactly at the limit. Only produced from an explicit backend signal.
    Reached,
    /// Over the limit.
    Exceeded,
}

impl StatusTier {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Reached => "reached",
            Self::Exceeded => "exceeded",
        }
    }

    /// Whether the tier should be surfaced as an alert.
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        !matches!(self, Self::Safe)
    }
}

impl std::fmt::Display for StatusTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Over-limit information supplied by the backend alongside the amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BudgetSignal {
    /// No signal; the tier is derived from the percentage alone.
    #[default]
    None,
    /// The backend's over-limit flag.
    Alert(bool),
    /// The backend reports usage at exactly the limit.
    Reached,
}

/// Thresholds used when deriving tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetPolicy {
    /// Limit applied to categories without a configured budget.
    pub default_monthly_limit: Decimal,
    /// Percentage at which a category turns to warning.
    pub warning_threshold: u64,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self::from(&BudgetConfig::default())
    }
}

impl From<&BudgetConfig> for BudgetPolicy {
    fn from(config: &BudgetConfig) -> Self {
        Self {
            default_monthly_limit: config.default_monthly_limit,
            warning_threshold: config.warning_threshold,
        }
    }
}

/// Result of evaluating spend against a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEvaluation {
    /// `round(spent / limit * 100)`, unbounded above.
    pub percentage_used: u64,
    /// Derived tier.
    pub status: StatusTier,
}

/// A configured monthly limit for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetLimit {
    /// Category.
    pub category: CategoryId,
    /// Monthly limit, positive.
    pub monthly_limit: Decimal,
}

/// Backend response to a per-category budget check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCheck {
    /// Amount spent in the month.
    pub total_spent: Decimal,
    /// Configured limit.
    pub monthly_limit: Decimal,
    /// Percentage the backend computed.
    pub percentage_used: Decimal,
    /// Backend over-limit flag.
    pub alert: bool,
}

/// Severity-tagged alert for one category. Recomputed on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    /// Category.
    pub category: CategoryId,
    /// Amount spent.
    pub amount_spent: Decimal,
    /// Limit the spend was compared against.
    pub limit: Decimal,
    /// Rounded percentage of the limit used.
    pub percentage_used: u64,
    /// Severity tier.
    pub status: StatusTier,
    /// True when `limit` is the fallback rather than a configured budget.
    pub is_default_limit: bool,
}

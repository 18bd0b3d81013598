//! Budget status evaluation.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::ToPrimitive;
use spendtrack_shared::types::CategoryId;

use super::error::BudgetError;
use super::types::{
    BudgetAlert, BudgetEvaluation, BudgetLimit, BudgetPolicy, BudgetSignal, StatusTier,
};
use crate::reports::MonthlyReport;

/// Derives percentage-of-limit and severity tier for category spend.
///
/// Stateless apart from its policy; every method is pure and safe to call
/// concurrently.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetStatusEvaluator {
    policy: BudgetPolicy,
}

impl BudgetStatusEvaluator {
    /// Creates an evaluator with the given thresholds.
    #[must_use]
    pub const fn new(policy: BudgetPolicy) -> Self {
        Self { policy }
    }

    /// Thresholds in use.
    #[must_use]
    pub const fn policy(&self) -> &BudgetPolicy {
        &self.policy
    }

    /// `round(spent / limit * 100)`, rounding halves away from zero.
    ///
    /// Negative `spent` is floored to zero. Percentages too large for a `u64`
    /// saturate at `u64::MAX`.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidInput` if `limit` is not positive.
    pub fn percentage_used(spent: Decimal, limit: Decimal) -> Result<u64, BudgetError> {
        if limit <= Decimal::ZERO {
            return Err(BudgetError::InvalidInput(format!(
                "limit must be positive, got {limit}"
            )));
        }

        let percentage = spent
            .max(Decimal::ZERO)
            .checked_div(limit)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map(|pct| pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|pct| pct.to_u64());
        Ok(percentage.unwrap_or(u64::MAX))
    }

    /// Evaluates `spent` against `limit`.
    ///
    /// Tier priority, first match wins:
    /// 1. `Exceeded` when the backend flag is set, or when no signal was
    ///    given and the percentage is over 100.
    /// 2. `Reached` when the backend signals usage exactly at the limit.
    /// 3. `Warning` at or above the warning threshold.
    /// 4. `Safe`.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidInput` if `limit` is not positive.
    pub fn evaluate(
        &self,
        spent: Decimal,
        limit: Decimal,
        signal: BudgetSignal,
    ) -> Result<BudgetEvaluation, BudgetError> {
        let percentage_used = Self::percentage_used(spent, limit)?;

        let status = match signal {
            BudgetSignal::Alert(true) => StatusTier::Exceeded,
            BudgetSignal::None if percentage_used > 100 => StatusTier::Exceeded,
            BudgetSignal::Reached => StatusTier::Reached,
            _ if percentage_used >= self.policy.warning_threshold => StatusTier::Warning,
            _ => StatusTier::Safe,
        };

        Ok(BudgetEvaluation {
            percentage_used,
            status,
        })
    }

    /// Builds the alert record for one category.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidInput` if `limit` is not positive.
    pub fn alert(
        &self,
        category: CategoryId,
        spent: Decimal,
        limit: Decimal,
        signal: BudgetSignal,
    ) -> Result<BudgetAlert, BudgetError> {
        let evaluation = self.evaluate(spent, limit, signal)?;
        Ok(BudgetAlert {
            category,
            amount_spent: spent.max(Decimal::ZERO),
            limit,
            percentage_used: evaluation.percentage_used,
            status: evaluation.status,
            is_default_limit: false,
        })
    }

    /// Builds an alert against the policy's fallback limit, flagged as such.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::InvalidInput` if the fallback limit is not positive.
    pub fn default_limit_alert(
        &self,
        category: CategoryId,
        spent: Decimal,
    ) -> Result<BudgetAlert, BudgetError> {
        let mut alert = self.alert(
            category,
            spent,
            self.policy.default_monthly_limit,
            BudgetSignal::None,
        )?;
        alert.is_default_limit = true;
        Ok(alert)
    }

    /// Evaluates every category of `report` against `limits`.
    ///
    /// Categories without an entry in `limits` use the fallback limit. One
    /// category's failure never hides the others; results follow
    /// `CategoryId::ALL` order.
    #[must_use]
    pub fn evaluate_report(
        &self,
        report: &MonthlyReport,
        limits: &[BudgetLimit],
    ) -> Vec<(CategoryId, Result<BudgetAlert, BudgetError>)> {
        CategoryId::ALL
            .into_iter()
            .map(|category| {
                let spent = report.category_breakdown.get(category);
                let result = match limits.iter().find(|l| l.category == category) {
                    Some(limit) => self.alert(category, spent, limit.monthly_limit, BudgetSignal::None),
                    None => self.default_limit_alert(category, spent),
                };
                (category, result)
            })
            .collect()
    }
}

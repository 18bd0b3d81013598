//! Budget lookup backed by a local limits file.

use std::collections::HashMap;

use rust_decimal::Decimal;
use spendtrack_core::budget::{BudgetCheck, BudgetLimit, BudgetLookup, LookupError};
use spendtrack_core::reports::MonthlyReport;
use spendtrack_shared::types::{CategoryId, Month};

/// Answers budget checks from configured limits and one month's report.
///
/// Categories without a limit answer `NotFound`, the same as a backend with no
/// budget on record.
#[derive(Debug, Clone, Default)]
pub struct LimitsLookup {
    limits: HashMap<CategoryId, Decimal>,
    report: Option<MonthlyReport>,
}

impl LimitsLookup {
    /// Builds a lookup over `limits`, taking spend from `report`.
    pub fn new(limits: &[BudgetLimit], report: Option<MonthlyReport>) -> Self {
        Self {
            limits: limits
                .iter()
                .map(|l| (l.category, l.monthly_limit))
                .collect(),
            report,
        }
    }

    fn spent(&self, category: CategoryId, month: Month) -> Decimal {
        self.report
            .as_ref()
            .filter(|r| r.month == month)
            .map_or(Decimal::ZERO, |r| r.category_breakdown.get(category))
    }
}

impl BudgetLookup for LimitsLookup {
    async fn check_alert(
        &self,
        category: CategoryId,
        month: Month,
    ) -> Result<BudgetCheck, LookupError> {
        let monthly_limit = *self.limits.get(&category).ok_or(LookupError::NotFound)?;
        let total_spent = self.spent(category, month);
        let percentage_used = total_spent
            .checked_div(monthly_limit)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO);

        Ok(BudgetCheck {
            total_spent,
            monthly_limit,
            percentage_used,
            alert: total_spent > monthly_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use spendtrack_shared::types::CategoryAmounts;

    fn report() -> MonthlyReport {
        MonthlyReport {
            month: "2024-01".parse().unwrap(),
            total_spent: dec!(1600),
            category_breakdown: [(CategoryId::Food, dec!(1600))].into_iter().collect::<CategoryAmounts>(),
            top_category: Some(CategoryId::Food),
            top_payment_methods: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_configured_category_is_checked() {
        let limits = [BudgetLimit {
            category: CategoryId::Food,
            monthly_limit: dec!(1500),
        }];
        let lookup = LimitsLookup::new(&limits, Some(report()));

        let check = lookup
            .check_alert(CategoryId::Food, "2024-01".parse().unwrap())
            .await
            .unwrap();

        assert_eq!(check.total_spent, dec!(1600));
        assert!(check.alert);
    }

    #[tokio::test]
    async fn test_unconfigured_category_is_not_found() {
        let lookup = LimitsLookup::new(&[], Some(report()));
        let result = lookup
            .check_alert(CategoryId::Rent, "2024-01".parse().unwrap())
            .await;
        assert!(matches!(result, Err(LookupError::NotFound)));
    }

    #[tokio::test]
    async fn test_other_month_has_no_spend() {
        let limits = [BudgetLimit {
            category: CategoryId::Food,
            monthly_limit: dec!(1500),
        }];
        let lookup = LimitsLookup::new(&limits, Some(report()));

        let check = lookup
            .check_alert(CategoryId::Food, "2024-02".parse().unwrap())
            .await
            .unwrap();
        assert_eq!(check.total_spent, Decimal::ZERO);
        assert!(!check.alert);
    }
}

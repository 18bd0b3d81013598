//! Dashboard data types.

use rust_decimal::Decimal;
use serde::Serialize;
use spendtrack_shared::types::{CategoryId, Month};

use crate::budget::{AlertOutcome, BudgetAlert};
use crate::reports::MonthlyReport;

/// What the dashboard shows for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Month shown.
    pub month: Month,
    /// Total spent in the month, zero when no report was returned.
    pub monthly_expense: Decimal,
    /// Alerts for every category that evaluated successfully.
    pub alerts: Vec<BudgetAlert>,
    /// Categories whose alert could not be produced.
    pub failed_categories: Vec<CategoryId>,
}

impl DashboardSnapshot {
    /// Builds a snapshot from the month's reports and gathered alert outcomes.
    ///
    /// Only the first report counts towards the month's spend.
    #[must_use]
    pub fn from_outcomes(
        month: Month,
        reports: &[MonthlyReport],
        outcomes: &[AlertOutcome],
    ) -> Self {
        let monthly_expense = reports.first().map_or(Decimal::ZERO, |r| r.total_spent);
        let failed_categories = outcomes
            .iter()
            .filter(|o| o.alert().is_none())
            .map(AlertOutcome::category)
            .collect();

        Self {
            month,
            monthly_expense,
            alerts: AlertOutcome::alerts(outcomes),
            failed_categories,
        }
    }

    /// Alerts whose tier is above safe, most severe first.
    #[must_use]
    pub fn needs_attention(&self) -> Vec<&BudgetAlert> {
        let mut flagged: Vec<&BudgetAlert> = self
            .alerts
            .iter()
            .filter(|a| a.status.needs_attention())
            .collect();
        flagged.sort_by(|a, b| b.percentage_used.cmp(&a.percentage_used));
        flagged
    }
}

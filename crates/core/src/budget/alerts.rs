//! Per-category budget alert gathering.
//!
//! One backend lookup is issued per category, all concurrently. Each lookup's
//! outcome is captured on its own, so a failing category never aborts the
//! others. A "not found" lookup means the category has no configured budget
//! and is evaluated against the fallback limit instead.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use rust_decimal::{Decimal, RoundingStrategy};
use spendtrack_shared::types::{CategoryId, Month};

use super::error::{BudgetError, LookupError};
use super::service::BudgetStatusEvaluator;
use super::types::{BudgetAlert, BudgetCheck, BudgetSignal};
use crate::reports::MonthlyReport;

/// Source of per-category budget checks.
///
/// Implemented by the HTTP client layer; the core never talks to the network.
pub trait BudgetLookup: Send + Sync {
    /// Fetch the budget check for `category` in `month`.
    fn check_alert(
        &self,
        category: CategoryId,
        month: Month,
    ) -> impl Future<Output = Result<BudgetCheck, LookupError>> + Send;
}

/// Outcome of one category's alert evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertOutcome {
    /// Alert derived from a configured or fallback limit.
    Evaluated(BudgetAlert),
    /// Lookup or evaluation failed for this category.
    Failed {
        /// Category.
        category: CategoryId,
        /// What went wrong.
        error: BudgetError,
    },
}

impl AlertOutcome {
    /// Category this outcome is for.
    #[must_use]
    pub const fn category(&self) -> CategoryId {
        match self {
            Self::Evaluated(alert) => alert.category,
            Self::Failed { category, .. } => *category,
        }
    }

    /// The alert, if evaluation succeeded.
    #[must_use]
    pub const fn alert(&self) -> Option<&BudgetAlert> {
        match self {
            Self::Evaluated(alert) => Some(alert),
            Self::Failed { .. } => None,
        }
    }

    /// Successful alerts, in outcome order.
    #[must_use]
    pub fn alerts(outcomes: &[Self]) -> Vec<BudgetAlert> {
        outcomes.iter().filter_map(Self::alert).cloned().collect()
    }
}

/// Gathers budget alerts for every category of a month.
pub struct BudgetAlertService<L: BudgetLookup> {
    lookup: Arc<L>,
    evaluator: BudgetStatusEvaluator,
}

impl<L: BudgetLookup> BudgetAlertService<L> {
    /// Create a new alert service.
    #[must_use]
    pub fn new(lookup: Arc<L>, evaluator: BudgetStatusEvaluator) -> Self {
        Self { lookup, evaluator }
    }

    /// Looks up every category for `month` concurrently and evaluates each.
    ///
    /// Categories without a configured budget are evaluated against the
    /// fallback limit using their spend in `fallback_report` (zero if the
    /// report is absent or lacks the category). Outcomes follow
    /// `CategoryId::ALL` order.
    pub async fn gather(
        &self,
        month: Month,
        fallback_report: Option<&MonthlyReport>,
    ) -> Vec<AlertOutcome> {
        let lookups = CategoryId::ALL.into_iter().map(|category| async move {
            (category, self.lookup.check_alert(category, month).await)
        });

        join_all(lookups)
            .await
            .into_iter()
            .map(|(category, result)| self.resolve(category, result, fallback_report))
            .collect()
    }

    fn resolve(
        &self,
        category: CategoryId,
        result: Result<BudgetCheck, LookupError>,
        fallback_report: Option<&MonthlyReport>,
    ) -> AlertOutcome {
        let evaluated = match result.map_err(|e| e.for_category(category)) {
            Ok(check) => self.alert_from_check(category, &check),
            Err(BudgetError::MissingLookup(_)) => {
                let spent = fallback_report
                    .map_or(Decimal::ZERO, |r| r.category_breakdown.get(category));
                tracing::debug!(%category, %spent, "no budget configured, using default limit");
                self.evaluator.default_limit_alert(category, spent)
            }
            Err(err) => Err(err),
        };

        match evaluated {
            Ok(alert) => {
                tracing::debug!(
                    %category,
                    status = %alert.status,
                    percentage = alert.percentage_used,
                    "budget alert evaluated"
                );
                AlertOutcome::Evaluated(alert)
            }
            Err(error) => {
                tracing::warn!(%category, %error, "budget alert unavailable");
                AlertOutcome::Failed { category, error }
            }
        }
    }

    fn alert_from_check(
        &self,
        category: CategoryId,
        check: &BudgetCheck,
    ) -> Result<BudgetAlert, BudgetError> {
        let alert = self.evaluator.alert(
            category,
            check.total_spent,
            check.monthly_limit,
            BudgetSignal::Alert(check.alert),
        )?;

        let reported = check
            .percentage_used
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        if reported != Decimal::from(alert.percentage_used) {
            tracing::debug!(
                %category,
                reported = %check.percentage_used,
                computed = alert.percentage_used,
                "backend percentage differs from computed value"
            );
        }

        Ok(alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::types::StatusTier;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct StubLookup {
        responses: HashMap<CategoryId, Result<BudgetCheck, LookupError>>,
        calls: AtomicUsize,
    }

    impl StubLookup {
        fn with(
            mut self,
            category: CategoryId,
            response: Result<BudgetCheck, LookupError>,
        ) -> Self {
            self.responses.insert(category, response);
            self
        }
    }

    impl BudgetLookup for StubLookup {
        async fn check_alert(
            &self,
            category: CategoryId,
            _month: Month,
        ) -> Result<BudgetCheck, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.responses
                .get(&category)
                .cloned()
                .unwrap_or(Err(LookupError::NotFound))
        }
    }

    fn check(spent: Decimal, limit: Decimal, alert: bool) -> BudgetCheck {
        BudgetCheck {
            total_spent: spent,
            monthly_limit: limit,
            percentage_used: spent / limit * dec!(100),
            alert,
        }
    }

    fn fallback() -> MonthlyReport {
        MonthlyReport {
            month: "2024-01".parse().unwrap(),
            total_spent: dec!(12500),
            category_breakdown: [(CategoryId::Food, dec!(500)), (CategoryId::Travel, dec!(12000))]
                .into_iter()
                .collect(),
            top_category: Some(CategoryId::Travel),
            top_payment_methods: Vec::new(),
        }
    }

    fn service(lookup: StubLookup) -> BudgetAlertService<StubLookup> {
        BudgetAlertService::new(Arc::new(lookup), BudgetStatusEvaluator::default())
    }

    #[tokio::test]
    async fn test_gather_covers_every_category() {
        let lookup = StubLookup::default();
        let service = service(lookup);

        let outcomes = service.gather("2024-01".parse().unwrap(), None).await;

        assert_eq!(outcomes.len(), CategoryId::ALL.len());
        assert_eq!(service.lookup.calls.load(Ordering::SeqCst), CategoryId::ALL.len());
        let categories: Vec<CategoryId> = outcomes.iter().map(AlertOutcome::category).collect();
        assert_eq!(categories, CategoryId::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_gather_uses_backend_check() {
        let lookup = StubLookup::default()
            .with(CategoryId::Rent, Ok(check(dec!(16000), dec!(15000), true)))
            .with(CategoryId::Food, Ok(check(dec!(4400), dec!(5000), false)));

        let outcomes = service(lookup)
            .gather("2024-01".parse().unwrap(), Some(&fallback()))
            .await;

        let food = outcomes[0].alert().unwrap();
        assert_eq!(food.percentage_used, 88);
        assert_eq!(food.status, StatusTier::Warning);
        assert!(!food.is_default_limit);

        let rent = outcomes[1].alert().unwrap();
        assert_eq!(rent.percentage_used, 107);
        assert_eq!(rent.status, StatusTier::Exceeded);
    }

    #[tokio::test]
    async fn test_missing_budget_falls_back_to_default_limit() {
        let outcomes = service(StubLookup::default())
            .gather("2024-01".parse().unwrap(), Some(&fallback()))
            .await;

        let travel = outcomes
            .iter()
            .find(|o| o.category() == CategoryId::Travel)
            .and_then(AlertOutcome::alert)
            .unwrap();
        assert_eq!(travel.amount_spent, dec!(12000));
        assert_eq!(travel.limit, dec!(15000));
        assert_eq!(travel.percentage_used, 80);
        assert_eq!(travel.status, StatusTier::Warning);
        assert!(travel.is_default_limit);

        let health = outcomes
            .iter()
            .find(|o| o.category() == CategoryId::Health)
            .and_then(AlertOutcome::alert)
            .unwrap();
        assert_eq!(health.amount_spent, Decimal::ZERO);
        assert_eq!(health.status, StatusTier::Safe);
    }

    #[tokio::test]
    async fn test_failed_lookup_is_isolated() {
        let lookup = StubLookup::default()
            .with(CategoryId::Shopping, Err(LookupError::Failed("timeout".into())));

        let outcomes = service(lookup)
            .gather("2024-01".parse().unwrap(), None)
            .await;

        assert_eq!(outcomes.len(), CategoryId::ALL.len());
        assert!(matches!(
            &outcomes[2],
            AlertOutcome::Failed {
                category: CategoryId::Shopping,
                error: BudgetError::LookupFailed { .. },
            }
        ));
        assert_eq!(AlertOutcome::alerts(&outcomes).len(), CategoryId::ALL.len() - 1);
    }

    #[tokio::test]
    async fn test_invalid_backend_limit_is_reported_not_fatal() {
        let lookup = StubLookup::default().with(
            CategoryId::Utilities,
            Ok(BudgetCheck {
                total_spent: dec!(100),
                monthly_limit: Decimal::ZERO,
                percentage_used: Decimal::ZERO,
                alert: false,
            }),
        );

        let outcomes = service(lookup)
            .gather("2024-01".parse().unwrap(), None)
            .await;

        let utilities = outcomes
            .iter()
            .find(|o| o.category() == CategoryId::Utilities)
            .unwrap();
        assert!(matches!(
            utilities,
            AlertOutcome::Failed {
                error: BudgetError::InvalidInput(_),
                ..
            }
        ));
        assert_eq!(AlertOutcome::alerts(&outcomes).len(), CategoryId::ALL.len() - 1);
    }
}

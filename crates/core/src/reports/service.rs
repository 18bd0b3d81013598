//! Report aggregation and chart shaping.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use spendtrack_shared::types::{CategoryAmounts, CategoryId, Month, PaymentMethod};

use super::types::{
    CategoryShare, CategoryTotals, ChartDataset, ChartKind, ChartSeries, ExpenseRecord,
    ExpenseTotals, MonthlyReport, PaymentMethodTotal, PeriodSummary,
};

/// Label of the single dataset in a bar series.
pub const TOTAL_SPENT_LABEL: &str = "Total Spent";

/// Stateless aggregation over monthly reports.
///
/// Sums saturate at the `Decimal` bounds, so every aggregation is total.
pub struct ReportAggregator;

impl ReportAggregator {
    /// Sums each category's spend across all reports.
    ///
    /// Categories appear in the order they are first seen, scanning reports in
    /// input order and each breakdown in its own order. Values do not depend
    /// on the order of `reports`.
    #[must_use]
    pub fn aggregate_category_totals(reports: &[MonthlyReport]) -> CategoryTotals {
        let mut totals = CategoryAmounts::new();
        for report in reports {
            for (category, amount) in report.category_breakdown.iter() {
                totals.add(category, amount);
            }
        }
        totals
    }

    /// Shapes reports into chart input.
    ///
    /// Line and bar series are ordered by month regardless of input order.
    /// Pie series ignore `reports` and use the pre-aggregated `category_totals`.
    /// Empty input yields an empty series rather than an error.
    #[must_use]
    pub fn build_series(
        reports: &[MonthlyReport],
        kind: ChartKind,
        category_totals: &CategoryTotals,
    ) -> ChartSeries {
        match kind {
            ChartKind::Pie => Self::pie_series(category_totals),
            ChartKind::Line | ChartKind::Bar if reports.is_empty() => ChartSeries::empty(kind),
            ChartKind::Line => Self::line_series(&Self::sorted_by_month(reports)),
            ChartKind::Bar => Self::bar_series(&Self::sorted_by_month(reports)),
        }
    }

    /// Builds the report the backend would produce for `month` from raw expenses.
    ///
    /// Expenses outside `month` are ignored. Payment methods are ordered by
    /// total, highest first, with first appearance breaking ties.
    #[must_use]
    pub fn summarize_month(month: Month, expenses: &[ExpenseRecord]) -> MonthlyReport {
        let mut breakdown = CategoryAmounts::new();
        let mut methods: Vec<PaymentMethodTotal> = Vec::new();

        for expense in expenses
            .iter()
            .filter(|e| Month::from_date(e.date) == month)
        {
            let amount = expense.amount.max(Decimal::ZERO);
            breakdown.add(expense.category, amount);
            match methods.iter_mut().find(|m| m.method == expense.payment_method) {
                Some(existing) => existing.total = existing.total.saturating_add(amount),
                None => methods.push(PaymentMethodTotal {
                    method: expense.payment_method,
                    total: amount,
                }),
            }
        }

        // stable sort keeps first appearance on ties
        methods.sort_by(|a, b| b.total.cmp(&a.total));

        MonthlyReport {
            month,
            total_spent: breakdown.total(),
            top_category: breakdown.largest().map(|(category, _)| category),
            category_breakdown: breakdown,
            top_payment_methods: methods,
        }
    }

    /// This month's and all-time spend over a raw expense list.
    #[must_use]
    pub fn expense_totals(month: Month, expenses: &[ExpenseRecord]) -> ExpenseTotals {
        expenses.iter().fold(ExpenseTotals::default(), |totals, expense| {
            let this_month = if Month::from_date(expense.date) == month {
                totals.this_month.saturating_add(expense.amount)
            } else {
                totals.this_month
            };
            ExpenseTotals {
                this_month,
                all_time: totals.all_time.saturating_add(expense.amount),
            }
        })
    }

    /// Headline figures for the selected period.
    ///
    /// Top category and payment method are taken from the first report, which
    /// the backend returns for the most recent month.
    #[must_use]
    pub fn summarize_period(reports: &[MonthlyReport]) -> PeriodSummary {
        let total_spent = Self::saturating_sum(reports.iter().map(|r| r.total_spent));
        let average_monthly_spent = if reports.is_empty() {
            Decimal::ZERO
        } else {
            (total_spent / Decimal::from(reports.len())).round_dp(2)
        };
        let first = reports.first();

        PeriodSummary {
            months: reports.len(),
            total_spent,
            average_monthly_spent,
            top_category: first.and_then(|r| r.top_category),
            top_payment_method: first
                .and_then(|r| r.top_payment_methods.first())
                .map(|m| m.method),
        }
    }

    /// Each category's share of the grand total, in `category_totals` order.
    ///
    /// Percentages are rounded to one decimal place and are all zero when
    /// nothing was spent.
    #[must_use]
    pub fn category_shares(category_totals: &CategoryTotals) -> Vec<CategoryShare> {
        let grand_total = category_totals.total();
        category_totals
            .iter()
            .map(|(category, total)| CategoryShare {
                category,
                total,
                percentage: Self::percentage_of(total, grand_total),
            })
            .collect()
    }

    /// Totals per payment method across the period.
    ///
    /// Methods are those listed in the first report, in its order; a method
    /// missing from a later report contributes zero for that month.
    #[must_use]
    pub fn payment_method_totals(reports: &[MonthlyReport]) -> Vec<PaymentMethodTotal> {
        let Some(first) = reports.first() else {
            return Vec::new();
        };

        first
            .top_payment_methods
            .iter()
            .map(|listed| PaymentMethodTotal {
                method: listed.method,
                total: Self::saturating_sum(
                    reports.iter().map(|r| Self::method_total(r, listed.method)),
                ),
            })
            .collect()
    }

    fn method_total(report: &MonthlyReport, method: PaymentMethod) -> Decimal {
        report
            .top_payment_methods
            .iter()
            .find(|m| m.method == method)
            .map_or(Decimal::ZERO, |m| m.total)
    }

    fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
        amounts.fold(Decimal::ZERO, Decimal::saturating_add)
    }

    fn percentage_of(part: Decimal, whole: Decimal) -> Decimal {
        if whole.is_zero() {
            return Decimal::ZERO;
        }
        part.checked_div(whole)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .map_or_else(
                || {
                    if part.is_sign_negative() == whole.is_sign_negative() {
                        Decimal::MAX
                    } else {
                        Decimal::MIN
                    }
                },
                |pct| pct.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero),
            )
    }

    fn sorted_by_month(reports: &[MonthlyReport]) -> Vec<&MonthlyReport> {
        let mut sorted: Vec<&MonthlyReport> = reports.iter().collect();
        sorted.sort_by_key(|r| r.month);
        sorted
    }

    fn month_labels(sorted: &[&MonthlyReport]) -> Vec<String> {
        sorted.iter().map(|r| r.month.label()).collect()
    }

    fn line_series(sorted: &[&MonthlyReport]) -> ChartSeries {
        let datasets = CategoryId::ALL
            .into_iter()
            .map(|category| ChartDataset {
                label: category.display_name().to_string(),
                category: Some(category),
                values: sorted
                    .iter()
                    .map(|r| r.category_breakdown.get(category))
                    .collect(),
            })
            .collect();

        ChartSeries {
            kind: ChartKind::Line,
            labels: Self::month_labels(sorted),
            datasets,
        }
    }

    fn bar_series(sorted: &[&MonthlyReport]) -> ChartSeries {
        ChartSeries {
            kind: ChartKind::Bar,
            labels: Self::month_labels(sorted),
            datasets: vec![ChartDataset {
                label: TOTAL_SPENT_LABEL.to_string(),
                category: None,
                values: sorted.iter().map(|r| r.total_spent).collect(),
            }],
        }
    }

    fn pie_series(category_totals: &CategoryTotals) -> ChartSeries {
        if category_totals.is_empty() {
            return ChartSeries::empty(ChartKind::Pie);
        }

        ChartSeries {
            kind: ChartKind::Pie,
            labels: category_totals
                .categories()
                .map(|c| c.display_name().to_string())
                .collect(),
            datasets: vec![ChartDataset {
                label: ChartKind::Pie.title().to_string(),
                category: None,
                values: category_totals.iter().map(|(_, total)| total).collect(),
            }],
        }
    }
}

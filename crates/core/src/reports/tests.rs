//! Property-based tests for reports module.

use proptest::prelude::*;
use rust_decimal::Decimal;
use spendtrack_shared::types::{CategoryAmounts, CategoryId, Month, PaymentMethod};

use super::export::{EXPORT_HEADER, to_delimited_text};
use super::service::ReportAggregator;
use super::types::{CategoryTotals, ChartKind, ExpenseRecord, MonthlyReport, PaymentMethodTotal};

/// Strategy to generate amounts with cents (0.00 to 100,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn category() -> impl Strategy<Value = CategoryId> {
    prop::sample::select(CategoryId::ALL.to_vec())
}

fn payment_method() -> impl Strategy<Value = PaymentMethod> {
    prop::sample::select(PaymentMethod::ALL.to_vec())
}

fn month() -> impl Strategy<Value = Month> {
    (2000u16..2100, 1u8..=12).prop_map(|(y, m)| Month::new(y, m).unwrap())
}

fn monthly_report() -> impl Strategy<Value = MonthlyReport> {
    (
        month(),
        prop::collection::vec((category(), amount()), 0..6),
        prop::option::of(category()),
        prop::collection::vec((payment_method(), amount()), 0..4),
    )
        .prop_map(|(month, breakdown, top_category, methods)| {
            let category_breakdown: CategoryAmounts = breakdown.into_iter().collect();
            MonthlyReport {
                month,
                total_spent: category_breakdown.total(),
                category_breakdown,
                top_category,
                top_payment_methods: methods
                    .into_iter()
                    .map(|(method, total)| PaymentMethodTotal { method, total })
                    .collect(),
            }
        })
}

fn reports() -> impl Strategy<Value = Vec<MonthlyReport>> {
    prop::collection::vec(monthly_report(), 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Permuting the reports never changes any category total.
    #[test]
    fn prop_category_totals_order_independent(
        (original, shuffled) in reports().prop_flat_map(|r| {
            let copy = r.clone();
            (Just(r), Just(copy).prop_shuffle())
        }),
    ) {
        let a = ReportAggregator::aggregate_category_totals(&original);
        let b = ReportAggregator::aggregate_category_totals(&shuffled);

        prop_assert_eq!(a.len(), b.len());
        for category in CategoryId::ALL {
            prop_assert_eq!(a.get(category), b.get(category));
        }
    }

    /// Category totals equal the sum of every breakdown entry.
    #[test]
    fn prop_category_totals_sum_breakdowns(reports in reports()) {
        let totals = ReportAggregator::aggregate_category_totals(&reports);
        for category in CategoryId::ALL {
            let expected: Decimal = reports
                .iter()
                .map(|r| r.category_breakdown.get(category))
                .sum();
            prop_assert_eq!(totals.get(category), expected);
        }
    }

    /// Line labels are ascending by month regardless of input order.
    #[test]
    fn prop_line_labels_sorted(reports in reports()) {
        let series = ReportAggregator::build_series(
            &reports,
            ChartKind::Line,
            &CategoryTotals::new(),
        );

        let mut months: Vec<Month> = reports.iter().map(|r| r.month).collect();
        months.sort();
        let expected: Vec<String> = months.iter().map(|m| m.label()).collect();

        prop_assert_eq!(&series.labels, &expected);
        prop_assert_eq!(series.datasets.len(), CategoryId::ALL.len());
        for dataset in &series.datasets {
            prop_assert_eq!(dataset.values.len(), series.labels.len());
        }
    }

    /// Bar values follow the month-sorted order.
    #[test]
    fn prop_bar_values_follow_sorted_months(reports in reports()) {
        let series = ReportAggregator::build_series(
            &reports,
            ChartKind::Bar,
            &CategoryTotals::new(),
        );

        let mut sorted = reports.clone();
        sorted.sort_by_key(|r| r.month);
        let expected: Vec<Decimal> = sorted.iter().map(|r| r.total_spent).collect();

        prop_assert_eq!(series.datasets.len(), 1);
        prop_assert_eq!(&series.datasets[0].values, &expected);
    }

    /// Reading the export back with a CSV reader yields each report's fields.
    #[test]
    fn prop_export_round_trips(reports in reports()) {
        let text = to_delimited_text(&reports).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect();
        prop_assert_eq!(headers, EXPORT_HEADER.map(String::from).to_vec());

        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        prop_assert_eq!(rows.len(), reports.len());

        for (row, report) in rows.iter().zip(&reports) {
            let month = report.month.to_string();
            prop_assert_eq!(&row[0], month.as_str());
            prop_assert_eq!(row[1].parse::<Decimal>().unwrap(), report.total_spent);

            let breakdown: CategoryAmounts = serde_json::from_str(&row[2]).unwrap();
            prop_assert_eq!(&breakdown, &report.category_breakdown);

            let top = report.top_category.map(|c| c.to_string()).unwrap_or_default();
            prop_assert_eq!(&row[3], top.as_str());

            let methods: Vec<PaymentMethodTotal> = serde_json::from_str(&row[4]).unwrap();
            prop_assert_eq!(&methods, &report.top_payment_methods);
        }
    }

    /// Shares of a non-empty period add up to roughly 100%.
    #[test]
    fn prop_category_shares_sum_to_hundred(reports in reports()) {
        let totals = ReportAggregator::aggregate_category_totals(&reports);
        prop_assume!(totals.total() > Decimal::ZERO);

        let shares = ReportAggregator::category_shares(&totals);
        let sum: Decimal = shares.iter().map(|s| s.percentage).sum();
        // each share is rounded to 0.1, so the sum drifts by at most 0.05 per share
        let tolerance = Decimal::new(5, 2) * Decimal::from(shares.len());
        prop_assert!((sum - Decimal::ONE_HUNDRED).abs() <= tolerance);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn report(m: &str, total: Decimal) -> MonthlyReport {
        MonthlyReport {
            month: m.parse().unwrap(),
            total_spent: total,
            category_breakdown: CategoryAmounts::new(),
            top_category: None,
            top_payment_methods: Vec::new(),
        }
    }

    #[test]
    fn test_bar_series_reverse_input_order() {
        let reports = vec![report("2024-02", dec!(700)), report("2024-01", dec!(500))];
        let series =
            ReportAggregator::build_series(&reports, ChartKind::Bar, &CategoryTotals::new());
        assert_eq!(series.datasets[0].values, vec![dec!(500), dec!(700)]);
    }

    #[test]
    fn test_deserialize_backend_report() {
        let json = r#"{
            "month": "2024-01",
            "totalSpent": 1350.75,
            "categoryBreakdown": {"Rent": 1000, "Food": 350.75},
            "topCategory": "Rent",
            "topPaymentMethods": [
                {"method": "Net Banking", "total": 1000},
                {"method": "UPI", "total": 350.75}
            ]
        }"#;

        let report: MonthlyReport = serde_json::from_str(json).unwrap();

        assert_eq!(report.month, "2024-01".parse().unwrap());
        assert_eq!(report.total_spent, dec!(1350.75));
        assert_eq!(
            report.category_breakdown.categories().collect::<Vec<_>>(),
            vec![CategoryId::Rent, CategoryId::Food]
        );
        assert_eq!(report.top_category, Some(CategoryId::Rent));
        assert_eq!(report.top_payment_methods[0].method, PaymentMethod::NetBanking);
    }

    #[test]
    fn test_deserialize_sparse_report() {
        let json = r#"{"month": "2024-02", "totalSpent": 0, "topCategory": null}"#;
        let report: MonthlyReport = serde_json::from_str(json).unwrap();
        assert!(report.category_breakdown.is_empty());
        assert_eq!(report.top_category, None);
        assert!(report.top_payment_methods.is_empty());
    }

    #[test]
    fn test_deserialize_expense_with_timestamp() {
        let json = r#"{
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "amount": 499,
            "category": "Shopping",
            "date": "2024-01-15T00:00:00.000Z",
            "paymentMethod": "Credit Card",
            "notes": "Shoes"
        }"#;

        let expense: ExpenseRecord = serde_json::from_str(json).unwrap();

        assert_eq!(expense.id, "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(expense.date.to_string(), "2024-01-15");
        assert_eq!(expense.payment_method, PaymentMethod::CreditCard);
        assert_eq!(expense.notes.as_deref(), Some("Shoes"));
    }
}

//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use spendtrack_shared::types::{CategoryAmounts, CategoryId, Month, PaymentMethod};

use super::error::ReportError;

/// A single expense as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    /// Backend document ID.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Amount spent, never negative.
    pub amount: Decimal,
    /// Expense category.
    pub category: CategoryId,
    /// Calendar date of the expense.
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub date: NaiveDate,
    /// How the expense was paid.
    pub payment_method: PaymentMethod,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Accepts both `2024-01-15` and full ISO timestamps such as
/// `2024-01-15T00:00:00.000Z`, keeping only the calendar date.
fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let date_part = raw.get(..10).unwrap_or(raw.as_str());
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(serde::de::Error::custom)
}

/// Total spent through one payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodTotal {
    /// Payment method.
    pub method: PaymentMethod,
    /// Amount paid through it.
    pub total: Decimal,
}

/// Backend summary of one calendar month.
///
/// `total_spent` is expected to equal the sum of `category_breakdown`; this is
/// not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReport {
    /// Month covered by the report.
    pub month: Month,
    /// Total spent in the month.
    pub total_spent: Decimal,
    /// Spend per category; missing categories spent nothing.
    #[serde(default)]
    pub category_breakdown: CategoryAmounts,
    /// Category with the highest spend.
    #[serde(default)]
    pub top_category: Option<CategoryId>,
    /// Payment methods ordered by total, highest first.
    #[serde(default)]
    pub top_payment_methods: Vec<PaymentMethodTotal>,
}

/// Category totals across a selected period, in first-appearance order.
pub type CategoryTotals = CategoryAmounts;

/// Chart shape requested by the report view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// One series per category over time.
    Line,
    /// Monthly totals.
    Bar,
    /// Category distribution over the whole period.
    Pie,
}

impl ChartKind {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }

    /// Chart title shown above the series.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Line => "Monthly Expense Trends",
            Self::Bar => "Monthly Total Expenses",
            Self::Pie => "Expenses by Category",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChartKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            "pie" => Ok(Self::Pie),
            _ => Err(ReportError::InvalidInput(format!("Unknown chart kind: {s}"))),
        }
    }
}

/// One labelled sequence of values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Legend label.
    pub label: String,
    /// Category the dataset tracks, for per-category series.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    /// Values aligned with the series labels.
    pub values: Vec<Decimal>,
}

/// Chart-ready data: axis (or slice) labels plus aligned datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Requested chart kind.
    pub kind: ChartKind,
    /// Axis labels (months) or slice labels (categories).
    pub labels: Vec<String>,
    /// Datasets; every `values` has the same length as `labels`.
    pub datasets: Vec<ChartDataset>,
}

impl ChartSeries {
    /// A series with nothing to draw.
    #[must_use]
    pub const fn empty(kind: ChartKind) -> Self {
        Self {
            kind,
            labels: Vec::new(),
            datasets: Vec::new(),
        }
    }

    /// True when the view should show its empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A category's share of the period total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category.
    pub category: CategoryId,
    /// Amount spent in the period.
    pub total: Decimal,
    /// Percentage of the period total, one decimal place.
    pub percentage: Decimal,
}

/// Spend over a raw expense list, as the expense page shows it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTotals {
    /// Expenses dated in the requested month.
    pub this_month: Decimal,
    /// Every expense in the list.
    pub all_time: Decimal,
}

/// Headline figures for the selected period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    /// Number of monthly reports in the period.
    pub months: usize,
    /// Total spent across all reports.
    pub total_spent: Decimal,
    /// Mean monthly spend, two decimal places.
    pub average_monthly_spent: Decimal,
    /// Top category of the first report.
    pub top_category: Option<CategoryId>,
    /// Top payment method of the first report.
    pub top_payment_method: Option<PaymentMethod>,
}

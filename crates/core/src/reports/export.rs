//! Delimited (CSV) export of monthly reports.
//!
//! The header is the report's wire field names; structured fields are embedded
//! as compact JSON. Fields holding a comma, quote, or line break are quoted
//! with inner quotes doubled. Records end with CRLF.

use rust_decimal::Decimal;
use serde::ser::Error as _;
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use spendtrack_shared::types::{CategoryAmounts, Month, PaymentMethod};

use super::error::ReportError;
use super::types::{MonthlyReport, PaymentMethodTotal};

/// Column names, in wire order.
pub const EXPORT_HEADER: [&str; 5] = [
    "month",
    "totalSpent",
    "categoryBreakdown",
    "topCategory",
    "topPaymentMethods",
];

/// Serializes `reports` into delimited text, one row per report in input order.
///
/// # Errors
///
/// Returns `ReportError::EmptyInput` when `reports` is empty and
/// `ReportError::Export` if the writer fails.
pub fn to_delimited_text(reports: &[MonthlyReport]) -> Result<String, ReportError> {
    if reports.is_empty() {
        return Err(ReportError::EmptyInput);
    }

    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(EXPORT_HEADER)?;
    for report in reports {
        writer.write_record(export_row(report)?)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Export(e.to_string()))
}

/// Download name for an export of the selected months, e.g.
/// `report_2024-01_2024-02.csv`.
#[must_use]
pub fn export_file_name(months: &[Month]) -> String {
    let joined: Vec<String> = months.iter().map(ToString::to_string).collect();
    format!("report_{}.csv", joined.join("_"))
}

fn export_row(report: &MonthlyReport) -> Result<[String; 5], ReportError> {
    let payment_methods: Vec<PaymentMethodCell> = report
        .top_payment_methods
        .iter()
        .map(PaymentMethodCell::from)
        .collect();

    Ok([
        report.month.to_string(),
        format_amount(report.total_spent),
        serde_json::to_string(&BreakdownCell(&report.category_breakdown))?,
        report
            .top_category
            .map(|c| c.as_str().to_string())
            .unwrap_or_default(),
        serde_json::to_string(&payment_methods)?,
    ])
}

fn format_amount(amount: Decimal) -> String {
    amount.normalize().to_string()
}

/// An amount embedded as an exact JSON number, e.g. `42.5`.
struct ExactAmount(Decimal);

impl Serialize for ExactAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RawValue::from_string(format_amount(self.0))
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

/// `{"Food":100,"Rent":200}`
struct BreakdownCell<'a>(&'a CategoryAmounts);

impl Serialize for BreakdownCell<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.0
                .iter()
                .map(|(category, amount)| (category, ExactAmount(amount))),
        )
    }
}

/// `{"method":"UPI","total":500}`
#[derive(Serialize)]
struct PaymentMethodCell {
    method: PaymentMethod,
    total: ExactAmount,
}

impl From<&PaymentMethodTotal> for PaymentMethodCell {
    fn from(entry: &PaymentMethodTotal) -> Self {
        Self {
            method: entry.method,
            total: ExactAmount(entry.total),
        }
    }
}

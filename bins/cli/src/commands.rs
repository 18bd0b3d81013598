//! Command implementations.
//!
//! Each command reads its inputs from disk, runs the core, and returns the
//! text to print so the handlers stay testable without capturing stdout.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::json;
use spendtrack_core::budget::{BudgetAlertService, BudgetLimit, BudgetPolicy, BudgetStatusEvaluator};
use spendtrack_core::dashboard::DashboardSnapshot;
use spendtrack_core::reports::{
    ChartKind, ExpenseRecord, MonthSelection, MonthlyReport, ReportAggregator, to_delimited_text,
};
use spendtrack_shared::AppConfig;
use spendtrack_shared::types::Month;
use tracing::info;

use crate::lookup::LimitsLookup;

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Loads an array of monthly reports in backend wire form.
pub fn load_reports(path: &Path) -> anyhow::Result<Vec<MonthlyReport>> {
    let reports: Vec<MonthlyReport> = read_json(path)?;
    info!(count = reports.len(), path = %path.display(), "loaded reports");
    Ok(reports)
}

/// Dashboard snapshot for the first report's month, with every category's alert.
pub async fn alerts(
    config: &AppConfig,
    reports_path: &Path,
    limits_path: Option<&Path>,
) -> anyhow::Result<String> {
    let reports = load_reports(reports_path)?;
    let limits: Vec<BudgetLimit> = match limits_path {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    let month = reports.first().map_or_else(Month::current, |r| r.month);
    let evaluator = BudgetStatusEvaluator::new(BudgetPolicy::from(&config.budget));
    let lookup = LimitsLookup::new(&limits, reports.first().cloned());
    let service = BudgetAlertService::new(Arc::new(lookup), evaluator);

    let outcomes = service.gather(month, reports.first()).await;
    let snapshot = DashboardSnapshot::from_outcomes(month, &reports, &outcomes);
    info!(
        %month,
        flagged = snapshot.needs_attention().len(),
        failed = snapshot.failed_categories.len(),
        "alerts gathered"
    );

    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Chart series of the given kind as JSON.
pub fn series(reports_path: &Path, kind: &str) -> anyhow::Result<String> {
    let kind: ChartKind = kind.parse()?;
    let reports = load_reports(reports_path)?;
    let totals = ReportAggregator::aggregate_category_totals(&reports);
    let series = ReportAggregator::build_series(&reports, kind, &totals);
    Ok(serde_json::to_string_pretty(&series)?)
}

/// Writes the delimited export into `out_dir` and returns the written path.
pub fn export(reports_path: &Path, out_dir: &Path) -> anyhow::Result<PathBuf> {
    let reports = load_reports(reports_path)?;
    let text = to_delimited_text(&reports)?;

    let mut selection = MonthSelection::default();
    for report in &reports {
        if !selection.contains(report.month) {
            selection.toggle(report.month);
        }
    }

    let path = out_dir.join(selection.export_file_name());
    fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), rows = reports.len(), "report exported");
    Ok(path)
}

/// Period summary, category shares, and payment method totals as JSON.
pub fn summary(reports_path: &Path) -> anyhow::Result<String> {
    let reports = load_reports(reports_path)?;
    let totals = ReportAggregator::aggregate_category_totals(&reports);

    let output = json!({
        "summary": ReportAggregator::summarize_period(&reports),
        "categoryShares": ReportAggregator::category_shares(&totals),
        "paymentMethods": ReportAggregator::payment_method_totals(&reports),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Builds one month's report from raw expenses.
pub fn summarize(expenses_path: &Path, month: &str) -> anyhow::Result<String> {
    let month: Month = month.parse()?;
    let expenses: Vec<ExpenseRecord> = read_json(expenses_path)?;
    let report = ReportAggregator::summarize_month(month, &expenses);
    Ok(serde_json::to_string_pretty(&report)?)
}

/// The month picker options ending at `end`, newest last.
pub fn months(config: &AppConfig, end: Option<&str>) -> anyhow::Result<String> {
    let end = match end {
        Some(raw) => raw.parse()?,
        None => Month::current(),
    };
    let count = usize::try_from(config.report.default_months)?;

    Ok(MonthSelection::options(end, count)
        .iter()
        .map(|m| format!("{m}\t{}", m.label()))
        .collect::<Vec<_>>()
        .join("\n"))
}

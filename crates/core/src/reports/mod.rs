//! Spending report aggregation.
//!
//! This module provides pure business logic over backend monthly reports:
//! - Category totals across a selected period
//! - Chart series shaping (line, bar, pie)
//! - Delimited (CSV) export
//! - Period summaries, category shares, and payment method totals
//! - Month selection for the report picker

pub mod error;
pub mod export;
pub mod selection;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use export::{EXPORT_HEADER, export_file_name, to_delimited_text};
pub use selection::MonthSelection;
pub use service::ReportAggregator;
pub use types::*;

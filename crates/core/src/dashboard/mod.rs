//! Current-month dashboard snapshot.
//!
//! Combines the month's report with its gathered budget alerts:
//! - Month-to-date spend
//! - Alerts that need attention
//! - Categories whose lookup failed

pub mod types;

pub use types::*;

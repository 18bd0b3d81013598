//! Core computations for SpendTrack.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every input is data already fetched from the backend; every output is a
//! value the presentation layer renders as-is.
//!
//! # Modules
//!
//! - `budget` - Budget status tiers and per-category alert gathering
//! - `reports` - Category totals, chart series shaping, and delimited export
//! - `dashboard` - Current-month snapshot combining reports and alerts

pub mod budget;
pub mod dashboard;
pub mod reports;

//! Shared types, errors, and configuration for SpendTrack.
//!
//! This crate provides common types used across all other crates:
//! - Closed expense vocabularies (categories, payment methods)
//! - Calendar month keys and insertion-ordered category amounts
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, BudgetConfig, ReportConfig};
pub use error::{AppError, AppResult};

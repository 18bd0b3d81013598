//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Budget alert configuration.
    #[serde(default)]
    pub budget: BudgetConfig,
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Budget alert configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Limit applied to categories without a configured budget.
    #[serde(default = "default_monthly_limit")]
    pub default_monthly_limit: Decimal,
    /// Percentage of the limit at which a category turns to warning.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold: u64,
}

fn default_monthly_limit() -> Decimal {
    Decimal::from(15_000)
}

fn default_warning_threshold() -> u64 {
    80
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            default_monthly_limit: default_monthly_limit(),
            warning_threshold: default_warning_threshold(),
        }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Number of months offered in the month picker.
    #[serde(default = "default_months")]
    pub default_months: u32,
}

fn default_months() -> u32 {
    12
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_months: default_months(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SPENDTRACK").separator("__"))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks that the loaded values are usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` for a non-positive default limit, a
    /// warning threshold outside 1..=100, or a zero month window.
    pub fn validate(&self) -> AppResult<()> {
        if self.budget.default_monthly_limit <= Decimal::ZERO {
            return Err(AppError::Configuration(format!(
                "budget.default_monthly_limit must be positive, got {}",
                self.budget.default_monthly_limit
            )));
        }

        if !(1..=100).contains(&self.budget.warning_threshold) {
            return Err(AppError::Configuration(format!(
                "budget.warning_threshold must be between 1 and 100, got {}",
                self.budget.warning_threshold
            )));
        }

        if self.report.default_months == 0 {
            return Err(AppError::Configuration(
                "report.default_months must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

//! Budget status tiers and per-category alerts.

pub mod alerts;
pub mod error;
pub mod service;
pub mod types;


pub use alerts::{AlertOutcome, BudgetAlertService, BudgetLookup};
pub use error::{BudgetError, LookupError};
pub use service::BudgetStatusEvaluator;
pub use types::{
    BudgetAlert, BudgetCheck, BudgetEvaluation, BudgetLimit, BudgetPolicy, BudgetSignal,
    StatusTier,
};

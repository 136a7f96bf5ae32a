//! Reports for the budget tracker
//!
//! Reports are read-only snapshots computed from storage.

pub mod budget_summary;

pub use budget_summary::{BudgetSummary, OverBudgetCategory, OverallStatus, UnbudgetedCategory};

//! Budget repository
//!
//! Budgets persist to `budgets.json`. Nothing stops two budget rows from
//! sharing a category; lookups use the first one stored.

use crate::error::TrackerError;
use crate::models::{Amount, Budget};

use super::table::Table;

pub type BudgetRepository = Table<Budget>;

impl Table<Budget> {
    /// Sum of every budget row (zero when empty)
    pub fn total_budgeted(&self) -> Result<Amount, TrackerError> {
        Ok(self.list_all()?.iter().map(|b| b.budget_amount).sum())
    }

    /// Budgeted amount for a category, if one is set
    pub fn budget_for(&self, category: &str) -> Result<Option<Amount>, TrackerError> {
        Ok(self.find_by_key(category)?.map(|b| b.budget_amount))
    }
}

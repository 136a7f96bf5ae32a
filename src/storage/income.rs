//! Income repository
//!
//! Income records persist to `income.json`, keyed by category.

use crate::error::TrackerError;
use crate::models::{Amount, Income};

use super::table::Table;

pub type IncomeRepository = Table<Income>;

impl Table<Income> {
    /// Sum of every income amount (zero when empty)
    pub fn total_amount(&self) -> Result<Amount, TrackerError> {
        Ok(self.list_all()?.iter().map(|i| i.amount).sum())
    }
}

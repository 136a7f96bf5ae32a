//! Financial goal repository, persisted to `financial_goals.json`

use crate::error::TrackerError;
use crate::models::FinancialGoal;

use super::table::Table;

pub type GoalRepository = Table<FinancialGoal>;

impl Table<FinancialGoal> {
    /// Goals whose saved amount has reached the target, in insertion order
    pub fn achieved(&self) -> Result<Vec<FinancialGoal>, TrackerError> {
        Ok(self
            .list_all()?
            .into_iter()
            .filter(FinancialGoal::is_achieved)
            .collect())
    }
}

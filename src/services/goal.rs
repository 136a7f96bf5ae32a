//! Financial goal service
//!
//! Goal text is not unique. Updates and deletes keyed by goal text apply to
//! every goal that shares it.

use crate::error::TrackerResult;
use crate::models::{Amount, FinancialGoal};
use crate::storage::Storage;

/// Service for financial goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add(&self, goal: &str, target: Amount, saved: Amount) -> TrackerResult<FinancialGoal> {
        let goal = self
            .storage
            .goals
            .insert_and_save(FinancialGoal::new(goal, target, saved))?;
        self.storage.log_create(&goal);
        Ok(goal)
    }

    pub fn list(&self) -> TrackerResult<Vec<FinancialGoal>> {
        self.storage.goals.list_all()
    }

    pub fn find(&self, goal: &str) -> TrackerResult<Option<FinancialGoal>> {
        self.storage.goals.find_by_key(goal)
    }

    /// Distinct goal names, in order of creation
    pub fn names(&self) -> TrackerResult<Vec<String>> {
        self.storage.goals.distinct_keys()
    }

    /// Overwrite the saved amount of every goal named `goal`; returns rows changed
    pub fn update_saved(&self, goal: &str, saved: Amount) -> TrackerResult<usize> {
        let changes = self.storage.goals.update_amount_and_save(goal, saved)?;
        self.storage.log_updates(&changes);
        Ok(changes.len())
    }

    /// Delete every goal named `goal`; returns rows removed
    pub fn delete(&self, goal: &str) -> TrackerResult<usize> {
        let removed = self.storage.goals.delete_by_key_and_save(goal)?;
        self.storage.log_deletes(&removed);
        Ok(removed.len())
    }

    pub fn achieved(&self) -> TrackerResult<Vec<FinancialGoal>> {
        self.storage.goals.achieved()
    }
}

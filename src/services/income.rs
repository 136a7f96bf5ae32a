//! Income service

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Income};
use crate::storage::Storage;

/// Service for income management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new income source; the category must not be in use
    pub fn add(&self, category: &str, amount: Amount, pay_date: NaiveDate) -> TrackerResult<Income> {
        if self.storage.income.contains_key(category)? {
            return Err(TrackerError::duplicate_income(category));
        }

        let income = self
            .storage
            .income
            .insert_and_save(Income::new(category, amount, pay_date))?;
        self.storage.log_create(&income);

        Ok(income)
    }

    pub fn list(&self) -> TrackerResult<Vec<Income>> {
        self.storage.income.list_all()
    }

    pub fn list_by_category(&self, category: &str) -> TrackerResult<Vec<Income>> {
        self.storage.income.find_all_by_key(category)
    }

    pub fn find(&self, category: &str) -> TrackerResult<Option<Income>> {
        self.storage.income.find_by_key(category)
    }

    pub fn categories(&self) -> TrackerResult<Vec<String>> {
        self.storage.income.distinct_keys()
    }

    /// Overwrite the amount of every income row in `category`; returns rows changed
    pub fn update_amount(&self, category: &str, amount: Amount) -> TrackerResult<usize> {
        let changes = self.storage.income.update_amount_and_save(category, amount)?;
        self.storage.log_updates(&changes);
        Ok(changes.len())
    }

    /// Delete every income row in `category`; returns rows removed
    pub fn delete(&self, category: &str) -> TrackerResult<usize> {
        let removed = self.storage.income.delete_by_key_and_save(category)?;
        self.storage.log_deletes(&removed);
        Ok(removed.len())
    }

    pub fn total(&self) -> TrackerResult<Amount> {
        self.storage.income.total_amount()
    }
}

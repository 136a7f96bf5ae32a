//! Budget service
//!
//! Budgets are only set for categories that already have an expense. Setting
//! a budget overwrites every existing row for the category, or creates one.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Budget, EntityKind};
use crate::storage::Storage;

/// Outcome of setting a budget
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetUpdate {
    /// No budget existed; a new row was stored
    Created(Budget),
    /// This many existing rows were overwritten
    Updated(usize),
}

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Store a new budget row without any checks
    pub fn create(&self, category: &str, amount: Amount) -> TrackerResult<Budget> {
        let budget = self.storage.budgets.insert_and_save(Budget::new(category, amount))?;
        self.storage.log_create(&budget);
        Ok(budget)
    }

    /// Set the budget for an existing expense category
    pub fn set(&self, category: &str, amount: Amount) -> TrackerResult<BudgetUpdate> {
        if !self.storage.expenses.contains_key(category)? {
            return Err(TrackerError::no_match(EntityKind::Expense.label(), category));
        }

        if self.storage.budgets.contains_key(category)? {
            return Ok(BudgetUpdate::Updated(self.update_amount(category, amount)?));
        }

        Ok(BudgetUpdate::Created(self.create(category, amount)?))
    }

    pub fn get(&self, category: &str) -> TrackerResult<Option<Budget>> {
        self.storage.budgets.find_by_key(category)
    }

    pub fn list(&self) -> TrackerResult<Vec<Budget>> {
        self.storage.budgets.list_all()
    }

    /// Overwrite every budget row for `category`; returns rows changed
    pub fn update_amount(&self, category: &str, amount: Amount) -> TrackerResult<usize> {
        let changes = self.storage.budgets.update_amount_and_save(category, amount)?;
        self.storage.log_updates(&changes);
        Ok(changes.len())
    }

    /// Remove every budget row for `category`; returns rows removed
    pub fn delete(&self, category: &str) -> TrackerResult<usize> {
        let removed = self.storage.budgets.delete_by_key_and_save(category)?;
        self.storage.log_deletes(&removed);
        Ok(removed.len())
    }

    pub fn categories(&self) -> TrackerResult<Vec<String>> {
        self.storage.budgets.distinct_keys()
    }

    pub fn total(&self) -> TrackerResult<Amount> {
        self.storage.budgets.total_budgeted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::services::ExpenseService;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        ExpenseService::new(&storage)
            .add("Groceries", Amount::new(50.0), date)
            .unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_creates_then_updates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let created = service.set("Groceries", Amount::new(300.0)).unwrap();
        assert!(matches!(created, BudgetUpdate::Created(_)));

        let updated = service.set("Groceries", Amount::new(10.0)).unwrap();
        assert_eq!(updated, BudgetUpdate::Updated(1));

        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(
            service.get("Groceries").unwrap().unwrap().budget_amount,
            Amount::new(10.0)
        );
    }

    #[test]
    fn test_set_requires_expense_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let err = service.set("Travel", Amount::new(100.0)).unwrap_err();

        assert!(err.is_no_match());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_create_allows_duplicates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.create("Travel", Amount::new(100.0)).unwrap();
        service.create("Travel", Amount::new(50.0)).unwrap();

        assert_eq!(service.list().unwrap().len(), 2);
        assert_eq!(service.categories().unwrap(), vec!["Travel"]);
        assert_eq!(service.total().unwrap().value(), 150.0);
        assert_eq!(service.update_amount("Travel", Amount::new(1.0)).unwrap(), 2);
        assert_eq!(service.delete("Travel").unwrap(), 2);
    }
}

//! Expense service
//!
//! Business logic for expenses: duplicate-category checks on create,
//! category-keyed update and delete, and the expense-to-budget cascade.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Expense};
use crate::storage::Storage;

/// What a category delete removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpenseDeletion {
    pub expenses_removed: usize,
    pub budgets_removed: usize,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new expense
    ///
    /// Fails with `DuplicateCategory` if the category is already used; the
    /// store is left unchanged in that case.
    pub fn add(&self, category: &str, amount: Amount, due_date: NaiveDate) -> TrackerResult<Expense> {
        if self.storage.expenses.contains_key(category)? {
            return Err(TrackerError::duplicate_expense(category));
        }

        let expense = self
            .storage
            .expenses
            .insert_and_save(Expense::new(category, amount, due_date))?;
        self.storage.log_create(&expense);

        Ok(expense)
    }

    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.list_all()
    }

    pub fn list_by_category(&self, category: &str) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.find_all_by_key(category)
    }

    pub fn find(&self, category: &str) -> TrackerResult<Option<Expense>> {
        self.storage.expenses.find_by_key(category)
    }

    /// Distinct expense categories, in order of creation
    pub fn categories(&self) -> TrackerResult<Vec<String>> {
        self.storage.expenses.distinct_keys()
    }

    /// Overwrite the amount of every expense in `category`
    ///
    /// Returns the number of rows changed. An unknown category changes
    /// nothing and is not an error.
    pub fn update_amount(&self, category: &str, amount: Amount) -> TrackerResult<usize> {
        let changes = self.storage.expenses.update_amount_and_save(category, amount)?;
        self.storage.log_updates(&changes);
        Ok(changes.len())
    }

    /// Delete every expense in `category` and any budget with the same category
    ///
    /// The two tables are committed one after the other. If the budget commit
    /// fails the expenses stay deleted and the error says so.
    pub fn delete(&self, category: &str) -> TrackerResult<ExpenseDeletion> {
        let expenses = self.storage.expenses.delete_by_key_and_save(category)?;
        self.storage.log_deletes(&expenses);

        let budgets = self
            .storage
            .budgets
            .delete_by_key_and_save(category)
            .map_err(|err| {
                TrackerError::Storage(format!(
                    "expenses for '{}' were deleted but its budget was not: {}",
                    category, err
                ))
            })?;
        self.storage.log_deletes(&budgets);

        Ok(ExpenseDeletion {
            expenses_removed: expenses.len(),
            budgets_removed: budgets.len(),
        })
    }

    pub fn total(&self) -> TrackerResult<Amount> {
        self.storage.expenses.total_amount()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::Budget;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
    }

    #[test]
    fn test_add_expense() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let expense = service.add("Groceries", Amount::new(50.0), date()).unwrap();

        assert!(expense.id.is_assigned());
        assert_eq!(service.list().unwrap(), vec![expense]);
        assert!(storage.paths().expenses_file().exists());
    }

    #[test]
    fn test_duplicate_category_rejected_and_store_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Groceries", Amount::new(50.0), date()).unwrap();
        let before = service.list().unwrap();

        let err = service
            .add("Groceries", Amount::new(75.0), date())
            .unwrap_err();

        assert!(err.is_duplicate());
        assert_eq!(service.list().unwrap(), before);
    }

    #[test]
    fn test_update_amount() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Groceries", Amount::new(50.0), date()).unwrap();

        assert_eq!(service.update_amount("Groceries", Amount::new(65.0)).unwrap(), 1);
        assert_eq!(
            service.find("Groceries").unwrap().unwrap().amount,
            Amount::new(65.0)
        );
    }

    #[test]
    fn test_update_unknown_category_is_noop() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Groceries", Amount::new(50.0), date()).unwrap();
        let before = service.list().unwrap();

        assert_eq!(service.update_amount("Rent", Amount::new(1.0)).unwrap(), 0);
        assert_eq!(service.list().unwrap(), before);
    }

    #[test]
    fn test_delete_cascades_to_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Groceries", Amount::new(50.0), date()).unwrap();
        service.add("Rent", Amount::new(900.0), date()).unwrap();
        storage
            .budgets
            .insert(Budget::new("Groceries", Amount::new(300.0)))
            .unwrap();
        storage
            .budgets
            .insert(Budget::new("Rent", Amount::new(1000.0)))
            .unwrap();

        let deletion = service.delete("Groceries").unwrap();

        assert_eq!(
            deletion,
            ExpenseDeletion {
                expenses_removed: 1,
                budgets_removed: 1
            }
        );
        assert!(service.find("Groceries").unwrap().is_none());
        assert!(storage.budgets.find_by_key("Groceries").unwrap().is_none());
        assert!(storage.budgets.find_by_key("Rent").unwrap().is_some());
    }

    #[test]
    fn test_delete_without_budget_leaves_budgets_alone() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Groceries", Amount::new(50.0), date()).unwrap();
        storage
            .budgets
            .insert(Budget::new("Rent", Amount::new(1000.0)))
            .unwrap();

        let deletion = service.delete("Groceries").unwrap();

        assert_eq!(deletion.budgets_removed, 0);
        assert_eq!(storage.budgets.len().unwrap(), 1);
    }

    #[test]
    fn test_total_tracks_mutations() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        assert_eq!(service.total().unwrap(), Amount::zero());

        service.add("Groceries", Amount::new(50.0), date()).unwrap();
        service.add("Rent", Amount::new(900.0), date()).unwrap();
        service.update_amount("Rent", Amount::new(800.0)).unwrap();
        service.delete("Groceries").unwrap();
        let _ = service.add("Rent", Amount::new(1.0), date());

        let expected: Amount = service.list().unwrap().iter().map(|e| e.amount).sum();
        assert_eq!(service.total().unwrap(), expected);
        assert_eq!(expected.value(), 800.0);
    }

    #[test]
    fn test_failed_commit_leaves_store_unchanged() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Groceries", Amount::new(50.0), date()).unwrap();
        let before = service.list().unwrap();
        let blocker = storage.paths().expenses_file().with_extension("json.tmp");
        std::fs::create_dir_all(&blocker).unwrap();

        assert!(service.add("Rent", Amount::new(900.0), date()).is_err());
        assert!(service.update_amount("Groceries", Amount::new(1.0)).is_err());
        assert!(service.delete("Groceries").is_err());
        assert_eq!(service.list().unwrap(), before);

        // Once the file can be written again, a retry is not a duplicate
        std::fs::remove_dir(&blocker).unwrap();
        service.add("Rent", Amount::new(900.0), date()).unwrap();
        assert_eq!(storage.audit().read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_failed_budget_cascade_is_reported() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Groceries", Amount::new(50.0), date()).unwrap();
        storage
            .budgets
            .insert(Budget::new("Groceries", Amount::new(300.0)))
            .unwrap();
        std::fs::create_dir_all(storage.paths().budgets_file().with_extension("json.tmp")).unwrap();

        let err = service.delete("Groceries").unwrap_err();

        assert!(err.to_string().contains("were deleted but its budget was not"));
        assert!(service.find("Groceries").unwrap().is_none());
        assert!(storage.budgets.contains_key("Groceries").unwrap());
    }

    #[test]
    fn test_audit_failure_does_not_fail_committed_add() {
        let (_temp_dir, storage) = create_test_storage();
        std::fs::create_dir_all(storage.paths().audit_log()).unwrap();
        let service = ExpenseService::new(&storage);

        let expense = service.add("Rent", Amount::new(900.0), date()).unwrap();

        let reloaded = crate::storage::ExpenseRepository::new(storage.paths().expenses_file());
        reloaded.load().unwrap();
        assert_eq!(reloaded.list_all().unwrap(), vec![expense]);
        assert_eq!(storage.take_warnings().len(), 1);
    }

    #[test]
    fn test_mutations_are_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add("Groceries", Amount::new(50.0), date()).unwrap();
        service.update_amount("Groceries", Amount::new(60.0)).unwrap();
        service.update_amount("Missing", Amount::new(60.0)).unwrap();
        service.delete("Groceries").unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[1].summary.as_deref(),
            Some("amount: $50.00 -> $60.00")
        );
    }
}

//! Storage initialization
//!
//! Handles first-run setup: creates the four table files and, unless
//! disabled in settings, fills them with example records.

use chrono::NaiveDate;

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Amount, Budget, Expense, FinancialGoal, Income};

use super::{BudgetRepository, ExpenseRepository, GoalRepository, IncomeRepository};

const SEED_EXPENSES: [(&str, f64, &str); 5] = [
    ("Groceries", 50.0, "2024-12-01"),
    ("Utilities", 100.0, "2024-12-02"),
    ("Transport", 20.0, "2024-12-03"),
    ("Dining", 30.0, "2024-12-04"),
    ("Entertainment", 40.0, "2024-12-05"),
];

const SEED_INCOME: [(&str, f64, &str); 5] = [
    ("Salary", 2000.0, "2024-12-01"),
    ("Freelancing", 500.0, "2024-12-02"),
    ("Investments", 300.0, "2024-12-03"),
    ("Gifts", 100.0, "2024-12-04"),
    ("Other", 50.0, "2024-12-05"),
];

const SEED_BUDGETS: [(&str, f64); 5] = [
    ("Groceries", 300.0),
    ("Utilities", 150.0),
    ("Transport", 100.0),
    ("Dining", 200.0),
    ("Entertainment", 150.0),
];

const SEED_GOALS: [(&str, f64, f64); 5] = [
    ("Buy a car", 20000.0, 5000.0),
    ("Vacation", 5000.0, 1500.0),
    ("Emergency fund", 10000.0, 3000.0),
    ("Home renovation", 15000.0, 4000.0),
    ("New laptop", 2000.0, 800.0),
];

/// Check if storage needs initialization (no table file exists yet)
pub fn needs_initialization(paths: &TrackerPaths) -> bool {
    !paths.has_store()
}

/// Initialize storage for a fresh installation
///
/// Returns `true` if the store was created by this call. An existing store is
/// never touched.
pub fn initialize_storage(paths: &TrackerPaths, seed: bool) -> TrackerResult<bool> {
    paths.ensure_directories()?;

    if !needs_initialization(paths) {
        return Ok(false);
    }

    let expenses = ExpenseRepository::new(paths.expenses_file());
    let income = IncomeRepository::new(paths.income_file());
    let budgets = BudgetRepository::new(paths.budgets_file());
    let goals = GoalRepository::new(paths.goals_file());

    if seed {
        for (category, amount, date) in SEED_EXPENSES {
            expenses.insert(Expense::new(category, Amount::new(amount), seed_date(date)?))?;
        }
        for (category, amount, date) in SEED_INCOME {
            income.insert(Income::new(category, Amount::new(amount), seed_date(date)?))?;
        }
        for (category, amount) in SEED_BUDGETS {
            budgets.insert(Budget::new(category, Amount::new(amount)))?;
        }
        for (goal, target, saved) in SEED_GOALS {
            goals.insert(FinancialGoal::new(goal, Amount::new(target), Amount::new(saved)))?;
        }
    }

    expenses.save()?;
    income.save()?;
    budgets.save()?;
    goals.save()?;

    Ok(true)
}

fn seed_date(text: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|e| TrackerError::Storage(format!("Invalid seed date {}: {}", text, e)))
}

//! Service layer for the budget tracker
//!
//! The service layer sits on top of storage: it enforces the business rules,
//! commits each operation to disk, and writes the audit trail.

pub mod budget;
pub mod expense;
pub mod goal;
pub mod income;

pub use budget::{BudgetService, BudgetUpdate};
pub use expense::{ExpenseDeletion, ExpenseService};
pub use goal::GoalService;
pub use income::IncomeService;

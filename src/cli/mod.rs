//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive menu with the service
//! layer.

pub mod budget;
pub mod expense;
pub mod goal;
pub mod income;
pub mod menu;
pub mod prompt;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use menu::run_menu;
pub use prompt::Prompter;
pub use report::{handle_history_command, handle_summary_command};

//! Display formatting for terminal output
//!
//! Renders records as tables for the list commands and menu views.

pub mod records;

pub use records::{
    format_budget_list, format_expense_list, format_goal_list, format_income_list,
};

//! Budget Summary Report
//!
//! Compares total and per-category spending against budgets and lists the
//! financial goals that have been reached.

use std::fmt;

use serde::Serialize;

use crate::error::TrackerResult;
use crate::models::Amount;
use crate::storage::Storage;

/// Global judgment of total spend against total budget and balance
///
/// This does not look at individual categories: a category can be over its
/// budget while the overall status is still within budget, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    WithinBudget,
    OverBudget,
}

impl OverallStatus {
    /// Within budget only when expenses do not exceed the budgeted total and
    /// the balance is strictly positive
    pub fn classify(total_expenses: Amount, total_budgeted: Amount, balance: Amount) -> Self {
        if total_expenses <= total_budgeted && balance.is_positive() {
            Self::WithinBudget
        } else {
            Self::OverBudget
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WithinBudget => write!(f, "within budget"),
            Self::OverBudget => write!(f, "over budget"),
        }
    }
}

/// An expense category whose spending exceeds its budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverBudgetCategory {
    pub category: String,
    pub spent: Amount,
    pub budgeted: Amount,
}

/// An expense category with no budget row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnbudgetedCategory {
    pub category: String,
    pub spent: Amount,
}

/// Point-in-time financial snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub total_budgeted: Amount,
    /// Income minus expenses
    pub balance: Amount,
    pub status: OverallStatus,
    pub over_budget: Vec<OverBudgetCategory>,
    pub unbudgeted: Vec<UnbudgetedCategory>,
    pub achieved_goals: Vec<String>,
}

impl BudgetSummary {
    /// Generate the summary from the current contents of storage
    pub fn generate(storage: &Storage) -> TrackerResult<Self> {
        let total_income = storage.income.total_amount()?;
        let total_expenses = storage.expenses.total_amount()?;
        let total_budgeted = storage.budgets.total_budgeted()?;

        let mut over_budget = Vec::new();
        let mut unbudgeted = Vec::new();

        for (category, spent) in storage.expenses.spent_by_category()? {
            match storage.budgets.budget_for(&category)? {
                None => unbudgeted.push(UnbudgetedCategory { category, spent }),
                Some(budgeted) if spent > budgeted => over_budget.push(OverBudgetCategory {
                    category,
                    spent,
                    budgeted,
                }),
                Some(_) => {}
            }
        }

        let balance = total_income - total_expenses;
        let status = OverallStatus::classify(total_expenses, total_budgeted, balance);

        let achieved_goals = storage
            .goals
            .achieved()?
            .into_iter()
            .map(|goal| goal.goal)
            .collect();

        Ok(Self {
            total_income,
            total_expenses,
            total_budgeted,
            balance,
            status,
            over_budget,
            unbudgeted,
            achieved_goals,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let money = |amount: Amount| amount.format_with_symbol(currency_symbol);
        let mut output = String::new();

        output.push_str("----- Budget Summary -----\n");
        output.push_str(&format!("Total Income: {}\n", money(self.total_income)));
        output.push_str(&format!("Total Expenses: {}\n", money(self.total_expenses)));
        output.push_str(&format!(
            "Total Budgeted Amount: {}\n",
            money(self.total_budgeted)
        ));
        output.push_str(&format!(
            "Remaining Balance (Income - Expenses): {}\n",
            money(self.balance)
        ));
        output.push_str(&format!("Overall Spending Status: {}\n", self.status));

        output.push('\n');
        if self.over_budget.is_empty() {
            output.push_str("No categories are over budget.\n");
        } else {
            output.push_str("Over Budget Categories:\n");
            for row in &self.over_budget {
                output.push_str(&format!(
                    " - {}: Spent {}, Budgeted {}\n",
                    row.category,
                    money(row.spent),
                    money(row.budgeted)
                ));
            }
        }

        output.push('\n');
        if self.unbudgeted.is_empty() {
            output.push_str("All expense categories have budgets set.\n");
        } else {
            output.push_str("Categories with No Budget Set:\n");
            for row in &self.unbudgeted {
                output.push_str(&format!(
                    " - {}: Spent {}, Budgeted None\n",
                    row.category,
                    money(row.spent)
                ));
            }
        }

        output.push_str("\n--- Financial Goals Status ---\n");
        if self.achieved_goals.is_empty() {
            output.push_str("In Progress\n");
        } else {
            output.push_str("Financial goals achieved:\n");
            for goal in &self.achieved_goals {
                output.push_str(&format!("- {}\n", goal));
            }
        }

        output
    }
}

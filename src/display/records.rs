//! Record table formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Budget, Expense, FinancialGoal, Income};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Due date")]
    due_date: String,
}

#[derive(Tabled)]
struct IncomeRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Pay date")]
    pay_date: String,
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Goal")]
    goal: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Progress")]
    progress: String,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    table.to_string()
}

/// Format expenses as a table
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    render(
        expenses
            .iter()
            .map(|e| ExpenseRow {
                id: e.id.value(),
                category: e.category.clone(),
                amount: e.amount.format_with_symbol(symbol),
                due_date: e.due_date.to_string(),
            })
            .collect(),
    )
}

/// Format income rows as a table
pub fn format_income_list(income: &[Income], symbol: &str) -> String {
    if income.is_empty() {
        return "No income found.".to_string();
    }

    render(
        income
            .iter()
            .map(|i| IncomeRow {
                id: i.id.value(),
                category: i.category.clone(),
                amount: i.amount.format_with_symbol(symbol),
                pay_date: i.pay_date.to_string(),
            })
            .collect(),
    )
}

pub fn format_budget_list(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.".to_string();
    }

    render(
        budgets
            .iter()
            .map(|b| BudgetRow {
                id: b.id.value(),
                category: b.category.clone(),
                budget: b.budget_amount.format_with_symbol(symbol),
            })
            .collect(),
    )
}

/// Format goals as a table with progress towards each target
pub fn format_goal_list(goals: &[FinancialGoal], symbol: &str) -> String {
    if goals.is_empty() {
        return "No financial goals found.".to_string();
    }

    render(
        goals
            .iter()
            .map(|g| GoalRow {
                id: g.id.value(),
                goal: g.goal.clone(),
                target: g.target_amount.format_with_symbol(symbol),
                saved: g.saved_amount.format_with_symbol(symbol),
                progress: if g.is_achieved() {
                    "achieved".to_string()
                } else {
                    format!("{:.1}%", g.progress_percent())
                },
            })
            .collect(),
    )
}

//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_expense_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::EntityKind;
use crate::services::ExpenseService;
use crate::storage::Storage;
use crate::validation::{parse_amount, parse_category, parse_date};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Expense category (letters only, must not exist yet)
        category: String,
        /// Amount (e.g., "50" or "50.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Due date (YYYY-MM-DD)
        due_date: String,
    },

    /// List all expenses
    List,

    /// Show the expenses in one category
    Show {
        category: String,
    },

    /// Change the amount of an expense category
    Update {
        category: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete an expense category and its budget
    Delete {
        category: String,
    },

    /// Show the total of all expenses
    Total,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            due_date,
        } => {
            let category = parse_category(&category)?;
            let amount = parse_amount(&amount)?;
            let due_date = parse_date(&due_date)?;

            let expense = service.add(&category, amount, due_date)?;
            println!(
                "Added expense {} (#{}): {} due {}",
                expense.category,
                expense.id,
                expense.amount.format_with_symbol(symbol),
                expense.due_date
            );
        }
        ExpenseCommands::List => {
            println!("{}", format_expense_list(&service.list()?, symbol));
        }
        ExpenseCommands::Show { category } => {
            let category = existing_category(&service, &category)?;
            println!("Expenses in category '{}':", category);
            println!(
                "{}",
                format_expense_list(&service.list_by_category(&category)?, symbol)
            );
        }
        ExpenseCommands::Update { category, amount } => {
            let category = existing_category(&service, &category)?;
            let amount = parse_amount(&amount)?;

            service.update_amount(&category, amount)?;
            println!(
                "Updated expense '{}' to {}",
                category,
                amount.format_with_symbol(symbol)
            );
        }
        ExpenseCommands::Delete { category } => {
            let category = existing_category(&service, &category)?;

            let deletion = service.delete(&category)?;
            if deletion.budgets_removed > 0 {
                println!("Deleted expense '{}' and its budget", category);
            } else {
                println!("Deleted expense '{}'", category);
            }
        }
        ExpenseCommands::Total => {
            println!(
                "Total Expenses: {}",
                service.total()?.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

/// Validate `input` and require it to name a recorded expense category
fn existing_category(service: &ExpenseService, input: &str) -> TrackerResult<String> {
    let category = parse_category(input)?;
    if service.find(&category)?.is_none() {
        return Err(TrackerError::no_match(EntityKind::Expense.label(), category));
    }
    Ok(category)
}

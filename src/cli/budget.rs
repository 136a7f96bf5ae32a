//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_budget_list;
use crate::error::TrackerResult;
use crate::services::{BudgetService, BudgetUpdate};
use crate::storage::Storage;
use crate::validation::{parse_amount, parse_category};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the budget for an existing expense category
    Set {
        category: String,
        /// Budget amount (e.g., "300" or "300.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the budget for a category
    Show {
        category: String,
    },

    /// List all budgets
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        BudgetCommands::Set { category, amount } => {
            let category = parse_category(&category)?;
            let amount = parse_amount(&amount)?;

            match service.set(&category, amount)? {
                BudgetUpdate::Created(_) => println!(
                    "Budget for category '{}' set to {}",
                    category,
                    amount.format_with_symbol(symbol)
                ),
                BudgetUpdate::Updated(_) => println!(
                    "Budget for category '{}' updated to {}",
                    category,
                    amount.format_with_symbol(symbol)
                ),
            }
        }
        BudgetCommands::Show { category } => {
            let category = parse_category(&category)?;
            match service.get(&category)? {
                Some(budget) => println!(
                    "Budget for {}: {}",
                    category,
                    budget.budget_amount.format_with_symbol(symbol)
                ),
                None => println!("No budget found for this category."),
            }
        }
        BudgetCommands::List => {
            println!("{}", format_budget_list(&service.list()?, symbol));
            println!(
                "Total budgeted: {}",
                service.total()?.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

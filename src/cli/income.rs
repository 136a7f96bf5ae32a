//! Income CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_income_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::EntityKind;
use crate::services::IncomeService;
use crate::storage::Storage;
use crate::validation::{parse_amount, parse_category, parse_date};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record a new income source
    Add {
        /// Income category (letters only, must not exist yet)
        category: String,
        /// Amount (e.g., "2000" or "2000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Pay date (YYYY-MM-DD)
        pay_date: String,
    },

    /// List all income
    List,

    /// Show the income in one category
    Show {
        category: String,
    },

    /// Change the amount of an income category
    Update {
        category: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Delete an income category
    Delete {
        category: String,
    },

    /// Show the total of all income
    Total,
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> TrackerResult<()> {
    let service = IncomeService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        IncomeCommands::Add {
            category,
            amount,
            pay_date,
        } => {
            let category = parse_category(&category)?;
            let amount = parse_amount(&amount)?;
            let pay_date = parse_date(&pay_date)?;

            let income = service.add(&category, amount, pay_date)?;
            println!(
                "Added income {} (#{}): {} paid {}",
                income.category,
                income.id,
                income.amount.format_with_symbol(symbol),
                income.pay_date
            );
        }
        IncomeCommands::List => {
            println!("{}", format_income_list(&service.list()?, symbol));
        }
        IncomeCommands::Show { category } => {
            let category = existing_category(&service, &category)?;
            println!("Income in category '{}':", category);
            println!(
                "{}",
                format_income_list(&service.list_by_category(&category)?, symbol)
            );
        }
        IncomeCommands::Update { category, amount } => {
            let category = existing_category(&service, &category)?;
            let amount = parse_amount(&amount)?;

            service.update_amount(&category, amount)?;
            println!(
                "Updated income '{}' to {}",
                category,
                amount.format_with_symbol(symbol)
            );
        }
        IncomeCommands::Delete { category } => {
            let category = existing_category(&service, &category)?;
            service.delete(&category)?;
            println!("Deleted income '{}'", category);
        }
        IncomeCommands::Total => {
            println!(
                "Total Income: {}",
                service.total()?.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}

fn existing_category(service: &IncomeService, input: &str) -> TrackerResult<String> {
    let category = parse_category(input)?;
    if service.find(&category)?.is_none() {
        return Err(TrackerError::no_match(EntityKind::Income.label(), category));
    }
    Ok(category)
}

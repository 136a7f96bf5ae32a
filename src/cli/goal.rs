//! Financial goal CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_goal_list;
use crate::error::{TrackerError, TrackerResult};
use crate::models::EntityKind;
use crate::services::GoalService;
use crate::storage::Storage;
use crate::validation::{parse_amount, parse_goal_name};

/// Financial goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a savings goal
    Add {
        goal: String,
        /// Target amount
        #[arg(allow_hyphen_values = true)]
        target: String,
        /// Amount saved so far
        #[arg(default_value = "0", allow_hyphen_values = true)]
        saved: String,
    },

    /// List goals with their progress
    List {
        /// Only show goals that have been reached
        #[arg(short, long)]
        achieved: bool,
    },

    /// Change the saved amount of every goal with this name
    Update {
        goal: String,
        #[arg(allow_hyphen_values = true)]
        saved: String,
    },

    /// Delete every goal with this name
    Delete {
        goal: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> TrackerResult<()> {
    let service = GoalService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        GoalCommands::Add {
            goal,
            target,
            saved,
        } => {
            let goal = parse_goal_name(&goal)?;
            let target = parse_amount(&target)?;
            let saved = parse_amount(&saved)?;

            let created = service.add(&goal, target, saved)?;
            println!(
                "Added financial goal {} (#{}): {} of {}",
                created.goal,
                created.id,
                saved.format_with_symbol(symbol),
                target.format_with_symbol(symbol)
            );
        }
        GoalCommands::List { achieved } => {
            let goals = if achieved {
                service.achieved()?
            } else {
                service.list()?
            };
            println!("{}", format_goal_list(&goals, symbol));
        }
        GoalCommands::Update { goal, saved } => {
            let goal = existing_goal(&service, &goal)?;
            let saved = parse_amount(&saved)?;

            let changed = service.update_saved(&goal, saved)?;
            println!(
                "Saved amount for '{}' set to {} ({} goal(s) updated)",
                goal,
                saved.format_with_symbol(symbol),
                changed
            );
        }
        GoalCommands::Delete { goal } => {
            let goal = existing_goal(&service, &goal)?;
            let removed = service.delete(&goal)?;
            println!("Deleted financial goal '{}' ({} removed)", goal, removed);
        }
    }

    Ok(())
}

fn existing_goal(service: &GoalService, input: &str) -> TrackerResult<String> {
    let goal = parse_goal_name(input)?;
    if service.find(&goal)?.is_none() {
        return Err(TrackerError::no_match(EntityKind::FinancialGoal.label(), goal));
    }
    Ok(goal)
}

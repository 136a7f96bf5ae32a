//! Summary and history commands

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::reports::BudgetSummary;
use crate::storage::Storage;

/// Print the budget summary, as text or JSON
pub fn handle_summary_command(storage: &Storage, settings: &Settings, json: bool) -> TrackerResult<()> {
    let summary = BudgetSummary::generate(storage)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.format_terminal(&settings.currency_symbol));
    }

    Ok(())
}

/// Print the most recent audit log entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> TrackerResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}

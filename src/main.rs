use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{
    handle_budget_command, handle_expense_command, handle_goal_command, handle_history_command,
    handle_income_command, handle_summary_command, run_menu, BudgetCommands, ExpenseCommands,
    GoalCommands, IncomeCommands,
};
use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
use budget_tracker::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track expenses, income, budgets and savings goals",
    long_about = "A terminal personal finance tracker. Run without a subcommand \
                  for the interactive menu, or use the subcommands for scripting."
)]
struct Cli {
    /// Directory holding settings, data and the audit log
    #[arg(long, global = true, env = "BUDGET_TRACKER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu
    Menu,

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Income management commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Financial goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Show the budget summary
    Summary {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Create the data store (with example data unless disabled in settings)
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new(),
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing budget tracker at: {}", paths.base_dir().display());
            let created = initialize_storage(&paths, settings.seed_demo_data)?;
            settings.save(&paths)?;
            if !created {
                println!("Existing data found; nothing was changed.");
            } else if settings.seed_demo_data {
                println!("Created the store with example expenses, income, budgets and goals.");
            } else {
                println!("Created an empty store.");
            }
            return Ok(());
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Seed demo data:  {}", settings.seed_demo_data);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            return Ok(());
        }
        _ => {}
    }

    initialize_storage(&paths, settings.seed_demo_data)?;
    let mut storage = Storage::new(paths)?.with_audit(settings.audit_enabled);
    storage.load_all()?;

    let result = match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd),
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &settings, cmd),
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd),
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, &settings, cmd),
        Some(Commands::Summary { json }) => handle_summary_command(&storage, &settings, json),
        Some(Commands::History { count }) => handle_history_command(&storage, count),
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            run_menu(&storage, &settings, stdin.lock(), io::stdout().lock())
        }
        Some(Commands::Init) | Some(Commands::Config) => Ok(()),
    };

    for warning in storage.take_warnings() {
        eprintln!("Warning: {}", warning);
    }
    result?;

    Ok(())
}

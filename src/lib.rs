//! Budget Tracker - terminal personal finance record-keeper
//!
//! Tracks expenses, income, per-category budgets and savings goals, and
//! produces a summary comparing spending against budget.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: the `TrackerError` type
//! - `models`: expenses, income, budgets, goals and amounts
//! - `validation`: parsing of user-entered categories, amounts and dates
//! - `storage`: JSON table files keyed by category text
//! - `audit`: append-only log of every change
//! - `services`: business rules on top of storage
//! - `reports`: the budget summary
//! - `display`: table rendering
//! - `cli`: scripted subcommands and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use budget_tracker::reports::BudgetSummary;
//! use budget_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new();
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! println!("{}", BudgetSummary::generate(&storage)?.format_terminal("$"));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod validation;

pub use error::{TrackerError, TrackerResult};

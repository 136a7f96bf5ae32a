//! Storage layer for the budget tracker
//!
//! Each record kind lives in its own JSON table file with atomic writes and
//! an in-memory index from business key to row ids.

pub mod budgets;
pub mod expenses;
pub mod file_io;
pub mod goals;
pub mod income;
pub mod init;
pub mod table;

pub use budgets::BudgetRepository;
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use income::IncomeRepository;
pub use init::initialize_storage;
pub use table::{RowChange, Table, TableData};

use std::sync::Mutex;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Record;

/// Store handle passed to every service operation
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    pub income: IncomeRepository,
    pub budgets: BudgetRepository,
    pub goals: GoalRepository,
    audit: AuditLogger,
    audit_enabled: bool,
    /// Audit failures that happened after their change was committed
    warnings: Mutex<Vec<String>>,
}

impl Storage {
    /// Create a new Storage instance; call `load_all` before use
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            income: IncomeRepository::new(paths.income_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            goals: GoalRepository::new(paths.goals_file()),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            warnings: Mutex::new(Vec::new()),
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TrackerError> {
        self.expenses.load()?;
        self.income.load()?;
        self.budgets.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), TrackerError> {
        self.expenses.save()?;
        self.income.save()?;
        self.budgets.save()?;
        self.goals.save()?;
        Ok(())
    }

    /// Check if any table has been written yet
    pub fn is_initialized(&self) -> bool {
        self.paths.has_store()
    }

    /// Drain the warnings collected since the last call
    pub fn take_warnings(&self) -> Vec<String> {
        match self.warnings.lock() {
            Ok(mut warnings) => std::mem::take(&mut *warnings),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Append entries for a change that is already on disk
    ///
    /// A failed append does not undo the change; it is kept as a warning for
    /// the caller to report instead.
    fn record_audit(&self, entries: &[AuditEntry]) {
        if !self.audit_enabled {
            return;
        }
        if let Err(err) = self.audit.log_all(entries) {
            let message = format!("change saved but not written to the audit log: {}", err);
            match self.warnings.lock() {
                Ok(mut warnings) => warnings.push(message),
                Err(poisoned) => poisoned.into_inner().push(message),
            }
        }
    }

    pub fn log_create<R: Record>(&self, row: &R) {
        self.record_audit(&[AuditEntry::create(R::KIND, row.id(), row.key(), row)]);
    }

    /// Log one entry per updated row
    pub fn log_updates<R: Record>(&self, changes: &[RowChange<R>]) {
        let entries: Vec<_> = changes
            .iter()
            .map(|change| {
                AuditEntry::update(
                    R::KIND,
                    change.after.id(),
                    change.after.key(),
                    &change.before,
                    &change.after,
                    Some(format!(
                        "amount: {} -> {}",
                        change.before.amount(),
                        change.after.amount()
                    )),
                )
            })
            .collect();
        self.record_audit(&entries);
    }

    /// Log one entry per deleted row
    pub fn log_deletes<R: Record>(&self, rows: &[R]) {
        let entries: Vec<_> = rows
            .iter()
            .map(|row| AuditEntry::delete(R::KIND, row.id(), row.key(), row))
            .collect();
        self.record_audit(&entries);
    }
}

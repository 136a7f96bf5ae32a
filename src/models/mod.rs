//! Core data models for the budget tracker
//!
//! Four record kinds are tracked: expenses, income, per-category budgets and
//! savings goals. Each is keyed for business purposes by its category (or
//! goal) text; the numeric id is only a row identity.

pub mod amount;
pub mod budget;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;

pub use amount::{Amount, AmountParseError};
pub use budget::Budget;
pub use expense::Expense;
pub use goal::FinancialGoal;
pub use ids::RecordId;
pub use income::Income;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The four kinds of stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Expense,
    Income,
    Budget,
    FinancialGoal,
}

impl EntityKind {
    /// Lowercase label used in messages ("no expense found ...")
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Expense => "expense",
            EntityKind::Income => "income",
            EntityKind::Budget => "budget",
            EntityKind::FinancialGoal => "financial goal",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Expense => write!(f, "Expense"),
            EntityKind::Income => write!(f, "Income"),
            EntityKind::Budget => write!(f, "Budget"),
            EntityKind::FinancialGoal => write!(f, "FinancialGoal"),
        }
    }
}

/// A row that can live in a keyed table
pub trait Record: Clone + Serialize + DeserializeOwned {
    const KIND: EntityKind;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    /// The business key: category text, or goal text for goals
    fn key(&self) -> &str;

    /// The amount that update operations target
    fn amount(&self) -> Amount;

    /// Overwrite the amount returned by `amount`
    fn set_amount(&mut self, amount: Amount);
}

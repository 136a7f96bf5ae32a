//! Expense model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Amount, EntityKind, Record, RecordId};

/// An expense due in a category
///
/// The category is unique across all expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub id: RecordId,
    pub category: String,
    pub amount: Amount,
    /// Persisted as ISO-8601 `YYYY-MM-DD`
    pub due_date: NaiveDate,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: Amount, due_date: NaiveDate) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            category: category.into(),
            amount,
            due_date,
        }
    }
}

impl Record for Expense {
    const KIND: EntityKind = EntityKind::Expense;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn key(&self) -> &str {
        &self.category
    }

    fn amount(&self) -> Amount {
        self.amount
    }

    fn set_amount(&mut self, amount: Amount) {
        self.amount = amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_is_unassigned() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let expense = Expense::new("Groceries", Amount::new(50.0), date);

        assert!(!expense.id().is_assigned());
        assert_eq!(expense.key(), "Groceries");
    }

    #[test]
    fn test_due_date_serializes_as_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let expense = Expense::new("Groceries", Amount::new(50.0), date);

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["due_date"], "2024-12-01");
        assert_eq!(json["amount"], 50.0);
    }
}

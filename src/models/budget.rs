//! Budget model
//!
//! A spending limit for a category. Budgets are linked to expenses only by
//! sharing the same category text.

use serde::{Deserialize, Serialize};

use super::{Amount, EntityKind, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub id: RecordId,
    pub category: String,
    pub budget_amount: Amount,
}

impl Budget {
    pub fn new(category: impl Into<String>, budget_amount: Amount) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            category: category.into(),
            budget_amount,
        }
    }

    /// True when `spent` strictly exceeds this budget
    pub fn is_exceeded_by(&self, spent: Amount) -> bool {
        spent > self.budget_amount
    }
}

impl Record for Budget {
    const KIND: EntityKind = EntityKind::Budget;

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
        self.budget_amount
    }

    fn set_amount(&mut self, amount: Amount) {
        self.budget_amount = amount;
    }
}

//! Income model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Amount, EntityKind, Record, RecordId};

/// A source of income, unique by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    #[serde(default)]
    pub id: RecordId,
    pub category: String,
    pub amount: Amount,
    pub pay_date: NaiveDate,
}

impl Income {
    pub fn new(category: impl Into<String>, amount: Amount, pay_date: NaiveDate) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            category: category.into(),
            amount,
            pay_date,
        }
    }
}

impl Record for Income {
    const KIND: EntityKind = EntityKind::Income;

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

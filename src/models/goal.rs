//! Financial goal model
//!
//! A named savings target. Goal text is not unique; operations keyed by goal
//! text apply to every goal sharing it.

use serde::{Deserialize, Serialize};

use super::{Amount, EntityKind, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    #[serde(default)]
    pub id: RecordId,
    pub goal: String,
    pub target_amount: Amount,
    pub saved_amount: Amount,
}

impl FinancialGoal {
    pub fn new(goal: impl Into<String>, target_amount: Amount, saved_amount: Amount) -> Self {
        Self {
            id: RecordId::UNASSIGNED,
            goal: goal.into(),
            target_amount,
            saved_amount,
        }
    }

    /// A goal is achieved once the saved amount reaches the target
    pub fn is_achieved(&self) -> bool {
        self.saved_amount >= self.target_amount
    }

    /// Amount still to save, never negative
    pub fn remaining(&self) -> Amount {
        if self.is_achieved() {
            Amount::zero()
        } else {
            self.target_amount - self.saved_amount
        }
    }

    /// Progress towards the target as a percentage, capped at 100
    pub fn progress_percent(&self) -> f64 {
        if self.is_achieved() {
            return 100.0;
        }
        if !self.target_amount.is_positive() {
            return 0.0;
        }
        (self.saved_amount.value() / self.target_amount.value() * 100.0).max(0.0)
    }
}

impl Record for FinancialGoal {
    const KIND: EntityKind = EntityKind::FinancialGoal;

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn key(&self) -> &str {
        &self.goal
    }

    fn amount(&self) -> Amount {
        self.saved_amount
    }

    /// Updates overwrite the saved amount; the target is fixed at creation
    fn set_amount(&mut self, amount: Amount) {
        self.saved_amount = amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_achieved_at_exact_target() {
        let goal = FinancialGoal::new("Vacation", Amount::new(5000.0), Amount::new(5000.0));
        assert!(goal.is_achieved());
        assert_eq!(goal.remaining(), Amount::zero());
    }

    #[test]
    fn test_not_achieved_one_cent_short() {
        let goal = FinancialGoal::new("Vacation", Amount::new(5000.0), Amount::new(4999.99));
        assert!(!goal.is_achieved());
    }

    #[test]
    fn test_progress_percent() {
        let goal = FinancialGoal::new("New laptop", Amount::new(2000.0), Amount::new(800.0));
        assert!((goal.progress_percent() - 40.0).abs() < 1e-9);
        assert!((goal.remaining().value() - 1200.0).abs() < 1e-9);

        let overshoot = FinancialGoal::new("Bike", Amount::new(100.0), Amount::new(250.0));
        assert_eq!(overshoot.progress_percent(), 100.0);

        let zero_target = FinancialGoal::new("Nothing", Amount::zero(), Amount::new(-1.0));
        assert_eq!(zero_target.progress_percent(), 0.0);
    }

    #[test]
    fn test_set_amount_updates_saved() {
        let mut goal = FinancialGoal::new("Buy a car", Amount::new(20000.0), Amount::new(5000.0));
        goal.set_amount(Amount::new(6000.0));
        assert_eq!(goal.saved_amount.value(), 6000.0);
        assert_eq!(goal.target_amount.value(), 20000.0);
    }
}

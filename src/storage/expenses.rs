//! Expense repository
//!
//! Expenses persist to `expenses.json`; the category is the business key.

use crate::error::TrackerError;
use crate::models::{Amount, Expense};

use super::table::Table;

pub type ExpenseRepository = Table<Expense>;

impl Table<Expense> {
    /// Sum of every expense amount (zero when empty)
    pub fn total_amount(&self) -> Result<Amount, TrackerError> {
        Ok(self.list_all()?.iter().map(|e| e.amount).sum())
    }

    /// Spend summed per category, in order of first appearance
    pub fn spent_by_category(&self) -> Result<Vec<(String, Amount)>, TrackerError> {
        let mut totals: Vec<(String, Amount)> = Vec::new();
        for expense in self.list_all()? {
            match totals.iter_mut().find(|(c, _)| *c == expense.category) {
                Some((_, spent)) => *spent += expense.amount,
                None => totals.push((expense.category, expense.amount)),
            }
        }
        Ok(totals)
    }
}

//! Interactive nested menu
//!
//! Runs over any `BufRead`/`Write` pair. Operation failures are reported and
//! the menu carries on; closing the input ends the session.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::{format_expense_list, format_goal_list, format_income_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::Amount;
use crate::reports::BudgetSummary;
use crate::services::{BudgetService, BudgetUpdate, ExpenseService, GoalService, IncomeService};
use crate::storage::Storage;

use super::prompt::Prompter;

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
const CHOICE_PROMPT: &str = "Enter your choice: ";

/// Whether a submenu should keep running
enum Flow {
    Stay,
    Back,
}

pub struct Menu<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    prompter: Prompter<R, W>,
}

/// Run the menu on the given streams until the user quits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    storage: &Storage,
    settings: &Settings,
    input: R,
    output: W,
) -> TrackerResult<()> {
    Menu::new(storage, settings, Prompter::new(input, output)).run()
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, prompter: Prompter<R, W>) -> Self {
        Self {
            storage,
            settings,
            prompter,
        }
    }

    pub fn run(&mut self) -> TrackerResult<()> {
        match self.main_menu() {
            Err(TrackerError::EndOfInput) => Ok(()),
            other => other,
        }
    }

    fn money(&self, amount: Amount) -> String {
        amount.format_with_symbol(&self.settings.currency_symbol)
    }

    /// Report a failed operation and continue; end of input still propagates
    fn attempt(&mut self, operation: &str, result: TrackerResult<()>) -> TrackerResult<()> {
        for warning in self.storage.take_warnings() {
            self.prompter.say(format!("Warning: {}", warning))?;
        }
        match result {
            Err(TrackerError::EndOfInput) => Err(TrackerError::EndOfInput),
            Err(err) => self.prompter.say(format!("{} failed: {}", operation, err)),
            Ok(()) => Ok(()),
        }
    }

    fn main_menu(&mut self) -> TrackerResult<()> {
        loop {
            self.prompter.say("\nExpense and Budget Tracker")?;
            self.prompter.say("1. Expense Options")?;
            self.prompter.say("2. Income Options")?;
            self.prompter.say("3. Budget Options")?;
            self.prompter.say("4. Financial Goals Options")?;
            self.prompter.say("5. Budget Summary")?;
            self.prompter.say("6. Quit")?;

            match self.prompter.read_line(CHOICE_PROMPT)?.as_str() {
                "1" => self.submenu(Self::expense_menu)?,
                "2" => self.submenu(Self::income_menu)?,
                "3" => self.submenu(Self::budget_menu)?,
                "4" => self.submenu(Self::goals_menu)?,
                "5" => {
                    let result = self.show_summary();
                    self.attempt("Budget summary", result)?;
                }
                "6" => {
                    self.prompter.say("Goodbye!")?;
                    return Ok(());
                }
                _ => self.prompter.say(INVALID_CHOICE)?,
            }
        }
    }

    fn submenu(&mut self, menu: fn(&mut Self) -> TrackerResult<Flow>) -> TrackerResult<()> {
        while let Flow::Stay = menu(self)? {}
        Ok(())
    }

    fn show_summary(&mut self) -> TrackerResult<()> {
        let summary = BudgetSummary::generate(self.storage)?;
        self.prompter.say("")?;
        self.prompter
            .say(summary.format_terminal(&self.settings.currency_symbol).trim_end())
    }

    // Expenses

    fn expense_menu(&mut self) -> TrackerResult<Flow> {
        self.prompter.say("\nExpense Menu")?;
        self.prompter.say("1. Add expense")?;
        self.prompter.say("2. View expenses")?;
        self.prompter.say("3. View expenses by category")?;
        self.prompter.say("4. Update expense")?;
        self.prompter.say("5. Delete expense")?;
        self.prompter.say("6. Total expenses")?;
        self.prompter.say("7. Back to Main Menu")?;

        let (operation, result) = match self.prompter.read_line(CHOICE_PROMPT)?.as_str() {
            "1" => ("Add expense", self.add_expense()),
            "2" => ("View expenses", self.view_expenses()),
            "3" => ("View expenses by category", self.view_expenses_by_category()),
            "4" => ("Update expense", self.update_expense()),
            "5" => ("Delete expense", self.delete_expense()),
            "6" => ("Total expenses", self.total_expenses()),
            "7" => return Ok(Flow::Back),
            _ => {
                self.prompter.say(INVALID_CHOICE)?;
                return Ok(Flow::Stay);
            }
        };
        self.attempt(operation, result)?;
        Ok(Flow::Stay)
    }

    fn add_expense(&mut self) -> TrackerResult<()> {
        let category = self.prompter.ask_category("Enter an expense category: ")?;
        let amount = self.prompter.ask_amount("Enter an expense amount: ")?;
        let due_date = self.prompter.ask_date("Enter due date (YYYY-MM-DD): ")?;

        ExpenseService::new(self.storage).add(&category, amount, due_date)?;
        self.prompter.say("Expense added successfully!")
    }

    fn view_expenses(&mut self) -> TrackerResult<()> {
        let expenses = ExpenseService::new(self.storage).list()?;
        self.prompter.say("\nExpenses:")?;
        self.prompter
            .say(format_expense_list(&expenses, &self.settings.currency_symbol))
    }

    fn choose_expense_category(&mut self) -> TrackerResult<Option<String>> {
        let categories = ExpenseService::new(self.storage).categories()?;
        self.prompter.choose("category", &categories)
    }

    fn view_expenses_by_category(&mut self) -> TrackerResult<()> {
        let Some(category) = self.choose_expense_category()? else {
            return Ok(());
        };
        let expenses = ExpenseService::new(self.storage).list_by_category(&category)?;
        self.prompter
            .say(format!("\nExpenses in category '{}':", category))?;
        self.prompter
            .say(format_expense_list(&expenses, &self.settings.currency_symbol))
    }

    fn update_expense(&mut self) -> TrackerResult<()> {
        self.prompter.say("\n--- Update An Expense Amount ---")?;
        let Some(category) = self.choose_expense_category()? else {
            return Ok(());
        };
        let amount = self.prompter.ask_amount("Enter a new expense amount: ")?;

        ExpenseService::new(self.storage).update_amount(&category, amount)?;
        self.prompter.say(format!(
            "Expense updated successfully for category '{}'.",
            category
        ))
    }

    fn delete_expense(&mut self) -> TrackerResult<()> {
        self.prompter.say("\n--- Delete An Expense ---")?;
        let Some(category) = self.choose_expense_category()? else {
            return Ok(());
        };

        let deletion = ExpenseService::new(self.storage).delete(&category)?;
        if deletion.budgets_removed > 0 {
            self.prompter.say(format!(
                "Expense and corresponding budget deleted successfully for category '{}'.",
                category
            ))
        } else {
            self.prompter.say(format!(
                "Expense deleted successfully for category '{}'.",
                category
            ))
        }
    }

    fn total_expenses(&mut self) -> TrackerResult<()> {
        let total = ExpenseService::new(self.storage).total()?;
        let line = format!("Total Expenses: {}", self.money(total));
        self.prompter.say(line)
    }

    // Income

    fn income_menu(&mut self) -> TrackerResult<Flow> {
        self.prompter.say("\nIncome Menu")?;
        self.prompter.say("1. Add income")?;
        self.prompter.say("2. View income")?;
        self.prompter.say("3. View income by category")?;
        self.prompter.say("4. Update income")?;
        self.prompter.say("5. Delete income")?;
        self.prompter.say("6. Total income")?;
        self.prompter.say("7. Back to Main Menu")?;

        let (operation, result) = match self.prompter.read_line(CHOICE_PROMPT)?.as_str() {
            "1" => ("Add income", self.add_income()),
            "2" => ("View income", self.view_income()),
            "3" => ("View income by category", self.view_income_by_category()),
            "4" => ("Update income", self.update_income()),
            "5" => ("Delete income", self.delete_income()),
            "6" => ("Total income", self.total_income()),
            "7" => return Ok(Flow::Back),
            _ => {
                self.prompter.say(INVALID_CHOICE)?;
                return Ok(Flow::Stay);
            }
        };
        self.attempt(operation, result)?;
        Ok(Flow::Stay)
    }

    fn add_income(&mut self) -> TrackerResult<()> {
        let category = self.prompter.ask_category("Enter an income category: ")?;
        let amount = self.prompter.ask_amount("Enter an income amount: ")?;
        let pay_date = self.prompter.ask_date("Enter pay date (YYYY-MM-DD): ")?;

        IncomeService::new(self.storage).add(&category, amount, pay_date)?;
        self.prompter.say("Income added successfully!")
    }

    fn view_income(&mut self) -> TrackerResult<()> {
        let income = IncomeService::new(self.storage).list()?;
        self.prompter.say("\nIncome:")?;
        self.prompter
            .say(format_income_list(&income, &self.settings.currency_symbol))
    }

    fn choose_income_category(&mut self) -> TrackerResult<Option<String>> {
        let categories = IncomeService::new(self.storage).categories()?;
        self.prompter.choose("category", &categories)
    }

    fn view_income_by_category(&mut self) -> TrackerResult<()> {
        let Some(category) = self.choose_income_category()? else {
            return Ok(());
        };
        let income = IncomeService::new(self.storage).list_by_category(&category)?;
        self.prompter
            .say(format!("\nIncome in category '{}':", category))?;
        self.prompter
            .say(format_income_list(&income, &self.settings.currency_symbol))
    }

    fn update_income(&mut self) -> TrackerResult<()> {
        self.prompter.say("\n--- Update An Income Amount ---")?;
        let Some(category) = self.choose_income_category()? else {
            return Ok(());
        };
        let amount = self.prompter.ask_amount("Enter a new income amount: ")?;

        IncomeService::new(self.storage).update_amount(&category, amount)?;
        self.prompter.say(format!(
            "Income updated successfully for category '{}'.",
            category
        ))
    }

    fn delete_income(&mut self) -> TrackerResult<()> {
        self.prompter.say("\n--- Delete An Income ---")?;
        let Some(category) = self.choose_income_category()? else {
            return Ok(());
        };

        IncomeService::new(self.storage).delete(&category)?;
        self.prompter.say(format!(
            "Income deleted successfully for category '{}'.",
            category
        ))
    }

    fn total_income(&mut self) -> TrackerResult<()> {
        let total = IncomeService::new(self.storage).total()?;
        let line = format!("Total Income: {}", self.money(total));
        self.prompter.say(line)
    }

    // Budgets

    fn budget_menu(&mut self) -> TrackerResult<Flow> {
        self.prompter.say("\nBudget Menu")?;
        self.prompter.say("1. Set budget for a category")?;
        self.prompter.say("2. View budget for a category")?;
        self.prompter.say("3. Back to Main Menu")?;

        let (operation, result) = match self.prompter.read_line(CHOICE_PROMPT)?.as_str() {
            "1" => ("Set budget", self.set_budget()),
            "2" => ("View budget", self.view_budget()),
            "3" => return Ok(Flow::Back),
            _ => {
                self.prompter.say(INVALID_CHOICE)?;
                return Ok(Flow::Stay);
            }
        };
        self.attempt(operation, result)?;
        Ok(Flow::Stay)
    }

    fn set_budget(&mut self) -> TrackerResult<()> {
        self.prompter.say("\n--- Set A Budget Amount ---")?;
        let Some(category) = self.choose_expense_category()? else {
            return Ok(());
        };
        let amount = self.prompter.ask_amount("Enter budget amount: ")?;

        let message = match BudgetService::new(self.storage).set(&category, amount)? {
            BudgetUpdate::Created(_) => {
                format!("Budget for category '{}' set successfully!", category)
            }
            BudgetUpdate::Updated(_) => {
                format!("Budget for category '{}' updated successfully!", category)
            }
        };
        self.prompter.say(message)
    }

    fn view_budget(&mut self) -> TrackerResult<()> {
        let Some(category) = self.choose_expense_category()? else {
            return Ok(());
        };

        let line = match BudgetService::new(self.storage).get(&category)? {
            Some(budget) => format!(
                "Budget for {}: {}",
                category,
                self.money(budget.budget_amount)
            ),
            None => "No budget found for this category.".to_string(),
        };
        self.prompter.say(line)
    }

    // Financial goals

    fn goals_menu(&mut self) -> TrackerResult<Flow> {
        self.prompter.say("\nFinancial Goals Menu")?;
        self.prompter.say("1. Set financial goals")?;
        self.prompter.say("2. View progress towards financial goals")?;
        self.prompter.say("3. Update a financial goal")?;
        self.prompter.say("4. Delete a financial goal")?;
        self.prompter.say("5. Back to Main Menu")?;

        let (operation, result) = match self.prompter.read_line(CHOICE_PROMPT)?.as_str() {
            "1" => ("Set financial goal", self.set_goal()),
            "2" => ("View financial goals", self.view_goals()),
            "3" => ("Update financial goal", self.update_goal()),
            "4" => ("Delete financial goal", self.delete_goal()),
            "5" => return Ok(Flow::Back),
            _ => {
                self.prompter.say(INVALID_CHOICE)?;
                return Ok(Flow::Stay);
            }
        };
        self.attempt(operation, result)?;
        Ok(Flow::Stay)
    }

    fn set_goal(&mut self) -> TrackerResult<()> {
        let goal = self.prompter.ask_goal("Enter a financial goal: ")?;
        let target = self.prompter.ask_amount("Enter target amount: ")?;
        let saved = self.prompter.ask_amount("Enter saved amount: ")?;

        GoalService::new(self.storage).add(&goal, target, saved)?;
        self.prompter.say("Financial goal set successfully!")
    }

    fn view_goals(&mut self) -> TrackerResult<()> {
        let goals = GoalService::new(self.storage).list()?;
        self.prompter.say("\nFinancial Goals:")?;
        self.prompter
            .say(format_goal_list(&goals, &self.settings.currency_symbol))
    }

    fn choose_goal(&mut self) -> TrackerResult<Option<String>> {
        let names = GoalService::new(self.storage).names()?;
        self.prompter.choose("financial goal", &names)
    }

    fn update_goal(&mut self) -> TrackerResult<()> {
        self.prompter
            .say("\n--- Update Financial Goal Saved Amount ---")?;
        let Some(goal) = self.choose_goal()? else {
            return Ok(());
        };

        let service = GoalService::new(self.storage);
        if let Some(current) = service.find(&goal)? {
            let line = format!(
                "Current saved amount for '{}': {}",
                goal,
                self.money(current.saved_amount)
            );
            self.prompter.say(line)?;
        }
        let saved = self.prompter.ask_amount("Enter a new saved amount: ")?;

        service.update_saved(&goal, saved)?;
        self.prompter.say(format!(
            "Saved amount for financial goal '{}' updated successfully!",
            goal
        ))
    }

    fn delete_goal(&mut self) -> TrackerResult<()> {
        self.prompter.say("\n--- Delete Financial Goal ---")?;
        let Some(goal) = self.choose_goal()? else {
            return Ok(());
        };

        GoalService::new(self.storage).delete(&goal)?;
        self.prompter
            .say(format!("Financial goal '{}' deleted successfully!", goal))
    }
}

//! The application state container.
//!
//! [ExpenseState] owns the expense list and every derived summary. Each
//! transition recomputes the affected summaries synchronously before it
//! returns, so readers can never observe derived state that disagrees with
//! the expense list, budget, or time frame. Recomputation is total, never
//! incremental.

use serde::Serialize;
use time::Date;

use crate::{
    expense::{Expense, ExpenseId, NewExpense},
    summary::{CategorySummary, SummaryData, category_summaries},
    window::TimeFrame,
};

/// The budget used until the user sets their own.
pub const DEFAULT_BUDGET: f64 = 1000.0;

/// The expense list, budget, active time frame, and their derived summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseState {
    /// Every recorded expense, in insertion order.
    pub expenses: Vec<Expense>,
    /// The budget ceiling shared by all four time frames.
    pub budget: f64,
    /// The time frame used for category summaries.
    pub time_frame: TimeFrame,
    /// Budget usage for all four time frames.
    pub summary_data: SummaryData,
    /// Per-category breakdown for the active time frame.
    pub category_summaries: Vec<CategorySummary>,
}

impl ExpenseState {
    /// An empty state with the default budget and time frame, with summaries
    /// computed for `today`.
    pub fn new(today: Date) -> Self {
        Self {
            expenses: Vec::new(),
            budget: DEFAULT_BUDGET,
            time_frame: TimeFrame::default_frame(),
            summary_data: SummaryData::calculate(&[], DEFAULT_BUDGET, today),
            category_summaries: category_summaries(&[], TimeFrame::default_frame(), today),
        }
    }

    /// Append a newly created expense, assigning it a fresh unique id.
    ///
    /// Recomputes the budget summaries for all four frames and the category
    /// summaries for the active frame. Returns the assigned id.
    pub fn add(&mut self, new_expense: NewExpense, today: Date) -> ExpenseId {
        let id = ExpenseId::generate();
        self.expenses.push(new_expense.into_expense(id.clone()));
        self.recompute_budget_summaries(today);
        self.recompute_category_summaries(today);

        id
    }

    /// Remove the expense with `id`, then recompute both summary sets.
    ///
    /// Removing an id that is not in the list is a no-op, not an error; the
    /// state is left exactly as it was.
    pub fn remove(&mut self, id: &ExpenseId, today: Date) {
        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != *id);

        if self.expenses.len() == before {
            return;
        }

        self.recompute_budget_summaries(today);
        self.recompute_category_summaries(today);
    }

    /// Replace the budget ceiling and recompute the budget summaries.
    ///
    /// Category summaries are untouched: their percentages are shares of the
    /// total spend and do not depend on the budget.
    pub fn set_budget(&mut self, budget: f64, today: Date) {
        self.budget = budget;
        self.recompute_budget_summaries(today);
    }

    /// Switch the active time frame and recompute the category summaries.
    ///
    /// The budget summaries already cover all four frames, so they are not
    /// recomputed here.
    pub fn set_time_frame(&mut self, time_frame: TimeFrame, today: Date) {
        self.time_frame = time_frame;
        self.recompute_category_summaries(today);
    }

    /// Replace the whole expense list after a bulk reload from the store,
    /// then recompute both summary sets.
    pub fn replace_all(&mut self, expenses: Vec<Expense>, today: Date) {
        self.expenses = expenses;
        self.recompute_budget_summaries(today);
        self.recompute_category_summaries(today);
    }

    /// Clear back to the empty default state, e.g. on sign-out.
    pub fn reset(&mut self, today: Date) {
        *self = Self::new(today);
    }

    fn recompute_budget_summaries(&mut self, today: Date) {
        self.summary_data = SummaryData::calculate(&self.expenses, self.budget, today);
    }

    fn recompute_category_summaries(&mut self, today: Date) {
        self.category_summaries = category_summaries(&self.expenses, self.time_frame, today);
    }
}

#[cfg(test)]
mod expense_state_tests {
    use time::macros::date;

    use crate::{
        category::Category,
        expense::{ExpenseId, NewExpense},
        window::TimeFrame,
    };

    use super::{DEFAULT_BUDGET, ExpenseState};

    fn new_expense(amount: f64, category: Category, date: time::Date) -> NewExpense {
        NewExpense::new(amount, category, "test", date).expect("Could not create expense")
    }

    #[test]
    fn new_state_is_consistent() {
        let today = date!(2026 - 03 - 18);

        let state = ExpenseState::new(today);

        assert!(state.expenses.is_empty());
        assert_eq!(state.budget, DEFAULT_BUDGET);
        assert_eq!(state.time_frame, TimeFrame::Monthly);
        assert_eq!(state.summary_data.monthly.total, DEFAULT_BUDGET);
        assert_eq!(state.summary_data.monthly.remaining, DEFAULT_BUDGET);
        assert_eq!(state.category_summaries.len(), 6);
    }

    #[test]
    fn add_assigns_id_and_recomputes_summaries() {
        let today = date!(2026 - 03 - 18);
        let mut state = ExpenseState::new(today);

        let id = state.add(new_expense(15.50, Category::Food, today), today);

        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.expenses[0].id, id);
        assert_eq!(state.summary_data.daily.spent, 15.50);
        assert_eq!(state.summary_data.daily.remaining, DEFAULT_BUDGET - 15.50);
        let food = state
            .category_summaries
            .iter()
            .find(|summary| summary.category == Category::Food)
            .expect("food summary missing");
        assert_eq!(food.amount, 15.50);
        assert_eq!(food.count, 1);
    }

    #[test]
    fn remove_recomputes_summaries() {
        let today = date!(2026 - 03 - 18);
        let mut state = ExpenseState::new(today);
        let id = state.add(new_expense(15.50, Category::Food, today), today);
        state.add(new_expense(25.0, Category::Transport, today), today);

        state.remove(&id, today);

        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.summary_data.monthly.spent, 25.0);
        let food = state
            .category_summaries
            .iter()
            .find(|summary| summary.category == Category::Food)
            .expect("food summary missing");
        assert_eq!(food.amount, 0.0);
    }

    #[test]
    fn remove_of_unknown_id_leaves_state_unchanged() {
        let today = date!(2026 - 03 - 18);
        let mut state = ExpenseState::new(today);
        state.add(new_expense(15.50, Category::Food, today), today);
        let before = state.clone();

        state.remove(&ExpenseId::from_string("not-a-real-id"), today);

        assert_eq!(state, before);
    }

    #[test]
    fn set_budget_updates_budget_summaries_only() {
        let today = date!(2026 - 03 - 18);
        let mut state = ExpenseState::new(today);
        state.add(new_expense(50.0, Category::Shopping, today), today);
        let category_summaries_before = state.category_summaries.clone();

        state.set_budget(200.0, today);

        assert_eq!(state.budget, 200.0);
        assert_eq!(state.summary_data.monthly.total, 200.0);
        assert_eq!(state.summary_data.monthly.spent, 50.0);
        assert_eq!(state.summary_data.monthly.percentage, 25.0);
        assert_eq!(state.category_summaries, category_summaries_before);
    }

    #[test]
    fn set_time_frame_updates_category_summaries() {
        let today = date!(2026 - 03 - 18);
        let mut state = ExpenseState::new(today);
        // In the monthly window but before yesterday: outside the daily one.
        state.add(
            new_expense(40.0, Category::Utilities, date!(2026 - 03 - 02)),
            today,
        );
        let summary_data_before = state.summary_data;

        state.set_time_frame(TimeFrame::Daily, today);

        assert_eq!(state.time_frame, TimeFrame::Daily);
        assert_eq!(state.summary_data, summary_data_before);
        let utilities = state
            .category_summaries
            .iter()
            .find(|summary| summary.category == Category::Utilities)
            .expect("utilities summary missing");
        assert_eq!(utilities.amount, 0.0);
    }

    #[test]
    fn replace_all_swaps_the_list_and_recomputes() {
        let today = date!(2026 - 03 - 18);
        let mut state = ExpenseState::new(today);
        state.add(new_expense(15.50, Category::Food, today), today);

        let reloaded = vec![
            new_expense(25.0, Category::Transport, today)
                .into_expense(ExpenseId::from_string("row-1")),
            new_expense(35.0, Category::Utilities, today)
                .into_expense(ExpenseId::from_string("row-2")),
        ];
        state.replace_all(reloaded, today);

        assert_eq!(state.expenses.len(), 2);
        assert_eq!(state.summary_data.monthly.spent, 60.0);
        let food = state
            .category_summaries
            .iter()
            .find(|summary| summary.category == Category::Food)
            .expect("food summary missing");
        assert_eq!(food.amount, 0.0);
    }

    #[test]
    fn reset_restores_the_empty_default_state() {
        let today = date!(2026 - 03 - 18);
        let mut state = ExpenseState::new(today);
        state.add(new_expense(15.50, Category::Food, today), today);
        state.set_budget(50.0, today);
        state.set_time_frame(TimeFrame::Yearly, today);

        state.reset(today);

        assert_eq!(state, ExpenseState::new(today));
    }

    #[test]
    fn summaries_stay_consistent_across_a_mutation_sequence() {
        let today = date!(2026 - 03 - 18);
        let mut state = ExpenseState::new(today);

        let id = state.add(new_expense(10.0, Category::Food, today), today);
        state.add(new_expense(20.0, Category::Food, today), today);
        state.set_budget(25.0, today);
        state.remove(&id, today);

        assert_eq!(state.summary_data.monthly.spent, 20.0);
        assert_eq!(state.summary_data.monthly.remaining, 5.0);
        assert_eq!(state.summary_data.monthly.percentage, 80.0);
        let total: f64 = state
            .category_summaries
            .iter()
            .map(|summary| summary.amount)
            .sum();
        assert_eq!(total, 20.0);
    }
}

//! Budget usage summaries.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    expense::Expense,
    window::{TimeFrame, filter_expenses},
};

/// How much of the budget has been used within one time frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// The budget ceiling.
    pub total: f64,
    /// The sum of in-window expense amounts.
    pub spent: f64,
    /// `total - spent`. Goes negative when the budget is blown.
    pub remaining: f64,
    /// `spent / total` as a percentage, clamped to at most 100 for display.
    ///
    /// Never clamped below zero: overspending reports 100, not more, while
    /// `remaining` carries the (negative) overshoot.
    pub percentage: f64,
}

/// Calculate the budget usage for one time frame.
///
/// This is a total function: an empty expense list or a non-positive budget
/// produce well-defined zero/clamped results rather than an error.
pub fn budget_summary(
    expenses: &[Expense],
    budget: f64,
    time_frame: TimeFrame,
    today: Date,
) -> BudgetSummary {
    let spent: f64 = filter_expenses(expenses, time_frame, today)
        .iter()
        .map(|expense| expense.amount)
        .sum();
    let remaining = budget - spent;
    let percentage = if budget > 0.0 {
        (spent / budget * 100.0).min(100.0)
    } else {
        0.0
    };

    BudgetSummary {
        total: budget,
        spent,
        remaining,
        percentage,
    }
}

/// Budget summaries for all four time frames, kept together so switching
/// the active frame never has to wait on a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    /// Budget usage over the daily window.
    pub daily: BudgetSummary,
    /// Budget usage over the weekly window.
    pub weekly: BudgetSummary,
    /// Budget usage over the monthly window.
    pub monthly: BudgetSummary,
    /// Budget usage over the yearly window.
    pub yearly: BudgetSummary,
}

impl SummaryData {
    /// Calculate budget usage for every time frame at once.
    pub fn calculate(expenses: &[Expense], budget: f64, today: Date) -> Self {
        Self {
            daily: budget_summary(expenses, budget, TimeFrame::Daily, today),
            weekly: budget_summary(expenses, budget, TimeFrame::Weekly, today),
            monthly: budget_summary(expenses, budget, TimeFrame::Monthly, today),
            yearly: budget_summary(expenses, budget, TimeFrame::Yearly, today),
        }
    }

    /// The summary for `time_frame`.
    pub fn for_time_frame(&self, time_frame: TimeFrame) -> BudgetSummary {
        match time_frame {
            TimeFrame::Daily => self.daily,
            TimeFrame::Weekly => self.weekly,
            TimeFrame::Monthly => self.monthly,
            TimeFrame::Yearly => self.yearly,
        }
    }
}

#[cfg(test)]
mod budget_summary_tests {
    use time::{Date, macros::date};

    use crate::{
        category::Category,
        expense::{Expense, ExpenseId},
        window::TimeFrame,
    };

    use super::{SummaryData, budget_summary};

    fn create_test_expense(amount: f64, category: Category, date: Date) -> Expense {
        Expense {
            id: ExpenseId::generate(),
            amount,
            category,
            description: "test".to_owned(),
            date,
        }
    }

    #[test]
    fn single_expense_today() {
        let today = date!(2026 - 03 - 18);
        let expenses = vec![create_test_expense(15.50, Category::Food, today)];

        let summary = budget_summary(&expenses, 100.0, TimeFrame::Daily, today);

        assert_eq!(summary.total, 100.0);
        assert_eq!(summary.spent, 15.50);
        assert_eq!(summary.remaining, 84.50);
        assert_eq!(summary.percentage, 15.5);
    }

    #[test]
    fn empty_list_reports_zero_spend_for_every_frame() {
        let today = date!(2026 - 03 - 18);

        let summary_data = SummaryData::calculate(&[], 1000.0, today);

        for summary in [
            summary_data.daily,
            summary_data.weekly,
            summary_data.monthly,
            summary_data.yearly,
        ] {
            assert_eq!(summary.total, 1000.0);
            assert_eq!(summary.spent, 0.0);
            assert_eq!(summary.remaining, 1000.0);
            assert_eq!(summary.percentage, 0.0);
        }
    }

    #[test]
    fn overspend_clamps_percentage_but_not_remaining() {
        let today = date!(2026 - 03 - 18);
        let expenses: Vec<Expense> = (0..6)
            .map(|_| create_test_expense(5.0, Category::Food, today))
            .collect();

        let summary = budget_summary(&expenses, 20.0, TimeFrame::Daily, today);

        assert_eq!(summary.spent, 30.0);
        assert_eq!(summary.percentage, 100.0);
        assert_eq!(summary.remaining, -10.0);
    }

    #[test]
    fn zero_budget_reports_zero_percentage() {
        let today = date!(2026 - 03 - 18);
        let expenses = vec![create_test_expense(10.0, Category::Other, today)];

        let summary = budget_summary(&expenses, 0.0, TimeFrame::Daily, today);

        assert_eq!(summary.percentage, 0.0);
        assert_eq!(summary.remaining, -10.0);
    }

    #[test]
    fn remaining_is_exactly_budget_minus_spent() {
        let today = date!(2026 - 03 - 18);
        let expenses = vec![
            create_test_expense(12.25, Category::Food, today),
            create_test_expense(37.75, Category::Transport, today),
        ];

        let summary = budget_summary(&expenses, 120.0, TimeFrame::Weekly, today);

        assert_eq!(summary.remaining, 120.0 - summary.spent);
        assert!(summary.percentage >= 0.0 && summary.percentage <= 100.0);
    }

    #[test]
    fn out_of_window_expenses_are_ignored() {
        let today = date!(2026 - 03 - 18);
        let expenses = vec![
            create_test_expense(50.0, Category::Shopping, date!(2026 - 02 - 10)),
            create_test_expense(25.0, Category::Food, today),
        ];

        let summary = budget_summary(&expenses, 100.0, TimeFrame::Monthly, today);

        assert_eq!(summary.spent, 25.0);
    }
}

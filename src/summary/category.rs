//! Per-category spending breakdowns.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    category::{ALL_CATEGORIES, Category},
    expense::Expense,
    window::{TimeFrame, filter_expenses},
};

/// The in-window spending for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The category this summary describes.
    pub category: Category,
    /// The sum of in-window expense amounts for the category.
    pub amount: f64,
    /// The category's share of the in-window total spend, as a percentage.
    /// Zero when nothing was spent at all.
    pub percentage: f64,
    /// How many in-window expenses belong to the category.
    pub count: usize,
}

/// Calculate the spending breakdown per category for one time frame.
///
/// The result always contains all six categories, including those with no
/// matching expenses, sorted by descending amount. Ties keep a stable
/// order, so repeated calls with the same input yield the same output.
pub fn category_summaries(
    expenses: &[Expense],
    time_frame: TimeFrame,
    today: Date,
) -> Vec<CategorySummary> {
    let in_window = filter_expenses(expenses, time_frame, today);
    let total_spent: f64 = in_window.iter().map(|expense| expense.amount).sum();

    let mut summaries: Vec<CategorySummary> = ALL_CATEGORIES
        .into_iter()
        .map(|category| {
            let mut amount = 0.0;
            let mut count = 0;

            for expense in in_window
                .iter()
                .filter(|expense| expense.category == category)
            {
                amount += expense.amount;
                count += 1;
            }

            let percentage = if total_spent > 0.0 {
                amount / total_spent * 100.0
            } else {
                0.0
            };

            CategorySummary {
                category,
                amount,
                percentage,
                count,
            }
        })
        .collect();

    summaries.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    summaries
}

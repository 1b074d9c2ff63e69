//! Rule-based spending optimization tips.

use time::Date;

use crate::{
    category::Category,
    expense::Expense,
    format::format_amount,
    window::{TimeFrame, filter_expenses},
};

use super::category_summaries;

/// A category taking more than this share of spend triggers a tip naming it.
const TOP_CATEGORY_SHARE: f64 = 30.0;

/// Expenses below this amount count as micro-purchases.
const MICRO_PURCHASE_AMOUNT: f64 = 10.0;

/// More than this many micro-purchases triggers the batching tip.
const MICRO_PURCHASE_COUNT: usize = 5;

/// Food taking more than this share of spend triggers the meal-prep tip.
const FOOD_SHARE: f64 = 25.0;

/// Entertainment spend above this absolute amount triggers the
/// cheap-entertainment tip.
const ENTERTAINMENT_SPEND: f64 = 100.0;

/// Generate spending suggestions for the in-window expenses.
///
/// The rules are evaluated in a fixed order and the two generic tips are
/// always appended, so the result holds at least two entries. Deterministic
/// given `today`; no I/O.
pub fn optimization_tips(expenses: &[Expense], time_frame: TimeFrame, today: Date) -> Vec<String> {
    let in_window = filter_expenses(expenses, time_frame, today);
    let summaries = category_summaries(expenses, time_frame, today);

    let mut tips = Vec::new();

    // The summaries are sorted by descending amount, so the first entry is
    // the biggest spending category.
    if let Some(highest) = summaries.first()
        && highest.percentage > TOP_CATEGORY_SHARE
    {
        tips.push(format!(
            "You're spending {:.1}% of your budget on {}. \
            Consider setting a specific budget for this category.",
            highest.percentage, highest.category
        ));
    }

    let micro_purchases: Vec<_> = in_window
        .iter()
        .filter(|expense| expense.amount < MICRO_PURCHASE_AMOUNT)
        .collect();
    if micro_purchases.len() > MICRO_PURCHASE_COUNT {
        let micro_total: f64 = micro_purchases.iter().map(|expense| expense.amount).sum();
        tips.push(format!(
            "You have {} small purchases. These add up to {}. \
            Try batching these purchases to save money.",
            micro_purchases.len(),
            format_amount(micro_total)
        ));
    }

    let food = summaries
        .iter()
        .find(|summary| summary.category == Category::Food);
    if food.is_some_and(|summary| summary.percentage > FOOD_SHARE) {
        tips.push(
            "Your food expenses are quite high. Consider meal prepping or cooking \
            at home more often to save money."
                .to_owned(),
        );
    }

    let entertainment = summaries
        .iter()
        .find(|summary| summary.category == Category::Entertainment);
    if entertainment.is_some_and(|summary| summary.amount > ENTERTAINMENT_SPEND) {
        tips.push(
            "Look for free or low-cost entertainment options like student discounts, \
            community events, or streaming service sharing with friends."
                .to_owned(),
        );
    }

    tips.push("Track your daily expenses consistently for better financial awareness.".to_owned());
    tips.push("Set specific saving goals to stay motivated with your budget.".to_owned());

    tips
}

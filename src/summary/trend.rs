//! Daily spending totals for the current month's trend chart.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{expense::Expense, window::last_day_of_month};

/// The total spend for one day of the current calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// The day of the month, starting at 1.
    pub day: u8,
    /// The sum of expense amounts dated on that day.
    pub amount: f64,
}

/// Calculate the per-day spending totals for today's calendar month.
///
/// Every day of the month is present, zero-filled, ordered by day, so the
/// chart's x-axis never has gaps. Expenses dated outside the current month
/// are ignored regardless of the active time frame.
pub fn monthly_trend(expenses: &[Expense], today: Date) -> Vec<TrendPoint> {
    let days_in_month = last_day_of_month(today.year(), today.month());

    let mut points: Vec<TrendPoint> = (1..=days_in_month)
        .map(|day| TrendPoint { day, amount: 0.0 })
        .collect();

    for expense in expenses {
        if expense.date.year() == today.year() && expense.date.month() == today.month() {
            let index = expense.date.day() as usize - 1;
            points[index].amount += expense.amount;
        }
    }

    points
}

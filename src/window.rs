//! Time frames and the time-window filter used by every summary calculator.
//!
//! The current date is always an explicit parameter so the filter stays a
//! pure function and tests can pin the calendar.

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

use crate::expense::Expense;

/// The aggregation window, anchored to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    /// The previous day through today.
    Daily,
    /// The current week, starting on Sunday.
    Weekly,
    /// The current calendar month.
    Monthly,
    /// The current calendar year.
    Yearly,
}

impl TimeFrame {
    /// The frame shown when the user has not picked one.
    pub fn default_frame() -> Self {
        Self::Monthly
    }

    /// Human readable label, e.g. for chart titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }
}

/// The first in-window day for `time_frame`, anchored at `today`.
pub fn window_start(time_frame: TimeFrame, today: Date) -> Date {
    match time_frame {
        TimeFrame::Daily => today - Duration::days(1),
        TimeFrame::Weekly => {
            today - Duration::days(today.weekday().number_days_from_sunday() as i64)
        }
        TimeFrame::Monthly => today.replace_day(1).expect("invalid month start date"),
        TimeFrame::Yearly => Date::from_calendar_date(today.year(), Month::January, 1)
            .expect("invalid year start date"),
    }
}

/// Whether an expense dated `date` falls inside the window.
///
/// The window-start day itself is included, earlier days are excluded.
/// There is no upper bound, so future-dated expenses always pass.
pub fn is_in_window(date: Date, time_frame: TimeFrame, today: Date) -> bool {
    date >= window_start(time_frame, today)
}

/// Select the expenses that fall inside the window for `time_frame`.
pub fn filter_expenses<'a>(
    expenses: &'a [Expense],
    time_frame: TimeFrame,
    today: Date,
) -> Vec<&'a Expense> {
    let start = window_start(time_frame, today);

    expenses
        .iter()
        .filter(|expense| expense.date >= start)
        .collect()
}

/// The number of days in `month` of `year`.
pub(crate) fn last_day_of_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}


#[cfg(test)]
mod filter_tests {
    use time::{Date, macros::date};

    use crate::{
        category::Category,
        expense::{Expense, ExpenseId},
    };

    use super::{TimeFrame, filter_expenses, is_in_window};

    fn create_test_expense(amount: f64, date: Date) -> Expense {
        Expense {
            id: ExpenseId::generate(),
            amount,
            category: Category::Other,
            description: "test".to_owned(),
            date,
        }
    }

    #[test]
    fn boundary_day_is_included() {
        let today = date!(2026 - 03 - 18);

        // Weekly window starts Sunday 2026-03-15.
        assert!(is_in_window(date!(2026 - 03 - 15), TimeFrame::Weekly, today));
    }

    #[test]
    fn day_before_boundary_is_excluded() {
        let today = date!(2026 - 03 - 18);

        assert!(!is_in_window(
            date!(2026 - 03 - 14),
            TimeFrame::Weekly,
            today
        ));
    }

    #[test]
    fn future_dated_expense_is_included() {
        let today = date!(2026 - 03 - 18);

        assert!(is_in_window(date!(2026 - 04 - 01), TimeFrame::Daily, today));
    }

    #[test]
    fn monthly_filter_drops_last_months_expenses() {
        let today = date!(2026 - 03 - 15);
        let expenses = vec![
            create_test_expense(10.0, date!(2026 - 03 - 01)),
            create_test_expense(20.0, date!(2026 - 02 - 28)),
            create_test_expense(30.0, date!(2026 - 03 - 15)),
        ];

        let in_window = filter_expenses(&expenses, TimeFrame::Monthly, today);

        let amounts: Vec<f64> = in_window.iter().map(|expense| expense.amount).collect();
        assert_eq!(amounts, vec![10.0, 30.0]);
    }

    #[test]
    fn yearly_filter_drops_last_years_expenses() {
        let today = date!(2026 - 01 - 02);
        let expenses = vec![
            create_test_expense(10.0, date!(2025 - 12 - 31)),
            create_test_expense(20.0, date!(2026 - 01 - 01)),
        ];

        let in_window = filter_expenses(&expenses, TimeFrame::Yearly, today);

        assert_eq!(in_window.len(), 1);
        assert_eq!(in_window[0].amount, 20.0);
    }

    #[test]
    fn empty_list_filters_to_empty() {
        let in_window = filter_expenses(&[], TimeFrame::Daily, date!(2026 - 03 - 18));

        assert!(in_window.is_empty());
    }
}

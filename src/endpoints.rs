//! The API endpoint URIs.

/// The route to list and create expenses.
pub const EXPENSES: &str = "/api/expenses";
/// The route to delete an expense.
pub const DELETE_EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to update the budget ceiling.
pub const BUDGET: &str = "/api/budget";
/// The route to switch the active time frame.
pub const TIME_FRAME: &str = "/api/time_frame";
/// The route for the combined summary view state.
pub const SUMMARY: &str = "/api/summary";
/// The route for spending optimization tips.
pub const TIPS: &str = "/api/tips";
/// The route for the current month's daily spending trend.
pub const TREND: &str = "/api/trend";

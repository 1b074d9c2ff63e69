//! Derived summaries: budget usage, per-category breakdowns, optimization
//! tips, and chart trend data.
//!
//! Everything in this module is a pure function of the expense list and an
//! explicit current date; no I/O, no failure modes.

mod budget;
mod category;
mod endpoints;
mod tips;
mod trend;

pub use budget::{BudgetSummary, SummaryData, budget_summary};
pub use category::{CategorySummary, category_summaries};
pub use endpoints::{get_summary_endpoint, get_tips_endpoint, get_trend_endpoint};
pub use tips::optimization_tips;
pub use trend::{TrendPoint, monthly_trend};

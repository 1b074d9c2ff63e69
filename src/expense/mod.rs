//! The expense domain model and its API endpoints.

mod core;
mod create_endpoint;
mod delete_endpoint;
mod list_endpoint;

pub use core::{Expense, ExpenseId, NewExpense};
pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use list_endpoint::list_expenses_endpoint;

//! Defines the endpoint for recording a new expense.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use time::Date;

use crate::{AppState, Error, category::Category, expense::NewExpense};

/// The JSON body for creating an expense.
#[derive(Debug, Deserialize)]
pub struct ExpenseData {
    /// How much money was spent.
    pub amount: f64,
    /// The spending category.
    pub category: Category,
    /// What the money was spent on.
    pub description: String,
    /// The day the expense happened on, as `YYYY-MM-DD`.
    pub date: Date,
}

/// A route handler for recording a new expense.
///
/// Responds with `201 Created` and the recorded expense, or a JSON error
/// for invalid input, a missing user, or a store failure.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    Json(data): Json<ExpenseData>,
) -> Result<impl IntoResponse, Error> {
    let new_expense = NewExpense::new(data.amount, data.category, &data.description, data.date)?;

    let expense = state.service()?.add_expense(new_expense)?;

    Ok((StatusCode::CREATED, Json(expense)))
}

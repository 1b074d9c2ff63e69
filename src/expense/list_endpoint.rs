//! Defines the endpoint for listing the recorded expenses.

use axum::{Json, extract::State, response::IntoResponse};

use crate::{AppState, Error, expense::Expense};

/// A route handler for listing the current user's expenses, newest date
/// first.
pub async fn list_expenses_endpoint(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let service = state.service()?;

    let mut expenses: Vec<Expense> = service.state().expenses.clone();
    expenses.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(Json(expenses))
}

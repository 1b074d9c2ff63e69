//! Defines the endpoint for deleting an expense.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{AppState, Error, expense::ExpenseId};

/// A route handler for deleting an expense.
///
/// Responds with `204 No Content`. Deleting an id that no longer exists
/// also succeeds, so a double-click on a delete button is harmless.
pub async fn delete_expense_endpoint(
    State(state): State<AppState>,
    Path(expense_id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    state
        .service()?
        .remove_expense(&ExpenseId::from_string(expense_id))?;

    Ok(StatusCode::NO_CONTENT)
}

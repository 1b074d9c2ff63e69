//! Endpoints for updating the budget ceiling and the active time frame.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Deserialize;

use crate::{AppState, Error, window::TimeFrame};

/// The JSON body for updating the budget ceiling.
#[derive(Debug, Deserialize)]
pub struct BudgetData {
    /// The new budget ceiling. Must be greater than zero.
    pub budget: f64,
}

/// A route handler for replacing the budget ceiling.
///
/// Responds with the recomputed budget summaries for all four time frames.
/// Category summaries are unaffected, since their percentages are shares of
/// the total spend rather than of the budget.
pub async fn set_budget_endpoint(
    State(state): State<AppState>,
    Json(data): Json<BudgetData>,
) -> Result<impl IntoResponse, Error> {
    let mut service = state.service()?;

    service.set_budget(data.budget)?;

    Ok(Json(service.state().summary_data))
}

/// The JSON body for switching the active time frame.
#[derive(Debug, Deserialize)]
pub struct TimeFrameData {
    /// The time frame to aggregate category summaries over.
    pub time_frame: TimeFrame,
}

/// A route handler for switching the active time frame.
///
/// Responds with the category summaries recomputed for the new frame. The
/// budget summaries already cover all four frames and are untouched.
pub async fn set_time_frame_endpoint(
    State(state): State<AppState>,
    Json(data): Json<TimeFrameData>,
) -> Result<impl IntoResponse, Error> {
    let mut service = state.service()?;

    service.set_time_frame(data.time_frame)?;

    Ok(Json(service.state().category_summaries.clone()))
}

//! Endpoints serving the derived view state: summaries, tips, and trend
//! data.

use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::{
    AppState, Error,
    summary::{CategorySummary, SummaryData},
    window::TimeFrame,
};

/// The combined view state consumed by dashboard-style clients.
///
/// Clients render this as-is; the summaries are always consistent with the
/// expense list because the state container recomputes them inside every
/// mutation.
#[derive(Debug, Serialize)]
pub struct SummaryView {
    /// The budget ceiling.
    pub budget: f64,
    /// The active time frame.
    pub time_frame: TimeFrame,
    /// Budget usage for all four time frames.
    pub summary_data: SummaryData,
    /// Per-category breakdown for the active time frame.
    pub category_summaries: Vec<CategorySummary>,
}

/// A route handler for the combined summary view state.
pub async fn get_summary_endpoint(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let service = state.service()?;
    let expense_state = service.state();

    Ok(Json(SummaryView {
        budget: expense_state.budget,
        time_frame: expense_state.time_frame,
        summary_data: expense_state.summary_data,
        category_summaries: expense_state.category_summaries.clone(),
    }))
}

/// A route handler for spending optimization tips.
pub async fn get_tips_endpoint(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tips = state.service()?.tips()?;

    Ok(Json(tips))
}

/// A route handler for the current month's daily spending trend.
pub async fn get_trend_endpoint(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let trend = state.service()?.trend()?;

    Ok(Json(trend))
}

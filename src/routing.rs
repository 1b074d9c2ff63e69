//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{delete, get, put},
};

use crate::{
    AppState, endpoints,
    expense::{create_expense_endpoint, delete_expense_endpoint, list_expenses_endpoint},
    logging::logging_middleware,
    settings::{set_budget_endpoint, set_time_frame_endpoint},
    summary::{get_summary_endpoint, get_tips_endpoint, get_trend_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::EXPENSES,
            get(list_expenses_endpoint).post(create_expense_endpoint),
        )
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::BUDGET, put(set_budget_endpoint))
        .route(endpoints::TIME_FRAME, put(set_time_frame_endpoint))
        .route(endpoints::SUMMARY, get(get_summary_endpoint))
        .route(endpoints::TIPS, get(get_tips_endpoint))
        .route(endpoints::TREND, get(get_trend_endpoint))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

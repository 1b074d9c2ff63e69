//! Spendwatch is a personal-finance tracker: record expenses, set a budget,
//! and view aggregated summaries, optimization tips, and chart data.
//!
//! This library provides the aggregation engine and a JSON REST API over it.
//! Persistence and identity are collaborator seams; the server binary wires
//! them to an in-memory store.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod category;
mod endpoints;
mod expense;
mod format;
mod identity;
mod logging;
mod routing;
mod service;
mod settings;
mod state;
pub mod stores;
mod summary;
pub mod timezone;
mod window;

pub use app_state::AppState;
pub use category::{ALL_CATEGORIES, Category, ChartColors};
pub use expense::{Expense, ExpenseId, NewExpense};
pub use identity::{AuthEvent, UserId};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use service::ExpenseService;
pub use state::ExpenseState;
pub use summary::{
    BudgetSummary, CategorySummary, SummaryData, TrendPoint, budget_summary, category_summaries,
    monthly_trend, optimization_tips,
};
pub use window::{TimeFrame, filter_expenses, is_in_window, window_start};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A non-positive amount was submitted for an expense or budget.
    ///
    /// Amounts record money spent, so zero and negative values are rejected
    /// before they reach the aggregation engine.
    #[error("amount must be greater than zero, got {0}")]
    InvalidAmount(f64),

    /// An empty string was submitted as an expense description.
    #[error("expense description cannot be empty")]
    EmptyDescription,

    /// A mutation was requested while no user is signed in.
    #[error("no user is signed in")]
    NotSignedIn,

    /// The persistence collaborator failed to return the user's expenses.
    ///
    /// Non-fatal: the in-memory state keeps whatever it held before the
    /// failed call.
    #[error("could not load expenses: {0}")]
    ExpenseRetrieval(String),

    /// The persistence collaborator failed to save a new expense.
    ///
    /// Non-fatal: local state is not mutated on failure.
    #[error("could not save the expense: {0}")]
    ExpenseWrite(String),

    /// The persistence collaborator failed to delete an expense.
    ///
    /// Non-fatal: local state is not mutated on failure.
    #[error("could not delete the expense: {0}")]
    ExpenseDelete(String),

    /// An error occurred while getting the local date from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// Could not acquire the lock on the application state.
    #[error("could not acquire the state lock")]
    StateLock,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Error::InvalidAmount(_) | Error::EmptyDescription => StatusCode::UNPROCESSABLE_ENTITY,
            Error::NotSignedIn => StatusCode::UNAUTHORIZED,
            Error::ExpenseRetrieval(_) | Error::ExpenseWrite(_) | Error::ExpenseDelete(_) => {
                StatusCode::BAD_GATEWAY
            }
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, service::ExpenseService};

/// The state of the REST server.
///
/// The expense service sits behind one mutex: each request performs its
/// store round-trip and state transition as a single critical section, so
/// mutations from overlapping requests cannot interleave or be applied out
/// of order.
#[derive(Clone)]
pub struct AppState {
    /// The expense service shared by all request handlers.
    service: Arc<Mutex<ExpenseService>>,
}

impl AppState {
    /// Create a new [AppState] wrapping `service`.
    pub fn new(service: ExpenseService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Lock the expense service for the duration of one request.
    ///
    /// # Errors
    /// Returns [Error::StateLock] if the lock has been poisoned by a
    /// panicking handler.
    pub fn service(&self) -> Result<MutexGuard<'_, ExpenseService>, Error> {
        self.service
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire state lock: {error}"))
            .map_err(|_| Error::StateLock)
    }
}

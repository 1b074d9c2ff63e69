//! Coordinates the identity collaborator, the expense store, and the state
//! container.
//!
//! [ExpenseService] is the only writer of the state container. Every
//! mutation takes `&mut self`, so a store round-trip and the container
//! transition it confirms happen as one unit: a slow response can never be
//! applied over a newer one. Local state only changes after the store
//! reports success.

use time::Date;

use crate::{
    Error,
    expense::{Expense, ExpenseId, NewExpense},
    identity::{AuthEvent, UserId},
    state::ExpenseState,
    stores::ExpenseStore,
    summary::{TrendPoint, monthly_trend, optimization_tips},
    timezone,
    window::TimeFrame,
};

/// The expense tracker's application service.
pub struct ExpenseService {
    store: Box<dyn ExpenseStore + Send>,
    state: ExpenseState,
    user: Option<UserId>,
    local_timezone: String,
}

impl ExpenseService {
    /// Create a service over `store` with an empty state and nobody signed
    /// in.
    ///
    /// `local_timezone` should be a valid canonical timezone name, e.g.
    /// "Pacific/Auckland"; it anchors the aggregation windows to the user's
    /// local day.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if the timezone name is not valid.
    pub fn new(store: Box<dyn ExpenseStore + Send>, local_timezone: &str) -> Result<Self, Error> {
        let today = timezone::local_today(local_timezone)?;

        Ok(Self {
            store,
            state: ExpenseState::new(today),
            user: None,
            local_timezone: local_timezone.to_owned(),
        })
    }

    /// The current view state: expenses, budget, time frame, and summaries.
    pub fn state(&self) -> &ExpenseState {
        &self.state
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&UserId> {
        self.user.as_ref()
    }

    /// React to a transition reported by the identity collaborator.
    ///
    /// Signing in loads the user's expenses from the store; signing out
    /// clears back to the empty state.
    ///
    /// # Errors
    /// Returns [Error::ExpenseRetrieval] if the post-sign-in load fails; the
    /// user stays signed in with an empty list and can retry via
    /// [ExpenseService::load_expenses].
    pub fn handle_auth_event(&mut self, event: AuthEvent) -> Result<(), Error> {
        match event {
            AuthEvent::SignedIn(user) => {
                tracing::info!("user {user} signed in");
                self.user = Some(user);
                self.load_expenses()
            }
            AuthEvent::SignedOut => {
                tracing::info!("user signed out");
                self.user = None;
                let today = self.today()?;
                self.state.reset(today);
                Ok(())
            }
        }
    }

    /// Reload the signed-in user's expenses from the store and replace the
    /// local list.
    ///
    /// # Errors
    /// Returns [Error::NotSignedIn] when nobody is signed in, or
    /// [Error::ExpenseRetrieval] on a store failure. On failure the
    /// in-memory state keeps whatever it held before the call.
    pub fn load_expenses(&mut self) -> Result<(), Error> {
        let user = self.user.as_ref().ok_or(Error::NotSignedIn)?;

        let expenses = self
            .store
            .list(user)
            .inspect_err(|error| tracing::error!("could not load expenses: {error}"))?;

        let today = self.today()?;
        self.state.replace_all(expenses, today);

        Ok(())
    }

    /// Validate and record a new expense.
    ///
    /// The store write is confirmed before the local list changes; the
    /// container assigns the expense its local id. Returns the recorded
    /// expense.
    ///
    /// # Errors
    /// Returns a validation error ([Error::InvalidAmount] or
    /// [Error::EmptyDescription]) from [NewExpense::new]'s rules,
    /// [Error::NotSignedIn] when nobody is signed in, or
    /// [Error::ExpenseWrite] on a store failure. Local state is not mutated
    /// on failure.
    pub fn add_expense(&mut self, new_expense: NewExpense) -> Result<Expense, Error> {
        let user = self.user.as_ref().ok_or(Error::NotSignedIn)?;

        self.store
            .insert(user, &new_expense)
            .inspect_err(|error| tracing::error!("could not save expense: {error}"))?;

        let today = self.today()?;
        let id = self.state.add(new_expense, today);
        let expense = self
            .state
            .expenses
            .iter()
            .find(|expense| expense.id == id)
            .expect("expense was just added")
            .clone();

        Ok(expense)
    }

    /// Delete an expense from the store, then remove it locally.
    ///
    /// # Errors
    /// Returns [Error::NotSignedIn] when nobody is signed in, or
    /// [Error::ExpenseDelete] on a store failure. Local state is not
    /// mutated on failure; removing an id the container does not know is a
    /// no-op.
    pub fn remove_expense(&mut self, id: &ExpenseId) -> Result<(), Error> {
        if self.user.is_none() {
            return Err(Error::NotSignedIn);
        }

        self.store
            .delete(id)
            .inspect_err(|error| tracing::error!("could not delete expense {id}: {error}"))?;

        let today = self.today()?;
        self.state.remove(id, today);

        Ok(())
    }

    /// Replace the budget ceiling.
    ///
    /// # Errors
    /// Returns [Error::InvalidAmount] for a non-positive budget.
    pub fn set_budget(&mut self, budget: f64) -> Result<(), Error> {
        if budget <= 0.0 {
            return Err(Error::InvalidAmount(budget));
        }

        let today = self.today()?;
        self.state.set_budget(budget, today);
        tracing::info!("budget set to {budget}");

        Ok(())
    }

    /// Switch the active time frame.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if the configured timezone has
    /// become unresolvable.
    pub fn set_time_frame(&mut self, time_frame: TimeFrame) -> Result<(), Error> {
        let today = self.today()?;
        self.state.set_time_frame(time_frame, today);

        Ok(())
    }

    /// Spending suggestions for the active time frame.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if the configured timezone has
    /// become unresolvable.
    pub fn tips(&self) -> Result<Vec<String>, Error> {
        let today = self.today()?;

        Ok(optimization_tips(
            &self.state.expenses,
            self.state.time_frame,
            today,
        ))
    }

    /// Per-day spending totals for the current calendar month.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezone] if the configured timezone has
    /// become unresolvable.
    pub fn trend(&self) -> Result<Vec<TrendPoint>, Error> {
        let today = self.today()?;

        Ok(monthly_trend(&self.state.expenses, today))
    }

    fn today(&self) -> Result<Date, Error> {
        timezone::local_today(&self.local_timezone)
    }
}

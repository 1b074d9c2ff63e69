//! Defines the expense store trait.

use crate::{
    Error,
    expense::{Expense, ExpenseId, NewExpense},
    identity::UserId,
};

/// Handles the persistence of expenses, scoped to an authenticated user.
///
/// Implementations talk to whatever backend holds the rows; callers treat
/// failures as non-fatal and keep their in-memory state unchanged.
pub trait ExpenseStore {
    /// Retrieve all expenses belonging to `user_id`, newest date first.
    ///
    /// # Errors
    /// Returns [Error::ExpenseRetrieval] if the backend cannot be read.
    fn list(&self, user_id: &UserId) -> Result<Vec<Expense>, Error>;

    /// Persist a new expense for `user_id` and return the stored row with
    /// its backend-assigned id.
    ///
    /// # Errors
    /// Returns [Error::ExpenseWrite] if the backend rejects the write.
    fn insert(&mut self, user_id: &UserId, new_expense: &NewExpense) -> Result<Expense, Error>;

    /// Delete the expense with `id`.
    ///
    /// Deleting an id that does not exist succeeds: the backend reports
    /// zero rows affected and there is nothing left to undo.
    ///
    /// # Errors
    /// Returns [Error::ExpenseDelete] if the backend rejects the delete.
    fn delete(&mut self, id: &ExpenseId) -> Result<(), Error>;
}

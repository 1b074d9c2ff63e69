//! An in-memory expense store.
//!
//! Backs the server binary when no remote backend is configured, and gives
//! the tests a store with real semantics (per-user scoping, newest-first
//! ordering) without any I/O.

use time::{Date, Duration};

use crate::{
    Error,
    category::Category,
    expense::{Expense, ExpenseId, NewExpense},
    identity::UserId,
};

use super::ExpenseStore;

/// Stores expenses in a plain vector, scoped per user.
#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    rows: Vec<(UserId, Expense)>,
}

impl InMemoryExpenseStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of stored expenses across all users.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no expenses at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ExpenseStore for InMemoryExpenseStore {
    fn list(&self, user_id: &UserId) -> Result<Vec<Expense>, Error> {
        let mut expenses: Vec<Expense> = self
            .rows
            .iter()
            .filter(|(owner, _)| owner == user_id)
            .map(|(_, expense)| expense.clone())
            .collect();

        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(expenses)
    }

    fn insert(&mut self, user_id: &UserId, new_expense: &NewExpense) -> Result<Expense, Error> {
        let expense = new_expense.clone().into_expense(ExpenseId::generate());
        self.rows.push((user_id.clone(), expense.clone()));

        Ok(expense)
    }

    fn delete(&mut self, id: &ExpenseId) -> Result<(), Error> {
        self.rows.retain(|(_, expense)| expense.id != *id);

        Ok(())
    }
}

/// The demo expense set seeded by the server's `--demo` flag, dated relative
/// to `today` so the summaries have something to show.
pub fn sample_expenses(today: Date) -> Vec<NewExpense> {
    [
        (15.50, Category::Food, "Lunch at cafeteria", 0),
        (25.00, Category::Transport, "Bus pass", 2),
        (50.00, Category::Entertainment, "Movie with friends", 5),
        (120.00, Category::Shopping, "New textbooks", 10),
        (35.00, Category::Utilities, "Phone bill", 15),
        (8.50, Category::Food, "Coffee and snack", 1),
        (22.00, Category::Food, "Groceries", 3),
    ]
    .into_iter()
    .map(|(amount, category, description, days_ago)| {
        NewExpense::new(amount, category, description, today - Duration::days(days_ago))
            .expect("sample expense is valid")
    })
    .collect()
}

#[cfg(test)]
mod in_memory_store_tests {
    use time::macros::date;

    use crate::{
        Error,
        category::Category,
        expense::{ExpenseId, NewExpense},
        identity::UserId,
        stores::ExpenseStore,
    };

    use super::{InMemoryExpenseStore, sample_expenses};

    fn new_expense(amount: f64, date: time::Date) -> NewExpense {
        NewExpense::new(amount, Category::Other, "test", date).expect("Could not create expense")
    }

    #[test]
    fn insert_assigns_an_id() {
        let mut store = InMemoryExpenseStore::new();
        let user = UserId::new("alice");

        let expense = store
            .insert(&user, &new_expense(10.0, date!(2026 - 03 - 18)))
            .expect("Could not insert expense");

        assert_eq!(expense.amount, 10.0);
        assert!(!expense.id.as_ref().is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn list_returns_newest_date_first() {
        let mut store = InMemoryExpenseStore::new();
        let user = UserId::new("alice");
        store
            .insert(&user, &new_expense(1.0, date!(2026 - 03 - 10)))
            .unwrap();
        store
            .insert(&user, &new_expense(2.0, date!(2026 - 03 - 18)))
            .unwrap();
        store
            .insert(&user, &new_expense(3.0, date!(2026 - 03 - 14)))
            .unwrap();

        let expenses = store.list(&user).expect("Could not list expenses");

        let dates: Vec<_> = expenses.iter().map(|expense| expense.date).collect();
        assert_eq!(
            dates,
            vec![
                date!(2026 - 03 - 18),
                date!(2026 - 03 - 14),
                date!(2026 - 03 - 10)
            ]
        );
    }

    #[test]
    fn list_is_scoped_to_the_user() {
        let mut store = InMemoryExpenseStore::new();
        let alice = UserId::new("alice");
        let bob = UserId::new("bob");
        store
            .insert(&alice, &new_expense(1.0, date!(2026 - 03 - 10)))
            .unwrap();
        store
            .insert(&bob, &new_expense(2.0, date!(2026 - 03 - 11)))
            .unwrap();

        let expenses = store.list(&alice).expect("Could not list expenses");

        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].amount, 1.0);
    }

    #[test]
    fn delete_removes_the_expense() {
        let mut store = InMemoryExpenseStore::new();
        let user = UserId::new("alice");
        let expense = store
            .insert(&user, &new_expense(1.0, date!(2026 - 03 - 10)))
            .unwrap();

        store.delete(&expense.id).expect("Could not delete expense");

        assert!(store.is_empty());
    }

    #[test]
    fn delete_of_unknown_id_succeeds() {
        let mut store = InMemoryExpenseStore::new();
        let user = UserId::new("alice");
        store
            .insert(&user, &new_expense(1.0, date!(2026 - 03 - 10)))
            .unwrap();

        let result: Result<(), Error> = store.delete(&ExpenseId::from_string("missing"));

        assert_eq!(result, Ok(()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sample_expenses_are_valid_and_dated_relative_to_today() {
        let today = date!(2026 - 03 - 18);

        let samples = sample_expenses(today);

        assert_eq!(samples.len(), 7);
        assert_eq!(samples[0].date, today);
        assert_eq!(samples[3].date, date!(2026 - 03 - 08));
        assert!(samples.iter().all(|expense| expense.amount > 0.0));
    }
}

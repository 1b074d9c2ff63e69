//! Defines the core expense model and input validation.

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::{Error, category::Category};

/// The opaque identifier of an expense.
///
/// Ids are unique within a store. Locally created expenses get a freshly
/// generated v4 UUID; expenses loaded from a store keep whatever id the
/// store assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a fresh unique id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an id assigned elsewhere, e.g. by a persistence backend.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for ExpenseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single recorded expense.
///
/// Expenses are immutable once created; there is no edit operation, only
/// removal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The id of the expense.
    pub id: ExpenseId,
    /// How much money was spent. Always greater than zero.
    pub amount: f64,
    /// The spending category.
    pub category: Category,
    /// A text description of what the money was spent on.
    pub description: String,
    /// The calendar day the expense happened on. No time component.
    pub date: Date,
}

/// An expense as submitted by the user, before an id has been assigned.
///
/// Use [NewExpense::new] to construct one; it rejects malformed input so the
/// aggregation engine only ever sees well-formed records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// How much money was spent.
    pub amount: f64,
    /// The spending category.
    pub category: Category,
    /// A text description of what the money was spent on.
    pub description: String,
    /// The calendar day the expense happened on.
    pub date: Date,
}

impl NewExpense {
    /// Validate user input and create a new expense record.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if `amount` is zero or negative,
    /// - or [Error::EmptyDescription] if `description` is empty.
    pub fn new(
        amount: f64,
        category: Category,
        description: &str,
        date: Date,
    ) -> Result<Self, Error> {
        if amount <= 0.0 {
            return Err(Error::InvalidAmount(amount));
        }

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        Ok(Self {
            amount,
            category,
            description: description.to_owned(),
            date,
        })
    }

    /// Attach an id to this record, turning it into a full [Expense].
    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
        }
    }
}

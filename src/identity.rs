//! The identity collaborator contract.
//!
//! Account management lives in an external service; this crate only needs
//! to know who is signed in and when that changes.

use serde::{Deserialize, Serialize};

/// The identifier of an authenticated user, as issued by the identity
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wrap a user identifier issued by the identity service.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transition in the identity service's authentication state.
///
/// The expense service reacts by loading the signed-in user's expenses or
/// clearing back to the empty state.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    /// A user signed in.
    SignedIn(UserId),
    /// The current user signed out.
    SignedOut,
}

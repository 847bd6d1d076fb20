//! Borrower records.

use serde::{Deserialize, Serialize};

use crate::book::validate_id;
use crate::error::Result;

/// A borrower who can hold reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}

impl User {
    /// Creates a new user record.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::User;
    ///
    /// let user = User::new("U1", "Ada", "ada@example.com");
    /// assert!(user.validate().is_ok());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Checks that the identifier is usable as a key.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the identifier is empty after trimming.
    pub fn validate(&self) -> Result<()> {
        validate_id("user_id", &self.id)
    }
}

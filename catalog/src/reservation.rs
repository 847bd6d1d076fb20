//! Reservation types.
//!
//! This module provides the stored reservation record, the request object
//! used to create one, the row shape returned by reservation searches, and
//! the search term with its numeric coercion rule.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::book::validate_id;
use crate::error::{Error, Result};

/// Date format used when a reservation is created without an explicit date.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// A reservation linking one book to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Sequential identifier assigned by the store.
    pub id: i64,
    /// Reserved book.
    pub book_id: String,
    /// Borrower holding the reservation.
    pub user_id: String,
    /// Reservation date as stored.
    pub date: String,
}

/// Request object for reserving a book.
///
/// # Examples
///
/// ```
/// use catalog::ReservationRequest;
///
/// let request = ReservationRequest::new("B1", "U1").with_date("2024-03-01");
/// assert_eq!(request.resolve_date("%Y-%m-%d").unwrap(), "2024-03-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    /// Book to reserve.
    pub book_id: String,
    /// Borrower.
    pub user_id: String,
    /// Explicit reservation date; today's date when absent.
    pub date: Option<String>,
}

impl ReservationRequest {
    /// Creates a request dated today.
    #[must_use]
    pub fn new(book_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            book_id: book_id.into(),
            user_id: user_id.into(),
            date: None,
        }
    }

    /// Sets an explicit reservation date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Checks both identifiers and the explicit date, if any.
    ///
    /// # Errors
    ///
    /// Returns a validation error if an identifier or the date is blank.
    pub fn validate(&self) -> Result<()> {
        validate_id("book_id", &self.book_id)?;
        validate_id("user_id", &self.user_id)?;
        if matches!(self.date.as_deref(), Some(d) if d.trim().is_empty()) {
            return Err(Error::Validation {
                field: "date".into(),
                message: "reservation date must be non-empty when given".into(),
            });
        }
        Ok(())
    }

    /// Returns the explicit date, or today's local date in `format`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if no explicit date was given and
    /// `format` is not a valid chrono format string.
    pub fn resolve_date(&self, format: &str) -> Result<String> {
        if let Some(date) = &self.date {
            return Ok(date.clone());
        }

        let mut rendered = String::new();
        write!(rendered, "{}", Local::now().format(format)).map_err(|_| invalid_format(format))?;
        Ok(rendered)
    }
}

/// Checks that `format` is a usable chrono format string.
///
/// # Errors
///
/// Returns a validation error for unknown or incomplete specifiers.
///
/// # Examples
///
/// ```
/// use catalog::reservation::validate_date_format;
///
/// assert!(validate_date_format("%d/%m/%Y").is_ok());
/// assert!(validate_date_format("%Q").is_err());
/// ```
pub fn validate_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid_format(format));
    }
    Ok(())
}

fn invalid_format(format: &str) -> Error {
    Error::Validation {
        field: "reservation_date_format".into(),
        message: format!("'{format}' is not a valid date format"),
    }
}

/// One row of a reservation search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationView {
    /// Book identifier.
    pub book_id: String,
    /// Book title.
    pub title: String,
    /// Reservation date, if the book is reserved.
    pub reservation_date: Option<String>,
    /// Borrower name, if the book is reserved.
    pub user_name: Option<String>,
    /// Borrower email, if the book is reserved.
    pub user_email: Option<String>,
}

/// A reservation search term.
///
/// The term is compared as text against book ids, titles and user ids.
/// Reservation ids are integers, so the term only takes part in that
/// comparison when its trimmed form parses as an `i64`.
///
/// # Examples
///
/// ```
/// use catalog::SearchTerm;
///
/// assert_eq!(SearchTerm::new("42").reservation_id(), Some(42));
/// assert_eq!(SearchTerm::new(" 7 ").reservation_id(), Some(7));
/// assert_eq!(SearchTerm::new("B42").reservation_id(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    text: String,
    reservation_id: Option<i64>,
}

impl SearchTerm {
    /// Builds a term, deciding up front whether it can match a reservation id.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let reservation_id = text.trim().parse::<i64>().ok();
        Self {
            text,
            reservation_id,
        }
    }

    /// The raw text, compared verbatim.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The numeric form, when the term is an integer.
    #[must_use]
    pub const fn reservation_id(&self) -> Option<i64> {
        self.reservation_id
    }
}

impl From<&str> for SearchTerm {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SearchTerm {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod proptests;

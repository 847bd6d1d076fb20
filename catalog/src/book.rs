//! Book types for the catalog.
//!
//! This module provides the stored book record, its availability status,
//! the request objects used to create and update books, and the joined
//! read model returned by detail and list queries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Availability of a book.
///
/// Stored as an INTEGER: `0` is available, any other value is reserved.
///
/// # Examples
///
/// ```
/// use catalog::BookStatus;
///
/// assert_eq!(BookStatus::from_db(0), BookStatus::Available);
/// assert_eq!(BookStatus::from_db(1), BookStatus::Reserved);
/// assert_eq!(BookStatus::Reserved.to_db(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    /// The book can be reserved.
    #[default]
    Available,
    /// The book has an active reservation.
    Reserved,
}

impl BookStatus {
    /// Decodes the stored status flag.
    #[must_use]
    pub const fn from_db(value: i64) -> Self {
        if value == 0 {
            Self::Available
        } else {
            Self::Reserved
        }
    }

    /// Encodes the status flag for storage.
    #[must_use]
    pub const fn to_db(self) -> i64 {
        match self {
            Self::Available => 0,
            Self::Reserved => 1,
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Reserved => write!(f, "Reserved"),
        }
    }
}

/// A book row as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique, stable identifier.
    pub id: String,
    /// Title of the book.
    pub title: String,
    /// Author of the book.
    pub author: String,
    /// ISBN of the book.
    pub isbn: String,
    /// Availability status.
    pub status: BookStatus,
}

/// Request object for adding a book.
///
/// All fields are gathered by the caller up front and handed to
/// [`Database::add_book`](crate::Database::add_book) in one call.
///
/// # Examples
///
/// ```
/// use catalog::NewBook;
///
/// let book = NewBook::new("B1", "Dune", "Herbert", "ISBN1");
/// assert!(book.validate().is_ok());
///
/// let bad = NewBook::new("  ", "Dune", "Herbert", "ISBN1");
/// assert!(bad.validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    /// Identifier for the new book.
    pub id: String,
    /// Title of the new book.
    pub title: String,
    /// Author of the new book.
    pub author: String,
    /// ISBN of the new book.
    pub isbn: String,
}

impl NewBook {
    /// Creates a new request.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
        }
    }

    /// Checks that the identifier is usable as a key.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the identifier is empty after trimming.
    pub fn validate(&self) -> Result<()> {
        validate_id("book_id", &self.id)
    }
}

/// Request object for updating a book.
///
/// Only provided fields are written. Empty strings are treated the same as
/// absent fields, so an interactive caller can pass through blank answers.
///
/// # Examples
///
/// ```
/// use catalog::BookUpdate;
///
/// let update = BookUpdate::new().title("Dune Messiah").author("");
/// assert_eq!(update.changed_fields(), vec!["title"]);
/// assert!(BookUpdate::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    /// New title, if any.
    pub title: Option<String>,
    /// New author, if any.
    pub author: Option<String>,
    /// New ISBN, if any.
    pub isbn: Option<String>,
}

impl BookUpdate {
    /// Creates an update with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the author.
    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Sets the ISBN.
    #[must_use]
    pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    /// Returns the `(column, value)` pairs that will be written.
    pub(crate) fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("Title", self.title.as_deref()),
            ("Author", self.author.as_deref()),
            ("ISBN", self.isbn.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.filter(|v| !v.is_empty()).map(|v| (column, v)))
        .collect()
    }

    /// Names of the fields that will be written.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        self.assignments()
            .into_iter()
            .map(|(column, _)| match column {
                "Title" => "title",
                "Author" => "author",
                _ => "isbn",
            })
            .collect()
    }

    /// Returns true when no field would be written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }
}

/// Result of an update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No field was provided; nothing was written.
    NoChanges,
    /// The listed fields were written.
    Updated {
        /// Names of the written fields.
        fields: Vec<&'static str>,
    },
}

/// A book joined with its reservation and borrower, if any.
///
/// The join columns are informational; whether the book is reserved is
/// decided by [`Book::status`] alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookView {
    /// The stored book.
    #[serde(flatten)]
    pub book: Book,
    /// Date of the joined reservation.
    pub reservation_date: Option<String>,
    /// Identifier of the borrower.
    pub user_id: Option<String>,
    /// Name of the borrower.
    pub user_name: Option<String>,
    /// Email of the borrower.
    pub user_email: Option<String>,
}

impl BookView {
    /// Returns true if the stored status flag marks the book as reserved.
    #[must_use]
    pub fn is_reserved(&self) -> bool {
        self.book.status == BookStatus::Reserved
    }
}

/// Validates an entity identifier.
pub(crate) fn validate_id(field: &str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::Validation {
            field: field.into(),
            message: "identifier must be non-empty".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!(BookStatus::from_db(0), BookStatus::Available);
        assert_eq!(BookStatus::from_db(1), BookStatus::Reserved);
        assert_eq!(BookStatus::from_db(7), BookStatus::Reserved);
        assert_eq!(BookStatus::Available.to_db(), 0);
        assert_eq!(BookStatus::default(), BookStatus::Available);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(BookStatus::Available.to_string(), "Available");
        assert_eq!(BookStatus::Reserved.to_string(), "Reserved");
    }

    #[test]
    fn test_new_book_validation() {
        assert!(NewBook::new("B1", "", "", "").validate().is_ok());
        let err = NewBook::new("", "Dune", "Herbert", "ISBN1")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("book_id"));
    }

    #[test]
    fn test_update_ignores_empty_fields() {
        let update = BookUpdate {
            title: Some(String::new()),
            author: None,
            isbn: Some(String::new()),
        };
        assert!(update.is_empty());
        assert!(update.changed_fields().is_empty());
    }

    #[test]
    fn test_update_assignments_order() {
        let update = BookUpdate::new().isbn("ISBN9").title("Children of Dune");
        assert_eq!(
            update.assignments(),
            vec![("Title", "Children of Dune"), ("ISBN", "ISBN9")]
        );
        assert_eq!(update.changed_fields(), vec!["title", "isbn"]);
    }

    #[test]
    fn test_book_view_serializes_flat() {
        let view = BookView {
            book: Book {
                id: "B1".into(),
                title: "Dune".into(),
                author: "Herbert".into(),
                isbn: "ISBN1".into(),
                status: BookStatus::Available,
            },
            reservation_date: None,
            user_id: None,
            user_name: None,
            user_email: None,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], "B1");
        assert_eq!(json["status"], "available");
        assert!(json["reservation_date"].is_null());
        assert!(!view.is_reserved());
    }
}

//! Error types for the catalog library.
//!
//! This module provides the error hierarchy for all catalog operations,
//! using `thiserror` for ergonomic error handling.

use rusqlite::ffi;
use thiserror::Error;

/// Result type alias for operations that may fail with a catalog error.
///
/// # Examples
///
/// ```
/// use catalog::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the catalog library.
///
/// This enum encompasses all possible error conditions that can occur
/// while reading or writing the catalog store.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An insert collided with an existing primary key.
    #[error("{entity} '{id}' already exists")]
    DuplicateKey {
        /// The kind of entity that was being inserted.
        entity: String,
        /// The colliding identifier.
        id: String,
    },

    /// A write referenced a book or user that does not exist.
    #[error("referential integrity violation: {details}")]
    ReferentialViolation {
        /// Details about the violation.
        details: String,
    },

    /// The book already has an active reservation.
    #[error("book '{book_id}' is already reserved")]
    AlreadyReserved {
        /// The book that is already reserved.
        book_id: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },
}

impl Error {
    /// Creates a `NotFound` error for a book identifier.
    #[must_use]
    pub fn book_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: format!("book '{id}'"),
        }
    }

    /// Creates a `NotFound` error for a user identifier.
    #[must_use]
    pub fn user_not_found(id: &str) -> Self {
        Self::NotFound {
            resource: format!("user '{id}'"),
        }
    }

    /// Check if error indicates a missing entity.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::Error;
    ///
    /// let err = Error::book_not_found("B1");
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a primary-key collision.
    #[must_use]
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Translates a constraint failure raised by `SQLite` on insert.
    ///
    /// Primary-key and unique collisions become `DuplicateKey`, foreign-key
    /// failures become `ReferentialViolation`, and a busy database becomes
    /// `LockTimeout`. Anything else is passed through unchanged.
    pub(crate) fn from_insert(err: rusqlite::Error, entity: &str, id: &str, wait_secs: u64) -> Self {
        if let rusqlite::Error::SqliteFailure(ref sqlite_err, ref message) = err {
            match sqlite_err.extended_code {
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    return Self::DuplicateKey {
                        entity: entity.to_string(),
                        id: id.to_string(),
                    };
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => {
                    return Self::ReferentialViolation {
                        details: message
                            .clone()
                            .unwrap_or_else(|| format!("{entity} '{id}' references a missing row")),
                    };
                }
                _ => {}
            }
        }
        Self::from_busy(err, wait_secs)
    }

    /// Maps `SQLITE_BUSY` to `LockTimeout`, leaving other errors alone.
    pub(crate) fn from_busy(err: rusqlite::Error, seconds: u64) -> Self {
        if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = err {
            if sqlite_err.code == rusqlite::ErrorCode::DatabaseBusy {
                return Self::LockTimeout { seconds };
            }
        }
        Self::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint_failure(extended_code: i32) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(ffi::Error::new(extended_code), None)
    }

    #[test]
    fn test_not_found_error() {
        let err = Error::book_not_found("B1");
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("book 'B1'"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_duplicate_key_error() {
        let err = Error::DuplicateKey {
            entity: "book".to_string(),
            id: "B1".to_string(),
        };
        assert_eq!(format!("{err}"), "book 'B1' already exists");
        assert!(err.is_duplicate_key());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_referential_violation_error() {
        let err = Error::ReferentialViolation {
            details: "FOREIGN KEY constraint failed".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("referential integrity"));
        assert!(display.contains("FOREIGN KEY"));
    }

    #[test]
    fn test_already_reserved_error() {
        let err = Error::AlreadyReserved {
            book_id: "B7".to_string(),
        };
        assert_eq!(format!("{err}"), "book 'B7' is already reserved");
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "book_id".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("book_id"));
        assert!(display.contains("must be non-empty"));
    }

    #[test]
    fn test_from_insert_primary_key() {
        let err = Error::from_insert(
            constraint_failure(ffi::SQLITE_CONSTRAINT_PRIMARYKEY),
            "book",
            "B1",
            5,
        );
        assert!(err.is_duplicate_key());
    }

    #[test]
    fn test_from_insert_foreign_key() {
        let err = Error::from_insert(
            constraint_failure(ffi::SQLITE_CONSTRAINT_FOREIGNKEY),
            "reservation",
            "B1",
            5,
        );
        assert!(matches!(err, Error::ReferentialViolation { .. }));
    }

    #[test]
    fn test_from_insert_passes_other_errors_through() {
        let err = Error::from_insert(rusqlite::Error::QueryReturnedNoRows, "book", "B1", 5);
        assert!(matches!(err, Error::Database(_)));
    }

    #[test]
    fn test_from_insert_busy_is_lock_timeout() {
        let err = Error::from_insert(constraint_failure(ffi::SQLITE_BUSY), "book", "B1", 3);
        assert!(matches!(err, Error::LockTimeout { seconds: 3 }));
    }

    #[test]
    fn test_from_busy() {
        let err = Error::from_busy(constraint_failure(ffi::SQLITE_BUSY), 5);
        assert!(matches!(err, Error::LockTimeout { seconds: 5 }));

        let err = Error::from_busy(rusqlite::Error::QueryReturnedNoRows, 5);
        assert!(matches!(err, Error::Database(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }
}

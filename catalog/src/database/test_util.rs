//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::{NewBook, Reservation, ReservationRequest, User};

/// Creates a temporary on-disk test database.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// Adds a book, a user named `User <id>`, and a reservation linking them.
///
/// The user is only created if it does not exist yet.
///
/// # Panics
///
/// Panics if any of the inserts fail.
pub fn seed_reserved_book(db: &mut Database, book_id: &str, user_id: &str, date: &str) -> Reservation {
    db.add_book(&NewBook::new(book_id, "Seeded title", "Seeded author", "ISBN0"))
        .unwrap();
    if db.get_user(user_id).is_err() {
        db.add_user(&User::new(
            user_id,
            format!("User {user_id}"),
            format!("{}@example.com", user_id.to_lowercase()),
        ))
        .unwrap();
    }
    db.reserve_book(&ReservationRequest::new(book_id, user_id).with_date(date))
        .unwrap()
}

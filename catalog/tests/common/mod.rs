//! Common test utilities for integration tests.
//!
//! This module provides helpers for opening isolated on-disk catalogs and
//! seeding them with books, users and reservations.

use std::path::PathBuf;

use catalog::{Database, DatabaseConfig, NewBook, Reservation, ReservationRequest, User};
use tempfile::TempDir;

/// An on-disk catalog living in its own temporary directory.
pub struct TestCatalog {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the database file
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestCatalog {
    /// Creates a new, not yet opened catalog location.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join("library.db");
        Self { temp_dir, path }
    }

    /// Opens (creating if needed) the catalog.
    pub fn open(&self) -> Database {
        Database::open(DatabaseConfig::new(&self.path)).expect("Failed to open catalog")
    }
}

/// Adds a book with a title derived from its id.
#[allow(dead_code)]
pub fn add_book(db: &mut Database, id: &str, title: &str) {
    db.add_book(&NewBook::new(id, title, "Author", format!("ISBN-{id}")))
        .expect("Failed to add book");
}

/// Adds a user named after its id.
#[allow(dead_code)]
pub fn add_user(db: &mut Database, id: &str, name: &str) {
    db.add_user(&User::new(id, name, format!("{}@example.com", name.to_lowercase())))
        .expect("Failed to add user");
}

/// Reserves a book on a fixed date.
#[allow(dead_code)]
pub fn reserve(db: &mut Database, book_id: &str, user_id: &str) -> Reservation {
    db.reserve_book(&ReservationRequest::new(book_id, user_id).with_date("2024-03-01"))
        .expect("Failed to reserve book")
}

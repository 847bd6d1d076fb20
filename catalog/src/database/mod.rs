//! Database layer for the catalog store.
//!
//! This module provides the SQLite-based storage layer: connection
//! management, schema versioning, and the book, user and reservation
//! operations.
//!
//! # Examples
//!
//! ```no_run
//! use catalog::database::{Database, DatabaseConfig};
//! use catalog::NewBook;
//!
//! let config = DatabaseConfig::new("/tmp/library.db");
//! let mut db = Database::open(config).unwrap();
//!
//! db.add_book(&NewBook::new("B1", "Dune", "Herbert", "ISBN1")).unwrap();
//!
//! for view in db.list_all_books().unwrap() {
//!     println!("{} ({})", view.book.title, view.book.status);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod reservations;
mod schema;
mod transaction;
mod users;

#[cfg(test)]
mod proptests;

#[cfg(test)]
pub(crate) mod test_util;

pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME, DATA_DIR_ENV,
};
pub use connection::Database;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};

#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # catalog
//!
//! A library for managing a local book catalog.
//!
//! This library tracks books, borrowers and reservations in a single
//! `SQLite` file and exposes the catalog operations as methods on an
//! explicitly owned [`Database`] handle.
//!
//! ## Core Types
//!
//! - [`Database`]: the store handle and every catalog operation
//! - [`Book`], [`BookView`], [`NewBook`], [`BookUpdate`]: book records and requests
//! - [`User`]: borrower records
//! - [`Reservation`], [`ReservationRequest`], [`ReservationView`], [`SearchTerm`]
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Config`]: file and environment configuration
//!
//! ## Examples
//!
//! ```
//! use catalog::{BookStatus, Database, NewBook};
//!
//! let mut db = Database::open_in_memory().unwrap();
//! db.add_book(&NewBook::new("B1", "Dune", "Herbert", "ISBN1")).unwrap();
//!
//! let books = db.list_all_books().unwrap();
//! assert_eq!(books.len(), 1);
//! assert_eq!(books[0].book.status, BookStatus::Available);
//! assert!(books[0].user_name.is_none());
//!
//! db.delete_book("B1").unwrap();
//! assert!(db.get_book_detail("B1").unwrap_err().is_not_found());
//! ```

pub mod book;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod reservation;
pub mod user;

// Re-export key types at crate root for convenience
pub use book::{Book, BookStatus, BookUpdate, BookView, NewBook, UpdateOutcome};
pub use config::{Config, ConfigLoader};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel};
pub use reservation::{Reservation, ReservationRequest, ReservationView, SearchTerm};
pub use user::User;

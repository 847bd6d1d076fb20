//! Database schema definitions and SQL constants.
//!
//! This module contains the SQL table definitions, indices, and constants
//! for the catalog store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the books table.
///
/// `Status` is `0` for available and `1` for reserved.
pub const CREATE_BOOKS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Books (
        BookID TEXT PRIMARY KEY,
        Title TEXT,
        Author TEXT,
        ISBN TEXT,
        Status INTEGER DEFAULT 0
    )";

/// SQL statement to create the users table.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Users (
        UserID TEXT PRIMARY KEY,
        Name TEXT,
        Email TEXT
    )";

/// SQL statement to create the reservations table.
///
/// Both foreign keys are checked by `SQLite` once `foreign_keys` is enabled
/// on the connection.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS Reservations (
        ReservationID INTEGER PRIMARY KEY AUTOINCREMENT,
        BookID TEXT,
        UserID TEXT,
        ReservationDate TEXT,
        FOREIGN KEY (BookID) REFERENCES Books (BookID),
        FOREIGN KEY (UserID) REFERENCES Users (UserID)
    )";

/// Index for the book side of the reservation join.
pub const CREATE_RESERVATION_BOOK_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_book ON Reservations(BookID)";

/// Index for user-id lookups in reservation searches.
pub const CREATE_RESERVATION_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_user ON Reservations(UserID)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Column list shared by the detail and list queries.
///
/// Rows are decoded by `row_to_book_view` in this order.
pub const BOOK_VIEW_COLUMNS: &str = r"
    Books.BookID, Books.Title, Books.Author, Books.ISBN, Books.Status,
    Reservations.ReservationDate, Users.UserID, Users.Name, Users.Email
";

/// Join shared by every query that reports reservation state.
pub const BOOK_RESERVATION_JOIN: &str = r"
    FROM Books
    LEFT JOIN Reservations ON Books.BookID = Reservations.BookID
    LEFT JOIN Users ON Reservations.UserID = Users.UserID
";

//! Database connection management.
//!
//! This module provides the store handle with proper initialization and
//! PRAGMA settings for the catalog's `SQLite` file.

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;
use crate::reservation::DEFAULT_DATE_FORMAT;

use super::config::DatabaseConfig;

/// The catalog store handle.
///
/// Owns exactly one `SQLite` connection. Every catalog operation is a
/// method on this type, so callers pass the handle explicitly instead of
/// relying on process-wide state. Dropping the handle closes the connection.
///
/// # Examples
///
/// ```no_run
/// use catalog::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/library.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
    date_format: String,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode, busy timeout and foreign-key enforcement
    /// - Initialize or verify the database schema
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be opened or
    /// created, a PRAGMA fails, or the schema is incompatible.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if config.auto_create && !config.path.exists() {
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.read_only {
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // PRAGMA journal_mode returns a row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;

        log::debug!("opened catalog database at {}", config.path.display());
        Self::prepare(conn, config)
    }

    /// Opens a private in-memory store with the full schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::prepare(conn, DatabaseConfig::new(":memory:"))
    }

    fn prepare(conn: Connection, config: DatabaseConfig) -> Result<Self> {
        conn.execute_batch(&format!(
            "PRAGMA busy_timeout = {}",
            config.busy_timeout.as_millis()
        ))?;
        conn.execute_batch("PRAGMA foreign_keys = ON")?;

        super::migrations::check_schema_compatibility(&conn)?;

        Ok(Self {
            conn,
            config,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        })
    }

    /// Sets the chrono format used for reservations created without a date.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Returns the chrono format used for default reservation dates.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Returns the configuration this handle was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.db");

        let db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());

        let journal_mode: String = db
            .connection()
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let db = Database::open_in_memory().unwrap();
        let enabled: i64 = db
            .connection()
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_database_auto_create_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("subdir").join("library.db");

        assert!(!path.parent().unwrap().exists());
        let _db = Database::open(DatabaseConfig::new(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_database_read_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("library.db");

        {
            Database::open(DatabaseConfig::new(&path)).unwrap();
        }

        let db = Database::open(DatabaseConfig::new(&path).read_only()).unwrap();
        let result = db.connection().execute("CREATE TABLE test (id INTEGER)", []);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_without_auto_create() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.db");

        let mut config = DatabaseConfig::new(&path);
        config.auto_create = false;
        assert!(Database::open(config).is_err());
    }

    #[test]
    fn test_date_format() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.date_format(), DEFAULT_DATE_FORMAT);

        let db = db.with_date_format("%d.%m.%Y");
        assert_eq!(db.date_format(), "%d.%m.%Y");
    }
}

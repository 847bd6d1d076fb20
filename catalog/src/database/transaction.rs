//! Transaction management utilities.
//!
//! Multi-statement catalog operations run inside IMMEDIATE transactions so
//! the write lock is taken up front and the statements commit together.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;

impl Database {
    /// Begins an IMMEDIATE transaction on the store's connection.
    ///
    /// The transaction rolls back when dropped without `commit`, so an early
    /// return through `?` leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns `Error::LockTimeout` if the write lock cannot be acquired
    /// within the busy timeout, or a database error otherwise.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use catalog::Database;
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        let wait = self.lock_wait_secs();
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| Error::from_busy(e, wait))
    }
}

impl Database {
    /// Busy timeout in whole seconds, rounded up for error reports.
    pub(super) fn lock_wait_secs(&self) -> u64 {
        let timeout = self.config().busy_timeout;
        timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0)
    }
}

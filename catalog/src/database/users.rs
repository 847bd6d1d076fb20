//! Borrower operations.

use rusqlite::params;

use crate::error::{Error, Result};
use crate::User;

use super::connection::Database;

const INSERT_USER: &str = "INSERT INTO Users (UserID, Name, Email) VALUES (?, ?, ?)";

const SELECT_USER: &str = "SELECT UserID, Name, Email FROM Users WHERE UserID = ?";

impl Database {
    /// Adds a borrower.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` for a blank identifier and
    /// `Error::DuplicateKey` if the identifier is taken.
    pub fn add_user(&mut self, user: &User) -> Result<()> {
        user.validate()?;

        self.conn
            .execute(INSERT_USER, params![user.id, user.name, user.email])
            .map_err(|e| Error::from_insert(e, "user", &user.id, self.lock_wait_secs()))?;

        log::info!("added user {}", user.id);
        Ok(())
    }

    /// Looks up a borrower.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no user has this identifier.
    pub fn get_user(&self, id: &str) -> Result<User> {
        let mut stmt = self.conn.prepare(SELECT_USER)?;

        match stmt.query_row([id], |row| {
            Ok(User {
                id: row.get(0)?,
                name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                email: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            })
        }) {
            Ok(user) => Ok(user),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::user_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }
}

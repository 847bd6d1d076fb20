//! Reservation operations.
//!
//! Creating a reservation is the only way a book becomes `Reserved`; the
//! insert and the status change commit together.

use rusqlite::{params, Connection};

use crate::book::BookStatus;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationRequest};

use super::connection::Database;

const INSERT_RESERVATION: &str = r"
    INSERT INTO Reservations (BookID, UserID, ReservationDate)
    VALUES (?, ?, ?)
";

const MARK_RESERVED: &str = "UPDATE Books SET Status = ? WHERE BookID = ?";

const SELECT_BOOK_RESERVATIONS: &str = r"
    SELECT ReservationID, BookID, UserID, ReservationDate
    FROM Reservations
    WHERE BookID = ?
    ORDER BY ReservationID
";

fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    Ok(Reservation {
        id: row.get(0)?,
        book_id: row.get(1)?,
        user_id: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        date: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
    })
}

impl Database {
    /// Reserves a book for a borrower.
    ///
    /// Runs in one IMMEDIATE transaction: the book must exist and be
    /// available, the reservation row is inserted, and the book is marked
    /// `Reserved`. When the request carries no date, today's local date is
    /// rendered with [`Database::date_format`].
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `Error::Validation` for blank identifiers or a blank explicit date
    /// - `Error::NotFound` if the book does not exist
    /// - `Error::AlreadyReserved` if the book is already reserved
    /// - `Error::ReferentialViolation` if the user does not exist
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::{Database, NewBook, ReservationRequest, User};
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// db.add_book(&NewBook::new("B1", "Dune", "Herbert", "ISBN1")).unwrap();
    /// db.add_user(&User::new("U1", "Ada", "ada@example.com")).unwrap();
    ///
    /// let reservation = db
    ///     .reserve_book(&ReservationRequest::new("B1", "U1").with_date("2024-03-01"))
    ///     .unwrap();
    /// assert_eq!(reservation.date, "2024-03-01");
    /// assert!(db.get_book_detail("B1").unwrap().is_reserved());
    /// ```
    pub fn reserve_book(&mut self, request: &ReservationRequest) -> Result<Reservation> {
        request.validate()?;
        let date = request.resolve_date(self.date_format())?;

        let wait = self.lock_wait_secs();
        let tx = self.begin_transaction()?;

        let Some(book) = Self::find_book(&tx, &request.book_id)? else {
            return Err(Error::book_not_found(&request.book_id));
        };
        if book.status == BookStatus::Reserved {
            return Err(Error::AlreadyReserved {
                book_id: book.id,
            });
        }

        tx.execute(
            INSERT_RESERVATION,
            params![request.book_id, request.user_id, date],
        )
        .map_err(|e| Error::from_insert(e, "reservation", &request.book_id, wait))?;
        let id = tx.last_insert_rowid();

        tx.execute(
            MARK_RESERVED,
            params![BookStatus::Reserved.to_db(), request.book_id],
        )?;

        tx.commit()?;
        log::info!(
            "reserved book {} for user {} (reservation {id})",
            request.book_id,
            request.user_id
        );

        Ok(Reservation {
            id,
            book_id: request.book_id.clone(),
            user_id: request.user_id.clone(),
            date,
        })
    }

    /// Lists the reservation rows referencing a book.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reservations_for_book(&self, book_id: &str) -> Result<Vec<Reservation>> {
        Self::list_book_reservations(&self.conn, book_id)
    }

    /// Lists the reservation rows referencing a book using an existing
    /// connection or transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_book_reservations(conn: &Connection, book_id: &str) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(SELECT_BOOK_RESERVATIONS)?;

        let reservations = stmt
            .query_map([book_id], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(reservations)
    }
}

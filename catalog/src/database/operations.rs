//! Catalog operations on books.
//!
//! This module implements adding, reading, searching, listing, updating and
//! deleting books, including the joined reservation and borrower columns.

use rusqlite::{params, params_from_iter, Connection};

use crate::book::{Book, BookStatus, BookUpdate, BookView, NewBook, UpdateOutcome};
use crate::error::{Error, Result};
use crate::reservation::{ReservationView, SearchTerm};

use super::connection::Database;
use super::schema::{BOOK_RESERVATION_JOIN, BOOK_VIEW_COLUMNS};

const INSERT_BOOK: &str = r"
    INSERT INTO Books (BookID, Title, Author, ISBN, Status)
    VALUES (?, ?, ?, ?, 0)
";

const SELECT_BOOK: &str = r"
    SELECT BookID, Title, Author, ISBN, Status
    FROM Books
    WHERE BookID = ?
";

const DELETE_BOOK_RESERVATIONS: &str = "DELETE FROM Reservations WHERE BookID = ?";

const DELETE_BOOK: &str = "DELETE FROM Books WHERE BookID = ?";

/// Reads a text column that the schema allows to be NULL.
fn text_or_empty(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(idx)?.unwrap_or_default())
}

/// Deserializes a book from columns 0..=4 (id, title, author, isbn, status).
pub(super) fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: text_or_empty(row, 1)?,
        author: text_or_empty(row, 2)?,
        isbn: text_or_empty(row, 3)?,
        status: BookStatus::from_db(row.get::<_, Option<i64>>(4)?.unwrap_or(0)),
    })
}

/// Deserializes a row selected with `BOOK_VIEW_COLUMNS`.
fn row_to_book_view(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookView> {
    Ok(BookView {
        book: row_to_book(row)?,
        reservation_date: row.get(5)?,
        user_id: row.get(6)?,
        user_name: row.get(7)?,
        user_email: row.get(8)?,
    })
}

fn row_to_reservation_view(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReservationView> {
    Ok(ReservationView {
        book_id: row.get(0)?,
        title: text_or_empty(row, 1)?,
        reservation_date: row.get(2)?,
        user_name: row.get(3)?,
        user_email: row.get(4)?,
    })
}

impl Database {
    /// Adds a new book with status `Available`.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `Error::Validation` if the identifier is blank
    /// - `Error::DuplicateKey` if a book with the same identifier exists;
    ///   the existing row is left unchanged
    /// - `Error::Database` for any other storage failure
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::{BookStatus, Database, NewBook};
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// db.add_book(&NewBook::new("B1", "Dune", "Herbert", "ISBN1")).unwrap();
    ///
    /// let view = db.get_book_detail("B1").unwrap();
    /// assert_eq!(view.book.status, BookStatus::Available);
    /// ```
    pub fn add_book(&mut self, book: &NewBook) -> Result<()> {
        book.validate()?;

        self.conn
            .execute(
                INSERT_BOOK,
                params![book.id, book.title, book.author, book.isbn],
            )
            .map_err(|e| Error::from_insert(e, "book", &book.id, self.lock_wait_secs()))?;

        log::info!("added book {}", book.id);
        Ok(())
    }

    /// Returns a book with its reservation date and borrower, if any.
    ///
    /// Reserved-ness is carried by `view.book.status`; the joined columns
    /// are `None` when no reservation row exists.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no book has this identifier.
    pub fn get_book_detail(&self, id: &str) -> Result<BookView> {
        let sql = format!(
            "SELECT {BOOK_VIEW_COLUMNS} {BOOK_RESERVATION_JOIN} WHERE Books.BookID = ? ORDER BY Reservations.ReservationID"
        );
        let mut stmt = self.conn.prepare(&sql)?;

        match stmt.query_row([id], row_to_book_view) {
            Ok(view) => Ok(view),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Error::book_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the stored book row without joins.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(book))` if the book exists
    /// - `Ok(None)` if it doesn't
    pub fn find_book(conn: &Connection, id: &str) -> Result<Option<Book>> {
        let mut stmt = conn.prepare(SELECT_BOOK)?;

        match stmt.query_row([id], row_to_book) {
            Ok(book) => Ok(Some(book)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Searches books and their reservations.
    ///
    /// A row matches when the term:
    /// - equals the book identifier, or
    /// - is a case-sensitive substring of the title, or
    /// - equals the borrower's user identifier, or
    /// - parses as an integer equal to the reservation identifier.
    ///
    /// Books without a reservation are included when the book-side clauses
    /// match, with empty reservation columns. No match yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::{Database, NewBook};
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// db.add_book(&NewBook::new("B1", "Dune", "Herbert", "ISBN1")).unwrap();
    ///
    /// assert_eq!(db.search_reservations("Du").unwrap().len(), 1);
    /// assert!(db.search_reservations("du").unwrap().is_empty());
    /// ```
    pub fn search_reservations(&self, term: impl Into<SearchTerm>) -> Result<Vec<ReservationView>> {
        let term = term.into();
        // instr() is case-sensitive, unlike LIKE; a NULL ?2 never matches
        let sql = format!(
            "SELECT Books.BookID, Books.Title, Reservations.ReservationDate, Users.Name, Users.Email
             {BOOK_RESERVATION_JOIN}
             WHERE Books.BookID = ?1
                OR instr(Books.Title, ?1) > 0
                OR Users.UserID = ?1
                OR Reservations.ReservationID = ?2
             ORDER BY Books.BookID, Reservations.ReservationID"
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt
            .query_map(
                params![term.text(), term.reservation_id()],
                row_to_reservation_view,
            )?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        log::debug!("search {:?} matched {} row(s)", term.text(), rows.len());
        Ok(rows)
    }

    /// Lists every book joined with its reservation and borrower.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all_books(&self) -> Result<Vec<BookView>> {
        let sql = format!(
            "SELECT {BOOK_VIEW_COLUMNS} {BOOK_RESERVATION_JOIN} ORDER BY Books.BookID, Reservations.ReservationID"
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let books = stmt
            .query_map([], row_to_book_view)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(books)
    }

    /// Applies the provided fields of `update` to a book.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if fields were provided but no book has
    /// this identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateOutcome::NoChanges)` if no field was provided; nothing
    ///   is written and the book is not looked up
    /// - `Ok(UpdateOutcome::Updated { .. })` with the written field names
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog::{BookUpdate, Database, NewBook, UpdateOutcome};
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// db.add_book(&NewBook::new("B1", "Dune", "Herbert", "ISBN1")).unwrap();
    ///
    /// let outcome = db.update_book("B1", &BookUpdate::new()).unwrap();
    /// assert_eq!(outcome, UpdateOutcome::NoChanges);
    ///
    /// let outcome = db.update_book("B1", &BookUpdate::new().isbn("ISBN2")).unwrap();
    /// assert_eq!(outcome, UpdateOutcome::Updated { fields: vec!["isbn"] });
    /// ```
    pub fn update_book(&mut self, id: &str, update: &BookUpdate) -> Result<UpdateOutcome> {
        let assignments = update.assignments();
        if assignments.is_empty() {
            log::debug!("update of book {id} requested no changes");
            return Ok(UpdateOutcome::NoChanges);
        }

        if Self::find_book(&self.conn, id)?.is_none() {
            return Err(Error::book_not_found(id));
        }

        let set_clause = assignments
            .iter()
            .map(|(column, _)| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE Books SET {set_clause} WHERE BookID = ?");

        let values = assignments
            .iter()
            .map(|(_, value)| *value)
            .chain(std::iter::once(id));
        self.conn
            .execute(&sql, params_from_iter(values))
            .map_err(|e| Error::from_busy(e, self.lock_wait_secs()))?;

        let fields = update.changed_fields();
        log::info!("updated book {id}: {}", fields.join(", "));
        Ok(UpdateOutcome::Updated { fields })
    }

    /// Deletes a book together with every reservation that references it.
    ///
    /// Both deletions run in one IMMEDIATE transaction: either the book and
    /// its reservations are all removed, or nothing is.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no book has this identifier, or a
    /// database error if either deletion or the commit fails.
    ///
    /// # Returns
    ///
    /// The number of reservation rows removed along with the book.
    pub fn delete_book(&mut self, id: &str) -> Result<usize> {
        let tx = self.begin_transaction()?;

        let Some(book) = Self::find_book(&tx, id)? else {
            return Err(Error::book_not_found(id));
        };

        // Reservations go first so the foreign key never points at a
        // deleted book, including rows left behind with status Available.
        let removed = tx.execute(DELETE_BOOK_RESERVATIONS, [id])?;
        if removed > 0 && book.status == BookStatus::Available {
            log::warn!("book {id} was marked available but had {removed} reservation(s)");
        }
        tx.execute(DELETE_BOOK, [id])?;

        tx.commit()?;
        log::info!("deleted book {id} and {removed} reservation(s)");
        Ok(removed)
    }
}

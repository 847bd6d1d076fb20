//! Property-based tests for book storage.

use proptest::prelude::*;

use crate::{BookStatus, Database, NewBook};

/// Identifiers with at least one non-blank character.
fn book_id() -> impl Strategy<Value = String> {
    "\\PC{0,6}[A-Za-z0-9]\\PC{0,6}"
}

/// Free text, including quotes, unicode and the empty string.
fn text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("O'Brien \"quoted\" %_".to_string()),
        "\\PC{0,40}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // add_book then get_book_detail returns the same fields, available
    #[test]
    fn added_book_reads_back(id in book_id(), title in text(), author in text(), isbn in text()) {
        let mut db = Database::open_in_memory().unwrap();
        db.add_book(&NewBook::new(id.clone(), title.clone(), author.clone(), isbn.clone()))
            .unwrap();

        let view = db.get_book_detail(&id).unwrap();
        prop_assert_eq!(&view.book.id, &id);
        prop_assert_eq!(&view.book.title, &title);
        prop_assert_eq!(&view.book.author, &author);
        prop_assert_eq!(&view.book.isbn, &isbn);
        prop_assert_eq!(view.book.status, BookStatus::Available);
        prop_assert!(view.reservation_date.is_none());
        prop_assert!(view.user_id.is_none());
    }

    // A second add with the same id fails and leaves the first row intact
    #[test]
    fn duplicate_add_keeps_original(id in book_id(), first in text(), second in text()) {
        let mut db = Database::open_in_memory().unwrap();
        db.add_book(&NewBook::new(id.clone(), first.clone(), "", "")).unwrap();

        let err = db.add_book(&NewBook::new(id.clone(), second, "", "")).unwrap_err();
        prop_assert!(err.is_duplicate_key());
        prop_assert_eq!(db.get_book_detail(&id).unwrap().book.title, first);
        prop_assert_eq!(db.list_all_books().unwrap().len(), 1);
    }
}

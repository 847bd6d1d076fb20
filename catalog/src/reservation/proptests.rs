//! Property-based tests for `SearchTerm` and `ReservationRequest`.

use super::{ReservationRequest, SearchTerm};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Every integer, padded or not, coerces to itself
    #[test]
    fn integer_terms_coerce(n in any::<i64>(), pad in "[ ]{0,3}") {
        let term = SearchTerm::new(format!("{pad}{n}{pad}"));
        prop_assert_eq!(term.reservation_id(), Some(n));
    }

    // Terms containing a letter never match a reservation id
    #[test]
    fn alphabetic_terms_do_not_coerce(prefix in "[0-9]{0,4}", letter in "[a-zA-Z]", suffix in "[0-9]{0,4}") {
        let term = SearchTerm::new(format!("{prefix}{letter}{suffix}"));
        prop_assert_eq!(term.reservation_id(), None);
    }

    // The raw text is preserved exactly
    #[test]
    fn text_is_preserved(text in ".*") {
        let term = SearchTerm::new(text.clone());
        prop_assert_eq!(term.text(), text.as_str());
    }

    // Non-blank ids always validate
    #[test]
    fn non_blank_ids_validate(book in "[A-Za-z0-9]{1,12}", user in "[A-Za-z0-9]{1,12}") {
        prop_assert!(ReservationRequest::new(book, user).validate().is_ok());
    }

    // Explicit dates are returned verbatim
    #[test]
    fn explicit_dates_are_kept(date in "[0-9]{4}-[0-9]{2}-[0-9]{2}") {
        let request = ReservationRequest::new("B1", "U1").with_date(date.clone());
        prop_assert_eq!(request.resolve_date("%d/%m/%Y").unwrap(), date);
    }
}

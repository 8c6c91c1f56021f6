//! List boundary-condition tests.
//!
//! Coverage:
//! - Every positional operation rejects `index >= len` with
//!   `ListError::IndexOutOfRange` carrying the offending index and length
//! - `insert` accepts `index == len`
//! - `remove_where` with no matches and with all matches
//! - Operations on an empty list
//! - `with_config` validation

#[cfg(test)]
mod tests {
    use crate::list::{ListError, OrderedList};
    use crate::test_helpers::init_tracing;
    use crate::{CollectionConfig, Error, MAX_INITIAL_CAPACITY};

    /// # Scenario
    /// All checked accessors on an empty list.
    ///
    /// # Expected behavior
    /// Each returns `IndexOutOfRange { index: 0, len: 0 }` and the list
    /// stays empty.
    #[test]
    fn empty_list_rejects_positional_access() {
        init_tracing();

        let mut list: OrderedList<u8> = OrderedList::new();
        let err = ListError::IndexOutOfRange { index: 0, len: 0 };

        assert_eq!(list.get(0), Err(err.clone()));
        assert_eq!(list.set(0, 1), Err(err.clone()));
        assert_eq!(list.remove_at(0), Err(err));
        assert!(list.is_empty());
    }

    /// # Scenario
    /// Index exactly equal to the length is one past the end.
    ///
    /// # Expected behavior
    /// `remove_at(len)` fails and leaves the list untouched.
    #[test]
    fn remove_at_len_is_out_of_range() {
        init_tracing();

        let mut list: OrderedList<i32> = vec![1, 2, 3].into();
        assert_eq!(
            list.remove_at(3),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn insert_past_end_rejected() {
        init_tracing();

        let mut list: OrderedList<i32> = vec![1].into();
        assert_eq!(
            list.insert(2, 9),
            Err(ListError::IndexOutOfRange { index: 2, len: 1 })
        );
        list.insert(1, 9).unwrap();
        assert_eq!(list.as_slice(), &[1, 9]);
    }

    /// # Scenario
    /// `remove_where` with a predicate that never matches.
    ///
    /// # Expected behavior
    /// Returns 0; contents are unchanged.
    #[test]
    fn remove_where_no_match_is_noop() {
        init_tracing();

        let mut list: OrderedList<i32> = vec![2, 4, 6].into();
        assert_eq!(list.remove_where(|n| *n > 100), 0);
        assert_eq!(list.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn remove_where_all_match_empties_list() {
        init_tracing();

        let mut list: OrderedList<i32> = vec![1, 1, 1].into();
        assert_eq!(list.remove_where(|_| true), 3);
        assert!(list.is_empty());
        assert_eq!(list.remove_where(|_| true), 0);
    }

    /// # Scenario
    /// Duplicates are allowed and removal by index only removes one of them.
    #[test]
    fn duplicates_removed_individually() {
        init_tracing();

        let mut list: OrderedList<i32> = vec![7, 7, 7].into();
        list.remove_at(1).unwrap();
        assert_eq!(list.as_slice(), &[7, 7]);
    }

    #[test]
    fn clear_then_reuse() {
        init_tracing();

        let mut list: OrderedList<i32> = (0..5).collect();
        list.clear();
        assert_eq!(list.count(), 0);

        list.extend([10, 11]);
        assert_eq!(list.as_slice(), &[10, 11]);
    }

    #[test]
    fn with_config_reserves_and_validates() {
        init_tracing();

        let config = CollectionConfig {
            initial_capacity: 64,
            ..CollectionConfig::default()
        };
        let list: OrderedList<u64> = OrderedList::with_config(&config).unwrap();
        assert!(list.is_empty());

        let bad = CollectionConfig {
            initial_capacity: MAX_INITIAL_CAPACITY + 1,
            ..CollectionConfig::default()
        };
        assert!(matches!(
            OrderedList::<u64>::with_config(&bad),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn error_converts_into_crate_error() {
        let list: OrderedList<u8> = OrderedList::new();
        let err: Error = list.get(5).unwrap_err().into();
        assert_eq!(
            err.to_string(),
            "index 5 out of range for list of length 0"
        );
    }
}

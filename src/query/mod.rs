//! # Query Module
//!
//! A declarative filter → sort → project pipeline over any sequence.
//!
//! [`Query`] is a thin builder over a materialized `Vec`. Each stage is an
//! ordinary higher-order function, so chaining `filter`, `order_by` and
//! `select` by hand gives exactly the same result as the one-shot [`query`]
//! helper.
//!
//! Sorting is always stable: elements with equal keys keep the order they had
//! after filtering.

// ------------------------------------------------------------------------------------------------
// Unit tests
// ------------------------------------------------------------------------------------------------


// ------------------------------------------------------------------------------------------------
// Includes
// ------------------------------------------------------------------------------------------------

use std::cmp::Reverse;

use thiserror::Error;
use tracing::debug;

// ------------------------------------------------------------------------------------------------
// Error Types
// ------------------------------------------------------------------------------------------------

/// Errors returned by [`Query::single`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No element satisfied the predicate.
    #[error("no element matches the predicate")]
    NoMatch,

    /// More than one element satisfied the predicate.
    #[error("expected exactly one match, found {0}")]
    MultipleMatches(usize),
}

// ------------------------------------------------------------------------------------------------
// Query pipeline
// ------------------------------------------------------------------------------------------------

/// A materialized sequence with chainable query stages.
///
/// # Example
///
/// ```rust
/// use ordo::Query;
///
/// let names = Query::new(vec![("b", 2), ("a", 1), ("c", 3)])
///     .filter(|(_, n)| *n < 3)
///     .order_by(|(name, _)| *name)
///     .select(|(name, _)| name)
///     .to_vec();
///
/// assert_eq!(names, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<T> {
    items: Vec<T>,
}

impl<T> Query<T> {
    /// Starts a query over `source`.
    pub fn new<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: source.into_iter().collect(),
        }
    }

    /// Keeps only the elements satisfying `predicate`.
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(predicate);
        debug!(before, after = self.items.len(), "query: filter");
        self
    }

    /// Stable ascending sort by `key`. The key is computed once per element.
    pub fn order_by<K, F>(mut self, key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items.sort_by_cached_key(key);
        debug!(len = self.items.len(), "query: order_by");
        self
    }

    /// Stable descending sort by `key`. Equal keys keep their current order.
    pub fn order_by_descending<K, F>(mut self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items.sort_by_cached_key(|item| Reverse(key(item)));
        debug!(len = self.items.len(), "query: order_by_descending");
        self
    }

    /// Maps every element through `project`.
    pub fn select<U, F>(self, project: F) -> Query<U>
    where
        F: FnMut(T) -> U,
    {
        Query {
            items: self.items.into_iter().map(project).collect(),
        }
    }

    // --------------------------------------------------------------------------------------------
    // Aggregates
    // --------------------------------------------------------------------------------------------

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Number of elements satisfying `predicate`.
    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(item)).count()
    }

    /// `true` if every element satisfies `predicate` (vacuously true when empty).
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// `true` if any element satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// First element satisfying `predicate`, if any.
    pub fn first<P>(self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.into_iter().find(|item| predicate(item))
    }

    /// The only element satisfying `predicate`.
    ///
    /// # Errors
    ///
    /// - [`QueryError::NoMatch`] when nothing matches.
    /// - [`QueryError::MultipleMatches`] with the total match count when more
    ///   than one element matches.
    pub fn single<P>(self, mut predicate: P) -> Result<T, QueryError>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = self.items.into_iter().filter(|item| predicate(item));
        let found = matches.next().ok_or(QueryError::NoMatch)?;

        let extra = matches.count();
        if extra > 0 {
            return Err(QueryError::MultipleMatches(extra + 1));
        }
        Ok(found)
    }

    /// `true` if the keys are in non-decreasing order.
    pub fn is_sorted_by_key<K, F>(&self, mut key: F) -> bool
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.items.windows(2).all(|pair| key(&pair[0]) <= key(&pair[1]))
    }

    // --------------------------------------------------------------------------------------------
    // Output
    // --------------------------------------------------------------------------------------------

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Materializes the result.
    pub fn to_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Query<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for Query<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Filters `source`, sorts the survivors ascending by `sort_key` (stable),
/// then projects each one.
///
/// Shorthand for
/// `Query::new(source).filter(filter).order_by(sort_key).select(project).to_vec()`.
pub fn query<T, U, K, I, P, S, F>(source: I, filter: P, sort_key: S, project: F) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    K: Ord,
    P: FnMut(&T) -> bool,
    S: FnMut(&T) -> K,
    F: FnMut(T) -> U,
{
    Query::new(source)
        .filter(filter)
        .order_by(sort_key)
        .select(project)
        .to_vec()
}

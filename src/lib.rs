//! # ordo
//!
//! Small in-memory collections with predictable ordering:
//!
//! - [`OrderedList`]: an index-addressable sequence with checked positional
//!   mutation and predicate-based bulk removal.
//! - [`OrderedMap`]: an associative container that iterates in
//!   first-insertion order.
//! - [`Query`]: a filter → stable-sort → project pipeline over any sequence.
//!
//! ## Quick Start
//!
//! ```rust
//! use ordo::{Element, OrderedList, OrderedMap, query};
//!
//! // Lists
//! let mut numbers: OrderedList<i32> = (0..10).collect();
//! numbers.remove_where(|n| n % 2 == 1);
//! assert_eq!(numbers.as_slice(), &[0, 2, 4, 6, 8]);
//!
//! // Maps
//! let mut elements = OrderedMap::new();
//! elements.set("K".to_string(), Element::new("K", "Potassium", 19));
//! elements.set("Ca".to_string(), Element::new("Ca", "Calcium", 20));
//! assert_eq!(elements.get("K").unwrap().atomic_number, 19);
//! assert!(elements.try_get("Na").is_none());
//!
//! // Queries
//! let names = query(
//!     elements.values().cloned(),
//!     |e| e.atomic_number < 22,
//!     |e| e.name.clone(),
//!     |e| e.name,
//! );
//! assert_eq!(names, vec!["Calcium", "Potassium"]);
//! ```
//!
//! ## Errors
//!
//! Only two operations fail in normal use: positional list access with a bad
//! index ([`ListError::IndexOutOfRange`]) and direct map lookup of an absent
//! key ([`MapError::KeyNotFound`]). Everything else is total.
//!
//! ## Logging
//!
//! Operations emit `tracing` events (`trace!` per operation, `debug!` for
//! map compaction and query stages). No subscriber is installed by the crate.

mod config;
mod list;
mod map;
mod query;
mod records;

#[cfg(test)]
mod test_helpers;

pub use config::{CollectionConfig, MAX_INITIAL_CAPACITY};
pub use list::{ListError, OrderedList};
pub use map::{Iter as MapIter, MapError, OrderedMap};
pub use query::{Query, QueryError, query};
pub use records::{Element, Galaxy};

// ------------------------------------------------------------------------------------------------
// Error type
// ------------------------------------------------------------------------------------------------

/// Crate-level error wrapping every module error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Invalid configuration parameter.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    List(#[from] ListError),

    #[error("{0}")]
    Map(#[from] MapError),

    #[error("{0}")]
    Query(#[from] QueryError),
}

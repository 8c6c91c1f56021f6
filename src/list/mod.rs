//! # List Module
//!
//! Implements [`OrderedList`], a resizable, index-addressable sequence.
//!
//! Positions are zero-based. Removing an element shifts every later element
//! down by one; the relative order of the survivors never changes.
//!
//! ## Features
//! - Amortized O(1) append
//! - Checked positional access, replacement, insertion and removal
//! - Predicate-based bulk removal in a single pass

// ------------------------------------------------------------------------------------------------
// Unit tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests;

// ------------------------------------------------------------------------------------------------
// Includes
// ------------------------------------------------------------------------------------------------

use crate::CollectionConfig;
use thiserror::Error;
use tracing::trace;

// ------------------------------------------------------------------------------------------------
// Error Types
// ------------------------------------------------------------------------------------------------

/// Represents possible errors returned by [`OrderedList`] operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ListError {
    /// The index lies outside `[0, len)` (or `[0, len]` for insertion).
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

// ------------------------------------------------------------------------------------------------
// OrderedList Core
// ------------------------------------------------------------------------------------------------

/// An ordered, growable sequence with checked positional operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for `config.initial_capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfig`] if the configuration is out of range.
    pub fn with_config(config: &CollectionConfig) -> Result<Self, crate::Error> {
        config.validate()?;
        Ok(Self {
            items: Vec::with_capacity(config.initial_capacity),
        })
    }

    /// Appends `value` to the end of the list.
    pub fn append(&mut self, value: T) {
        self.items.push(value);
        trace!(len = self.items.len(), "append");
    }

    /// Inserts `value` at `index`, shifting later elements up by one.
    ///
    /// `index == count()` is allowed and behaves like [`append`](Self::append).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.items.len();
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        self.items.insert(index, value);
        trace!(index, len = len + 1, "insert");
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// Every element after `index` moves down by one position.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        trace!(index, len = self.items.len(), "remove_at");
        Ok(removed)
    }

    /// Removes every element for which `predicate` returns `true`.
    ///
    /// Survivors keep their original relative order. Returns the number of
    /// removed elements; zero when nothing matched.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        let removed = before - self.items.len();
        trace!(removed, len = self.items.len(), "remove_where");
        removed
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.check_index(index)?;
        Ok(&self.items[index])
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        self.check_index(index)?;
        Ok(&mut self.items[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.check_index(index)?;
        trace!(index, "set");
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    /// Number of elements currently stored.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    pub fn contains_where<F>(&self, predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the elements in positional order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the list and returns its elements as a `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    // --------------------------------------------------------------------------------------------
    // Internal helpers
    // --------------------------------------------------------------------------------------------

    fn check_index(&self, index: usize) -> Result<(), ListError> {
        let len = self.items.len();
        if index >= len {
            trace!(index, len, "index out of range");
            return Err(ListError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}

// ------------------------------------------------------------------------------------------------
// Conversions
// ------------------------------------------------------------------------------------------------

impl<T> From<Vec<T>> for OrderedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

//! # Map Module
//!
//! Implements [`OrderedMap`], an associative container that remembers the
//! order in which keys were first inserted.
//!
//! ## Layout
//!
//! Entries live in a slot vector kept in insertion order. A hash index maps
//! each key to its slot, giving O(1) average lookups. Updating a key writes
//! into its existing slot, so its position never changes.
//!
//! ## Tombstones
//!
//! `remove` does not shift the slot vector. It leaves an empty slot (a
//! tombstone) behind and drops the key from the index. Once tombstones make
//! up more than `tombstone_compaction_ratio` of all slots, the vector is
//! compacted in place and the index is rebuilt. Compaction preserves order.

// ------------------------------------------------------------------------------------------------
// Unit tests
// ------------------------------------------------------------------------------------------------


// ------------------------------------------------------------------------------------------------
// Includes
// ------------------------------------------------------------------------------------------------

use std::{borrow::Borrow, collections::HashMap, fmt::Debug, hash::Hash};

use crate::CollectionConfig;
use thiserror::Error;
use tracing::{debug, trace};

// ------------------------------------------------------------------------------------------------
// Error Types
// ------------------------------------------------------------------------------------------------

/// Represents possible errors returned by [`OrderedMap`] operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MapError {
    /// Direct lookup of a key that is not present. Carries the key's
    /// `Debug` rendering.
    #[error("key not found: {0}")]
    KeyNotFound(String),
}

// ------------------------------------------------------------------------------------------------
// OrderedMap Core
// ------------------------------------------------------------------------------------------------

/// An insertion-ordered map with unique keys.
///
/// Iteration through [`keys`](Self::keys), [`values`](Self::values) and
/// [`iter`](Self::iter) follows first-insertion order. Re-inserting a key
/// after removing it places it at the end.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    /// Entries in insertion order; `None` marks a removed entry.
    slots: Vec<Option<(K, V)>>,

    /// Key → position in `slots`. Only live entries are indexed.
    index: HashMap<K, usize>,

    /// Number of `None` slots.
    tombstones: usize,

    /// Tombstone share of `slots` above which compaction runs.
    tombstone_compaction_ratio: f64,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty map with default settings.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
            tombstones: 0,
            tombstone_compaction_ratio: CollectionConfig::default().tombstone_compaction_ratio,
        }
    }

    /// Number of live entries.
    pub fn count(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Iterates over values mutably, in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.slots.iter_mut().flatten().map(|(_, value)| value)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.slots.iter().flatten(),
        }
    }

    /// Removes every entry. Settings are kept.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.tombstones = 0;
    }
}

impl<K, V> OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Creates an empty map using the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfig`] if the configuration is out of range.
    pub fn with_config(config: &CollectionConfig) -> Result<Self, crate::Error> {
        config.validate()?;
        Ok(Self {
            slots: Vec::with_capacity(config.initial_capacity),
            index: HashMap::with_capacity(config.initial_capacity),
            tombstones: 0,
            tombstone_compaction_ratio: config.tombstone_compaction_ratio,
        })
    }

    /// Inserts or updates `key`.
    ///
    /// # Behavior
    /// - Absent key: the entry is appended to the insertion order.
    /// - Present key: the value is replaced in place and the old value is
    ///   returned. The key keeps its position.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&slot) = self.index.get(&key) {
            if let Some((_, current)) = self.slots[slot].as_mut() {
                trace!(slot, "set: replaced existing value");
                return Some(std::mem::replace(current, value));
            }
        }

        let slot = self.slots.len();
        self.index.insert(key.clone(), slot);
        self.slots.push(Some((key, value)));
        trace!(slot, count = self.index.len(), "set: inserted new key");
        None
    }

    /// Returns the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::KeyNotFound`] if the key is absent. Use
    /// [`try_get`](Self::try_get) to probe without an error.
    pub fn get<Q>(&self, key: &Q) -> Result<&V, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.try_get(key).ok_or_else(|| {
            trace!(key = ?key, "get: key not found");
            MapError::KeyNotFound(format!("{key:?}"))
        })
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, MapError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let slot = self
            .index
            .get(key)
            .copied()
            .ok_or_else(|| MapError::KeyNotFound(format!("{key:?}")))?;

        self.slots[slot]
            .as_mut()
            .map(|(_, value)| value)
            .ok_or_else(|| MapError::KeyNotFound(format!("{key:?}")))
    }

    /// Returns `Some(value)` if `key` is present, `None` otherwise. Never fails.
    pub fn try_get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = *self.index.get(key)?;
        self.slots[slot].as_ref().map(|(_, value)| value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Deletes `key`. Returns `true` if the entry existed.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.take(key).is_some()
    }

    /// Deletes `key` and returns its value, if it existed.
    pub fn take<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot = self.index.remove(key)?;
        let (_, value) = self.slots[slot].take()?;
        self.tombstones += 1;
        trace!(slot, tombstones = self.tombstones, "remove");

        if self.tombstone_ratio() > self.tombstone_compaction_ratio {
            self.compact();
        }
        Some(value)
    }

    /// Drops all tombstones from the slot vector and rebuilds the index.
    ///
    /// Returns the number of tombstones removed. Relative order of the live
    /// entries is unchanged.
    pub fn compact(&mut self) -> usize {
        let dropped = self.tombstones;
        if dropped == 0 {
            return 0;
        }

        self.slots.retain(Option::is_some);
        for (slot, entry) in self.slots.iter().enumerate() {
            if let Some((key, _)) = entry {
                if let Some(position) = self.index.get_mut(key) {
                    *position = slot;
                }
            }
        }
        self.tombstones = 0;

        debug!(dropped, live = self.slots.len(), "map compacted");
        dropped
    }

    // --------------------------------------------------------------------------------------------
    // Internal helpers
    // --------------------------------------------------------------------------------------------

    fn tombstone_ratio(&self) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.tombstones as f64 / self.slots.len() as f64
    }
}

// ------------------------------------------------------------------------------------------------
// Iteration
// ------------------------------------------------------------------------------------------------

/// Borrowing iterator over an [`OrderedMap`], in insertion order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: std::iter::Flatten<std::slice::Iter<'a, Option<(K, V)>>>,
}

// Only references are held, so no `K: Clone` / `V: Clone` bounds.
impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::iter::Flatten<std::vec::IntoIter<Option<(K, V)>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter().flatten()
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

//! Ordered map type for TOML tables.
//!
//! This module provides [`TomlMap`], a wrapper around [`IndexMap`] that keeps
//! key-value pairs in insertion order. Insertion order is load-bearing here:
//! it decides the order of `key = value` lines and of `[section]` headers in
//! the serialized output, so it is a stated contract of the data structure
//! rather than an accident of the underlying container.
//!
//! ## Why IndexMap?
//!
//! `TomlMap` uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: the same table always serializes the same way
//! - **Author-controlled layout**: keys appear in the order they were added
//! - **Predictable tests**: expected output strings can be written by hand
//!
//! ## Examples
//!
//! ```rust
//! use tomlify::{TomlMap, TomlValue};
//!
//! let mut table = TomlMap::new();
//! table.insert("title".to_string(), TomlValue::from("example"));
//! table.insert("port".to_string(), TomlValue::from(8080));
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.get("title").and_then(|v| v.as_str()), Some("example"));
//! ```

use crate::TomlValue;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An ordered map of string keys to TOML values.
///
/// A thin wrapper around [`IndexMap`] preserving insertion order, which
/// determines the relative order of assignments and sections in the
/// rendered document.
///
/// # Examples
///
/// ```rust
/// use tomlify::{TomlMap, TomlValue};
///
/// let mut table = TomlMap::new();
/// table.insert("first".to_string(), TomlValue::from(1));
/// table.insert("second".to_string(), TomlValue::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = table.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TomlMap(IndexMap<String, TomlValue>);

impl TomlMap {
    /// Creates an empty `TomlMap`.
    #[must_use]
    pub fn new() -> Self {
        TomlMap(IndexMap::new())
    }

    /// Creates an empty `TomlMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TomlMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tomlify::{TomlMap, TomlValue};
    ///
    /// let mut table = TomlMap::new();
    /// assert!(table.insert("key".to_string(), TomlValue::from(42)).is_none());
    /// assert!(table.insert("key".to_string(), TomlValue::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: TomlValue) -> Option<TomlValue> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TomlValue> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key from the map, preserving the order of the remaining
    /// entries, and returns its value if it was present.
    pub fn shift_remove(&mut self, key: &str) -> Option<TomlValue> {
        self.0.shift_remove(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, TomlValue> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, TomlValue> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, TomlValue> {
        self.0.iter()
    }
}

impl From<HashMap<String, TomlValue>> for TomlMap {
    fn from(map: HashMap<String, TomlValue>) -> Self {
        TomlMap(map.into_iter().collect())
    }
}

impl From<TomlMap> for HashMap<String, TomlValue> {
    fn from(map: TomlMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for TomlMap {
    type Item = (String, TomlValue);
    type IntoIter = indexmap::map::IntoIter<String, TomlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a TomlMap {
    type Item = (&'a String, &'a TomlValue);
    type IntoIter = indexmap::map::Iter<'a, String, TomlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, TomlValue)> for TomlMap {
    fn from_iter<T: IntoIterator<Item = (String, TomlValue)>>(iter: T) -> Self {
        TomlMap(IndexMap::from_iter(iter))
    }
}

impl Extend<(String, TomlValue)> for TomlMap {
    fn extend<T: IntoIterator<Item = (String, TomlValue)>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

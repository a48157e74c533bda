//! Ordered associative containers.
//!
//! This module provides [`OrderedMap`], a mapping from [`Key`]s to [`Value`]s
//! that remembers the order in which keys were first inserted. It is the store
//! behind every operation in [`crate::arrays`] and behind
//! [`DualView`](crate::view::DualView).
//!
//! # Core Types
//!
//! - [`OrderedMap`] - The ordered container
//! - [`Key`] - Integer or string key, normalized by [`to_key`]
//! - [`Value`] - Scalars and nested containers
//! - [`KeyPath`] - A sequence of keys for nested access
//! - [`ObjectLike`] - Targets that accept members by name
//!
//! # Usage
//!
//! ```
//! use assoc::{map::{Key, OrderedMap}, omap};
//!
//! let mut map = OrderedMap::new();
//! map.insert("name", "Alice");
//! map.insert("7", "seven");
//! map.push("appended");
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec![Key::from("name"), Key::Int(7), Key::Int(8)]);
//!
//! // Literal construction
//! let list = omap!["a", "b", "c"];
//! assert_eq!(list.get(1).and_then(|v| v.as_text()), Some("b"));
//! ```

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

pub mod errors;
pub mod json;
pub mod key;
pub mod object;
pub mod path;
pub mod value;

pub use errors::MapError;
pub use key::{Key, to_key};
pub use object::ObjectLike;
pub use path::KeyPath;
pub use value::Value;

// Re-export the macros from crate root
pub use crate::{omap, path};

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// Overwriting an existing key keeps its position; removing a key closes the
/// gap without reordering the remaining entries.
///
/// Equality is order-sensitive: two maps are equal when they hold the same
/// pairs in the same order.
///
/// # Examples
///
/// ```
/// # use assoc::map::OrderedMap;
/// let mut map = OrderedMap::new();
/// map.insert("first", 10);
/// map.insert("second", 20);
/// map.insert("first", 11);
///
/// let keys: Vec<String> = map.keys().map(ToString::to_string).collect();
/// assert_eq!(keys, ["first", "second"]);
/// assert_eq!(map.get("first").and_then(|v| v.as_int()), Some(11));
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderedMap {
    entries: IndexMap<Key, Value>,
    /// One past the greatest integer key ever inserted
    next_free: i64,
}

impl OrderedMap {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            next_free: 0,
        }
    }

    /// Creates an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            next_free: 0,
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Gets the value at `key`
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Gets a mutable reference to the value at `key`
    pub fn get_mut(&mut self, key: impl Into<Key>) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    /// Sets the value at `key`, returning the previous value if present.
    ///
    /// A new key is appended at the end; an existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        self.track(&key);
        self.entries.insert(key, value.into())
    }

    /// Appends `value` under the next free integer key and returns that key.
    ///
    /// The next free key is one past the greatest integer key ever inserted,
    /// or `0` for a map that never held one. Removing entries does not lower
    /// it. At `i64::MAX` the key saturates, so the entry at `i64::MAX` is
    /// overwritten.
    pub fn push(&mut self, value: impl Into<Value>) -> Key {
        let key = Key::Int(self.next_free);
        if self.next_free == i64::MAX && self.entries.contains_key(&key) {
            debug!("Next free key saturated, push overwrites the entry at i64::MAX");
        }
        self.insert(key.clone(), value);
        key
    }

    /// Returns the integer key [`push`](Self::push) would use next
    pub fn next_free_index(&self) -> i64 {
        self.next_free
    }

    fn track(&mut self, key: &Key) {
        if let Key::Int(n) = key {
            self.next_free = self.next_free.max(n.saturating_add(1));
        }
    }

    /// Removes the entry at `key` and returns its value, keeping the order of
    /// the remaining entries
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Returns the position of `key` in iteration order
    pub fn get_index_of(&self, key: impl Into<Key>) -> Option<usize> {
        self.entries.get_index_of(&key.into())
    }

    /// Returns the entry at position `index`
    pub fn get_index(&self, index: usize) -> Option<(&Key, &Value)> {
        self.entries.get_index(index)
    }

    /// Returns the first entry
    pub fn first(&self) -> Option<(&Key, &Value)> {
        self.entries.first()
    }

    /// Returns the last entry
    pub fn last(&self) -> Option<(&Key, &Value)> {
        self.entries.last()
    }

    /// Returns an iterator over all entries in order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Returns an iterator over all entries with mutable values
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, Key, Value> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over all keys in order
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Returns an iterator over all values in order
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Returns a mutable iterator over all values in order
    pub fn values_mut(&mut self) -> indexmap::map::ValuesMut<'_, Key, Value> {
        self.entries.values_mut()
    }

    /// Removes all entries
    pub fn clear(&mut self) {
        self.entries.clear();
        self.next_free = 0;
    }

    /// Replaces every nested view with its plain map, recursively
    pub fn into_plain(self) -> OrderedMap {
        self.entries
            .into_iter()
            .map(|(key, value)| (key, value.into_plain()))
            .collect()
    }

    /// Returns the value at `key`, appending a `Null` entry when absent
    pub(crate) fn entry_or_null(&mut self, key: Key) -> &mut Value {
        self.track(&key);
        self.entries.entry(key).or_insert(Value::Null)
    }

    /// Inserts a new key at `index`, shifting later entries back.
    ///
    /// The key must not be present.
    pub(crate) fn insert_new_at(&mut self, index: usize, key: Key, value: Value) {
        debug_assert!(!self.entries.contains_key(&key));
        self.track(&key);
        self.entries.shift_insert(index, key, value);
    }

    /// Moves the entry at `from` to position `to`, shifting the entries between
    pub(crate) fn move_index(&mut self, from: usize, to: usize) {
        self.entries.move_index(from, to);
    }

    /// Removes the entry at `key`, returning its position and value
    pub(crate) fn remove_full(&mut self, key: &Key) -> Option<(usize, Value)> {
        self.entries
            .shift_remove_full(key)
            .map(|(index, _, value)| (index, value))
    }
}

impl PartialEq for OrderedMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl fmt::Display for OrderedMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            match value {
                Value::Text(s) => write!(f, "{key}: {s:?}")?,
                value => write!(f, "{key}: {value}")?,
            }
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for OrderedMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for OrderedMap {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for OrderedMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderedMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a mut OrderedMap {
    type Item = (&'a Key, &'a mut Value);
    type IntoIter = indexmap::map::IterMut<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

/// Builds an [`OrderedMap`] literal.
///
/// `key => value` pairs keep their keys (after [`to_key`] normalization); a
/// plain list of values is keyed `0..n`.
///
/// ```
/// # use assoc::omap;
/// let assoc = omap! { "color" => "red", 0 => 5 };
/// assert_eq!(assoc.len(), 2);
///
/// let list = omap![1, 2, 3];
/// assert!(assoc::arrays::is_list(&list));
///
/// let nested = omap! { "inner" => omap! { "a" => "b" } };
/// assert!(nested.get("inner").is_some_and(|v| v.as_map().is_some()));
/// ```
#[macro_export]
macro_rules! omap {
    () => {
        $crate::map::OrderedMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::map::OrderedMap::new();
        $( map.insert($key, $value); )+
        map
    }};
    ($($value:expr),+ $(,)?) => {{
        let mut map = $crate::map::OrderedMap::new();
        $( map.push($value); )+
        map
    }};
}

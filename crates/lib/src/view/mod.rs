//! Dual-view access to an ordered map.
//!
//! A [`DualView`] owns one [`OrderedMap`] and exposes it through two
//! equivalent surfaces:
//!
//! - **object-style**: [`member`](DualView::member),
//!   [`set_member`](DualView::set_member), [`unset_member`](DualView::unset_member),
//!   [`has_member`](DualView::has_member)
//! - **array-style**: [`offset_get`](DualView::offset_get),
//!   [`offset_set`](DualView::offset_set), [`offset_unset`](DualView::offset_unset),
//!   [`offset_exists`](DualView::offset_exists) and the `[]` operator
//!
//! Both surfaces resolve to the same entries of the same map. Reads never
//! fail: an absent member reads as [`Value::Null`]. Chained subscript writes
//! through a scalar member panic; [`arrays::get_ref`](crate::arrays::get_ref)
//! reports the same case as an error.
//!
//! # Usage
//!
//! ```
//! use assoc::{omap, view::DualView};
//!
//! let mut hash = DualView::new();
//! hash["foo"] = 123.into();
//! hash.set_member("bar", 456);
//!
//! assert_eq!(hash.member("foo"), &123);
//! assert_eq!(hash["bar"], 456);
//! assert_eq!(hash.count(), 2);
//!
//! hash.offset_unset("foo");
//! assert!(!hash.has_member("foo"));
//! ```

use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::map::{Key, ObjectLike, OrderedMap, Value, value::NULL};

/// An ordered map addressable both by subscript and by member name.
///
/// Built with [`from_map`](DualView::from_map), nested plain maps are wrapped
/// into nested views (recursive mode) or kept as plain maps (shallow mode).
/// Values written later through either surface are stored as given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DualView {
    map: OrderedMap,
}

impl DualView {
    /// Creates an empty view
    pub fn new() -> Self {
        Self {
            map: OrderedMap::new(),
        }
    }

    /// Wraps `map`, taking ownership of it.
    ///
    /// With `recursive` set, every nested plain map at any depth becomes a
    /// nested `DualView`. Otherwise nested maps stay plain maps and only the
    /// top level gets view semantics.
    ///
    /// ```
    /// # use assoc::{omap, view::DualView};
    /// let source = omap! { "foo" => 123, "inner" => omap! { "a" => "b" } };
    ///
    /// let deep = DualView::from_map(source.clone(), true);
    /// assert!(deep["inner"].as_view().is_some());
    ///
    /// let shallow = DualView::from_map(source, false);
    /// assert!(shallow["inner"].as_map().is_some());
    /// assert_eq!(shallow["inner"]["a"], "b");
    /// ```
    pub fn from_map(map: OrderedMap, recursive: bool) -> Self {
        trace!(entries = map.len(), recursive, "Wrapping map in DualView");
        if !recursive {
            return Self { map };
        }
        let map = map
            .into_iter()
            .map(|(key, value)| (key, wrap(value)))
            .collect();
        Self { map }
    }

    /// Returns the value of member `name`, or `Null` when absent
    pub fn member(&self, name: impl Into<Key>) -> &Value {
        self.map.get(name).unwrap_or(&NULL)
    }

    /// Returns a mutable reference to member `name`, if present
    pub fn member_mut(&mut self, name: impl Into<Key>) -> Option<&mut Value> {
        self.map.get_mut(name)
    }

    /// Sets member `name`; a new member is appended at the end
    pub fn set_member(&mut self, name: impl Into<Key>, value: impl Into<Value>) {
        self.map.insert(name, value);
    }

    /// Removes member `name` if present
    pub fn unset_member(&mut self, name: impl Into<Key>) {
        self.map.remove(name);
    }

    /// Returns true if member `name` exists, whatever its value
    pub fn has_member(&self, name: impl Into<Key>) -> bool {
        self.map.contains_key(name)
    }

    /// Array-style read; same entry as [`member`](Self::member)
    pub fn offset_get(&self, offset: impl Into<Key>) -> &Value {
        self.member(offset)
    }

    /// Array-style write; same entry as [`set_member`](Self::set_member)
    pub fn offset_set(&mut self, offset: impl Into<Key>, value: impl Into<Value>) {
        self.set_member(offset, value);
    }

    /// Array-style removal; same entry as [`unset_member`](Self::unset_member)
    pub fn offset_unset(&mut self, offset: impl Into<Key>) {
        self.unset_member(offset);
    }

    /// Array-style existence check; same as [`has_member`](Self::has_member)
    pub fn offset_exists(&self, offset: impl Into<Key>) -> bool {
        self.has_member(offset)
    }

    /// Returns the number of top-level entries
    pub fn count(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the view has no entries
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns an iterator over all entries in order
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.map.iter()
    }

    /// Returns an iterator over all member names in order
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.map.keys()
    }

    /// Returns an iterator over all member values in order
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.map.values()
    }

    /// Borrows the backing map
    pub fn as_map(&self) -> &OrderedMap {
        &self.map
    }

    /// Borrows the backing map mutably
    pub fn as_map_mut(&mut self) -> &mut OrderedMap {
        &mut self.map
    }

    /// Returns a plain copy of the backing map with nested views unwrapped.
    ///
    /// ```
    /// # use assoc::{omap, view::DualView};
    /// let source = omap! { "foo" => 123, "inner" => omap! { "a" => "b" } };
    /// assert_eq!(DualView::from_map(source.clone(), true).to_map(), source);
    /// assert_eq!(DualView::from_map(source.clone(), false).to_map(), source);
    /// ```
    pub fn to_map(&self) -> OrderedMap {
        self.map.clone().into_plain()
    }

    /// Unwraps the view into its backing map, unwrapping nested views too
    pub fn into_map(self) -> OrderedMap {
        self.map.into_plain()
    }
}

/// Wraps nested plain maps of `value` into views, at every depth.
fn wrap(value: Value) -> Value {
    match value {
        Value::Map(map) => Value::View(DualView::from_map(map, true)),
        other => other,
    }
}

impl From<OrderedMap> for DualView {
    fn from(map: OrderedMap) -> Self {
        DualView::from_map(map, true)
    }
}

impl From<DualView> for OrderedMap {
    fn from(view: DualView) -> Self {
        view.into_map()
    }
}

impl ObjectLike for DualView {
    fn set_member(&mut self, name: Key, value: Value) {
        self.map.insert(name, value);
    }
}

impl<K: Into<Key>> Index<K> for DualView {
    type Output = Value;

    fn index(&self, key: K) -> &Value {
        self.member(key)
    }
}

/// Subscript write access; a missing key is appended with a `Null` value.
///
/// # Panics
///
/// Chained writes such as `view["n"]["x"] = ..` panic when `view["n"]` holds a
/// scalar other than `Null`. Use [`arrays::get_ref`](crate::arrays::get_ref)
/// on [`as_map_mut`](DualView::as_map_mut) to get a [`MapError::NotAMap`]
/// instead.
///
/// [`MapError::NotAMap`]: crate::map::MapError::NotAMap
impl<K: Into<Key>> IndexMut<K> for DualView {
    fn index_mut(&mut self, key: K) -> &mut Value {
        self.map.entry_or_null(key.into())
    }
}

impl<'a> IntoIterator for &'a DualView {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl serde::Serialize for DualView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.map, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for DualView {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <OrderedMap as serde::Deserialize>::deserialize(deserializer).map(DualView::from)
    }
}

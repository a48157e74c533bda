//! Operations over ordered maps.
//!
//! Every function here takes an [`OrderedMap`] and either returns a new map or
//! mutates the given one in place. Keys passed in go through
//! [`to_key`](crate::map::to_key), so `"3"` and `3` always address the same
//! entry.
//!
//! Strict lookups ([`get`], [`pick`]) fail with
//! [`MapError::KeyNotFound`]; their `_or` counterparts return a default
//! instead.
//!
//! Callbacks always receive `(value, key)`; ignore the key when it is not
//! needed.
//!
//! # Nested views
//!
//! Path lookups ([`get`], [`get_ref`]) descend through nested
//! [`DualView`](crate::view::DualView) values as if they were plain maps.
//! Structural transforms ([`flatten`], [`merge_tree`]) only descend into plain
//! maps and treat views as opaque values.

use regex::Regex;
use tracing::{debug, trace};

use crate::map::{Key, KeyPath, MapError, ObjectLike, OrderedMap, Value};

pub use crate::map::to_key;


/// Returns true if `predicate` holds for every entry.
///
/// Stops at the first entry that fails. An empty map yields `true`.
///
/// ```
/// # use assoc::{arrays, omap};
/// let map = omap![1, 30, 39, 29, 10, 13];
/// assert!(arrays::every(&map, |value, _| value.as_int().is_some_and(|n| n < 40)));
/// ```
pub fn every<F>(map: &OrderedMap, mut predicate: F) -> bool
where
    F: FnMut(&Value, &Key) -> bool,
{
    map.iter().all(|(key, value)| predicate(value, key))
}

/// Returns true if `predicate` holds for at least one entry.
///
/// Stops at the first entry that passes. An empty map yields `false`.
pub fn some<F>(map: &OrderedMap, mut predicate: F) -> bool
where
    F: FnMut(&Value, &Key) -> bool,
{
    map.iter().any(|(key, value)| predicate(value, key))
}

/// Returns the value at a key or nested path.
///
/// A path descends one nesting level per segment. Fails with
/// [`MapError::KeyNotFound`] if any segment is absent or an intermediate value
/// is not a container.
///
/// ```
/// # use assoc::{arrays, omap};
/// let map = omap! { "a" => omap! { "b" => 1 }, "c" => 2 };
/// assert_eq!(*arrays::get(&map, ["a", "b"])?, 1);
/// assert!(arrays::get(&map, "missing").unwrap_err().is_not_found());
/// # Ok::<(), assoc::Error>(())
/// ```
pub fn get<'a>(map: &'a OrderedMap, path: impl Into<KeyPath>) -> crate::Result<&'a Value> {
    Ok(lookup(map, &path.into())?)
}

/// Returns the value at a key or nested path, or `default` when absent.
pub fn get_or<'a>(
    map: &'a OrderedMap,
    path: impl Into<KeyPath>,
    default: &'a Value,
) -> &'a Value {
    lookup(map, &path.into()).unwrap_or(default)
}

fn lookup<'a>(map: &'a OrderedMap, path: &KeyPath) -> Result<&'a Value, MapError> {
    let Some((last, parents)) = path.split_last() else {
        return Err(MapError::KeyNotFound {
            key: "(empty path)".to_string(),
        });
    };

    let mut current = map;
    for (depth, segment) in parents.iter().enumerate() {
        current = current
            .get(segment)
            .and_then(Value::as_assoc)
            .ok_or_else(|| MapError::KeyNotFound {
                key: path.display_prefix(depth + 1),
            })?;
    }

    current.get(last).ok_or_else(|| MapError::KeyNotFound {
        key: path.to_string(),
    })
}

/// Returns a mutable reference to the value at a key or nested path.
///
/// Missing segments are created on the way: intermediate segments become
/// empty maps, and a missing final segment is appended with a `Null` value.
/// An intermediate `Null` is replaced by an empty map.
///
/// The whole path is validated before anything is created, so a call that
/// fails with [`MapError::NotAMap`] leaves `map` untouched. An empty path
/// fails with [`MapError::KeyNotFound`].
///
/// The returned reference borrows `map` mutably for as long as it lives.
///
/// ```
/// # use assoc::{arrays, omap};
/// let mut map = omap! { "a" => omap! { "b" => 1 }, "c" => 2 };
/// *arrays::get_ref(&mut map, ["a", "b"])? = 5.into();
/// *arrays::get_ref(&mut map, ["x", "y"])? = "new".into();
///
/// assert_eq!(*arrays::get(&map, ["a", "b"])?, 5);
/// assert_eq!(*arrays::get(&map, ["x", "y"])?, "new");
/// assert!(arrays::get_ref(&mut map, ["c", "d"]).unwrap_err().is_not_a_map());
/// # Ok::<(), assoc::Error>(())
/// ```
pub fn get_ref<'a>(
    map: &'a mut OrderedMap,
    path: impl Into<KeyPath>,
) -> crate::Result<&'a mut Value> {
    let path = path.into();
    let Some((last, parents)) = path.split_last() else {
        return Err(MapError::KeyNotFound {
            key: "(empty path)".to_string(),
        }
        .into());
    };

    check_traversable(map, &path, parents)?;

    let mut current = map;
    for (depth, segment) in parents.iter().enumerate() {
        let slot = current.entry_or_null(segment.clone());
        if slot.is_null() {
            trace!(path = %path.display_prefix(depth + 1), "Auto-vivifying nested map");
            *slot = Value::Map(OrderedMap::new());
        }
        let actual = slot.type_name();
        current = match slot.as_assoc_mut() {
            Some(inner) => inner,
            None => {
                return Err(MapError::NotAMap {
                    key: path.display_prefix(depth + 1),
                    actual,
                }
                .into());
            }
        };
    }

    Ok(current.entry_or_null(last.clone()))
}

/// Walks `parents` without mutating, failing on the first scalar in the way.
fn check_traversable(map: &OrderedMap, path: &KeyPath, parents: &[Key]) -> Result<(), MapError> {
    let mut current = Some(map);
    for (depth, segment) in parents.iter().enumerate() {
        let Some(inner) = current else {
            // Everything below a missing segment gets created
            break;
        };
        current = match inner.get(segment) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_assoc().ok_or_else(|| MapError::NotAMap {
                key: path.display_prefix(depth + 1),
                actual: value.type_name(),
            })?),
        };
    }
    Ok(())
}

/// Collects the leaf values of nested maps, depth-first and left to right.
///
/// With `preserve_keys` unset the result is a list keyed `0..n`. With it set,
/// leaf keys from every level share one map: a later leaf overwrites the value
/// of an earlier one with the same key, which keeps its first position.
///
/// ```
/// # use assoc::{arrays, omap};
/// let nested = omap![1, 2, omap![3, 4, omap![5, 6]]];
/// assert_eq!(arrays::flatten(&nested, false), omap![1, 2, 3, 4, 5, 6]);
/// ```
pub fn flatten(map: &OrderedMap, preserve_keys: bool) -> OrderedMap {
    let mut result = OrderedMap::new();
    let mut next: i64 = 0;
    walk_leaves(map, &mut |key, value| {
        if preserve_keys {
            result.insert(key.clone(), value.clone());
        } else {
            result.insert(next, value.clone());
            next += 1;
        }
    });
    result
}

fn walk_leaves<F>(map: &OrderedMap, visit: &mut F)
where
    F: FnMut(&Key, &Value),
{
    for (key, value) in map {
        match value {
            Value::Map(inner) => walk_leaves(inner, visit),
            leaf => visit(key, leaf),
        }
    }
}

/// Returns the entries whose value, as text, matches the regular expression
/// `pattern`.
///
/// Keys and order of the kept entries are preserved. See [`Value::to_text`]
/// for the text form of scalars; containers never match.
///
/// ```
/// # use assoc::{arrays, omap};
/// let map = omap! { "a" => 111, 1 => "b", "c" => "111b" };
/// assert_eq!(arrays::grep(&map, r"^\d+$")?, omap! { "a" => 111 });
/// assert!(arrays::grep(&map, "(").unwrap_err().is_pattern_error());
/// # Ok::<(), assoc::Error>(())
/// ```
pub fn grep(map: &OrderedMap, pattern: &str) -> crate::Result<OrderedMap> {
    grep_with(map, pattern, false)
}

/// Returns the scalar entries whose text form does *not* match `pattern`.
pub fn grep_invert(map: &OrderedMap, pattern: &str) -> crate::Result<OrderedMap> {
    grep_with(map, pattern, true)
}

fn grep_with(map: &OrderedMap, pattern: &str, invert: bool) -> crate::Result<OrderedMap> {
    let regex = Regex::new(pattern).map_err(|e| {
        debug!(pattern, error = %e, "Rejected grep pattern");
        MapError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(map
        .iter()
        .filter(|(_, value)| {
            value
                .to_text()
                .is_some_and(|text| regex.is_match(&text) != invert)
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect())
}

/// Splices the entries of `insertion` into `map` right before `key`.
///
/// When `key` is absent the entries are prepended. Keys of `insertion` that
/// already exist in `map` are overwritten where they stand.
///
/// ```
/// # use assoc::{arrays, omap};
/// let mut map = omap! { "first" => 10, "second" => 20 };
/// arrays::insert_before(&mut map, "first", omap! { "hello" => "world" });
/// assert_eq!(map, omap! { "hello" => "world", "first" => 10, "second" => 20 });
/// ```
pub fn insert_before(map: &mut OrderedMap, key: impl Into<Key>, insertion: OrderedMap) {
    let offset = map.get_index_of(key).unwrap_or(0);
    splice(map, offset, insertion);
}

/// Splices the entries of `insertion` into `map` right after `key`.
///
/// When `key` is absent the entries are appended. Keys of `insertion` that
/// already exist in `map` are overwritten where they stand.
pub fn insert_after(map: &mut OrderedMap, key: impl Into<Key>, insertion: OrderedMap) {
    let offset = map
        .get_index_of(key)
        .map_or(map.len(), |index| index + 1);
    splice(map, offset, insertion);
}

fn splice(map: &mut OrderedMap, mut offset: usize, insertion: OrderedMap) {
    for (key, value) in insertion {
        if let Some(slot) = map.get_mut(&key) {
            *slot = value;
        } else {
            map.insert_new_at(offset, key, value);
            offset += 1;
        }
    }
}

/// Returns true if the keys are exactly `0, 1, .., n-1` in that order.
///
/// An empty map is a list.
pub fn is_list(map: &OrderedMap) -> bool {
    map.keys()
        .enumerate()
        .all(|(index, key)| key.as_int() == i64::try_from(index).ok())
}

/// Applies `f` to every entry and collects the results under the same keys.
///
/// ```
/// # use assoc::{arrays, omap};
/// let map = omap!["foo", "bar", "baz"];
/// let doubled = arrays::map(&map, |value, _| value.as_text().unwrap_or_default().repeat(2));
/// assert_eq!(doubled, omap!["foofoo", "barbar", "bazbaz"]);
/// ```
pub fn map<F, R>(map: &OrderedMap, mut f: F) -> OrderedMap
where
    F: FnMut(&Value, &Key) -> R,
    R: Into<Value>,
{
    map.iter()
        .map(|(key, value)| (key.clone(), f(value, key).into()))
        .collect()
}

/// Merges two trees of maps.
///
/// String keys of `right` merge by key: a key missing from `left` is appended
/// with `right`'s value, two plain maps under the same key are merged by the
/// same rule, and on any other conflict the value from `left` wins.
///
/// Integer-keyed entries of `right` are list items. One whose key `left`
/// already holds is dropped in favor of `left`'s value; any other is appended
/// under `left`'s next free integer key, as [`OrderedMap::push`] would.
///
/// ```
/// # use assoc::{arrays, omap};
/// let left = omap! { "color" => omap! { "favorite" => "red" }, 0 => 5 };
/// let right = omap! { 0 => 10, "color" => omap! { "favorite" => "green", 1 => "blue" }, 2 => 11 };
///
/// assert_eq!(
///     arrays::merge_tree(&left, &right),
///     omap! { "color" => omap! { "favorite" => "red", 0 => "blue" }, 0 => 5, 1 => 11 },
/// );
/// ```
pub fn merge_tree(left: &OrderedMap, right: &OrderedMap) -> OrderedMap {
    let mut result = left.clone();
    for (key, right_value) in right {
        if key.is_int() {
            if !result.contains_key(key) {
                let appended = result.push(right_value.clone());
                trace!(from = %key, to = %appended, "Appending list entry during merge");
            }
            continue;
        }
        match result.get_mut(key) {
            Some(Value::Map(left_map)) => {
                if let Value::Map(right_map) = right_value {
                    *left_map = merge_tree(left_map, right_map);
                }
            }
            Some(_) => {}
            None => {
                result.insert(key.clone(), right_value.clone());
            }
        }
    }
    result
}

/// Turns integer-keyed entries into `value => Null` pairs.
///
/// Equivalent to [`normalize_with`] with a `Null` filling value.
pub fn normalize(map: &OrderedMap) -> crate::Result<OrderedMap> {
    normalize_with(map, Value::Null)
}

/// Turns integer-keyed entries into `value => filling` pairs.
///
/// String-keyed entries pass through unchanged and order is preserved. The
/// value becomes a key as described by `Key::try_from(&Value)`; a container
/// value fails with [`MapError::InvalidKey`].
///
/// ```
/// # use assoc::{arrays, omap};
/// let map = omap! { 1 => "first", "a" => "second" };
/// assert_eq!(
///     arrays::normalize_with(&map, "foobar")?,
///     omap! { "first" => "foobar", "a" => "second" },
/// );
/// # Ok::<(), assoc::Error>(())
/// ```
pub fn normalize_with(map: &OrderedMap, filling: impl Into<Value>) -> crate::Result<OrderedMap> {
    let filling = filling.into();
    let mut result = OrderedMap::with_capacity(map.len());
    for (key, value) in map {
        match key {
            Key::Int(_) => {
                result.insert(Key::try_from(value)?, filling.clone());
            }
            Key::Text(_) => {
                result.insert(key.clone(), value.clone());
            }
        }
    }
    Ok(result)
}

/// Removes the entry at `key` and returns its value.
///
/// Fails with [`MapError::KeyNotFound`] when the key is absent, leaving `map`
/// unchanged.
pub fn pick(map: &mut OrderedMap, key: impl Into<Key>) -> crate::Result<Value> {
    let key = key.into();
    map.remove(&key).ok_or_else(|| {
        MapError::KeyNotFound {
            key: key.to_string(),
        }
        .into()
    })
}

/// Removes the entry at `key` and returns its value, or `default` when absent.
pub fn pick_or(map: &mut OrderedMap, key: impl Into<Key>, default: impl Into<Value>) -> Value {
    map.remove(key).unwrap_or_else(|| default.into())
}

/// Relabels the entry at `old_key` as `new_key` without moving it.
///
/// Returns `false` and leaves `map` unchanged when `old_key` is absent.
/// If `new_key` already labels another entry, that entry is displaced: the
/// renamed value ends up at the earlier of the two positions.
///
/// ```
/// # use assoc::{arrays, omap};
/// let mut map = omap! { "first" => 10, "second" => 20 };
/// assert!(arrays::rename_key(&mut map, "first", "renamed"));
/// assert_eq!(map, omap! { "renamed" => 10, "second" => 20 });
/// assert!(!arrays::rename_key(&mut map, "missing", "other"));
/// ```
pub fn rename_key(map: &mut OrderedMap, old_key: impl Into<Key>, new_key: impl Into<Key>) -> bool {
    let (old_key, new_key) = (old_key.into(), new_key.into());
    let Some(old_index) = map.get_index_of(&old_key) else {
        return false;
    };
    if old_key == new_key {
        return true;
    }

    let existing = map.get_index_of(&new_key);
    let Some((_, value)) = map.remove_full(&old_key) else {
        return false;
    };

    match existing {
        Some(existing_index) => {
            debug!(%old_key, %new_key, "Rename displaced an existing entry");
            map.insert(new_key, value);
            if existing_index > old_index {
                // Removing the old entry shifted the displaced one back by one
                map.move_index(existing_index - 1, old_index);
            }
        }
        None => map.insert_new_at(old_index, new_key, value),
    }
    true
}

/// Returns the zero-based position of `key` in iteration order.
pub fn get_key_offset(map: &OrderedMap, key: impl Into<Key>) -> Option<usize> {
    map.get_index_of(key)
}

/// Copies every entry of `map` onto `target` as a member.
///
/// Members of `target` that `map` does not mention are left untouched.
pub fn to_object<T>(map: &OrderedMap, target: &mut T)
where
    T: ObjectLike + ?Sized,
{
    for (key, value) in map {
        target.set_member(key.clone(), value.clone());
    }
}

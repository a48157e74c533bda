//! Key paths for nested access.
//!
//! A [`KeyPath`] is an ordered sequence of keys, one per nesting level. Paths
//! are never parsed out of strings: a string converts to a single-segment path,
//! since keys may legitimately contain any character.
//!
//! # Usage
//!
//! ```rust
//! use assoc::{map::{Key, KeyPath}, path};
//!
//! let built = KeyPath::new().push("user").push("emails").push(0);
//! let literal = path!["user", "emails", 0];
//! let from_array = KeyPath::from(["user", "emails", "0"]);
//!
//! assert_eq!(built, literal);
//! assert_eq!(built, from_array);
//! assert_eq!(built.segments()[2], Key::Int(0));
//! ```

use std::fmt;

use super::Key;

/// An owned sequence of keys addressing a nested entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<Key>,
}

impl KeyPath {
    /// Creates a new empty path.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Appends a segment and returns the extended path.
    pub fn push(mut self, key: impl Into<Key>) -> Self {
        self.segments.push(key.into());
        self
    }

    /// Returns the segments in traversal order.
    pub fn segments(&self) -> &[Key] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Splits off the final segment.
    pub fn split_last(&self) -> Option<(&Key, &[Key])> {
        self.segments.split_last()
    }

    /// Renders the first `depth` segments, for error messages.
    pub(crate) fn display_prefix(&self, depth: usize) -> String {
        render(&self.segments[..depth.min(self.segments.len())])
    }
}

fn render(segments: &[Key]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.segments))
    }
}

impl From<Key> for KeyPath {
    fn from(key: Key) -> Self {
        Self {
            segments: vec![key],
        }
    }
}

impl From<&Key> for KeyPath {
    fn from(key: &Key) -> Self {
        Self::from(key.clone())
    }
}

impl From<&KeyPath> for KeyPath {
    fn from(path: &KeyPath) -> Self {
        path.clone()
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        Self::from(Key::from(key))
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        Self::from(Key::from(key))
    }
}

impl From<i64> for KeyPath {
    fn from(key: i64) -> Self {
        Self::from(Key::Int(key))
    }
}

impl From<i32> for KeyPath {
    fn from(key: i32) -> Self {
        Self::from(Key::from(key))
    }
}

impl From<usize> for KeyPath {
    fn from(key: usize) -> Self {
        Self::from(Key::from(key))
    }
}

impl<K: Into<Key>> From<Vec<K>> for KeyPath {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for KeyPath {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K: Into<Key> + Clone> From<&[K]> for KeyPath {
    fn from(keys: &[K]) -> Self {
        keys.iter().cloned().collect()
    }
}

impl<K: Into<Key>> FromIterator<K> for KeyPath {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Builds a [`KeyPath`] from a list of keys of any key-convertible type.
///
/// ```
/// # use assoc::path;
/// let path = path!["a", 1, "c"];
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "a.1.c");
/// assert!(path![].is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::map::KeyPath::new()
    };
    ($($segment:expr),+ $(,)?) => {
        $crate::map::KeyPath::new()$(.push($segment))+
    };
}

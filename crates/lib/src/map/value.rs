//! Value types stored in ordered maps.
//!
//! A [`Value`] is either a scalar (null, bool, integer, float, text) or an
//! associative container: a plain [`OrderedMap`] or a [`DualView`] wrapping one.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use super::{Key, MapError, OrderedMap};
use crate::view::DualView;

/// Shared null returned by lenient reads.
pub(crate) static NULL: Value = Value::Null;

/// Values that can be stored in an [`OrderedMap`].
///
/// # Direct Comparisons
///
/// `Value` compares directly with primitives:
///
/// ```
/// # use assoc::map::Value;
/// let text = Value::from("hello");
/// let number = Value::from(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(number == "42"));
/// ```
///
/// # Lenient indexing
///
/// Indexing a value never panics on reads: indexing a scalar or a missing key
/// yields [`Value::Null`].
///
/// ```
/// # use assoc::{map::Value, omap};
/// let value = Value::from(omap! { "inner" => omap! { "a" => "b" } });
/// assert_eq!(value["inner"]["a"], "b");
/// assert!(value["inner"]["missing"].is_null());
/// assert!(value["inner"]["a"]["deeper"].is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    // Scalars
    /// Null/absent value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
    /// UTF-8 text
    Text(String),

    // Associative containers
    /// Nested plain map
    Map(OrderedMap),
    /// Nested dual-view wrapper
    View(DualView),
}

impl Value {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for plain maps and views
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Map(_) | Value::View(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Map(_) => "map",
            Value::View(_) => "view",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float; integers are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            Value::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Attempts to convert to a string slice
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the plain map, if this is one
    pub fn as_map(&self) -> Option<&OrderedMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the plain map mutably, if this is one
    pub fn as_map_mut(&mut self) -> Option<&mut OrderedMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the view, if this is one
    pub fn as_view(&self) -> Option<&DualView> {
        match self {
            Value::View(view) => Some(view),
            _ => None,
        }
    }

    /// Returns the view mutably, if this is one
    pub fn as_view_mut(&mut self) -> Option<&mut DualView> {
        match self {
            Value::View(view) => Some(view),
            _ => None,
        }
    }

    /// Returns the backing map of either container kind
    pub fn as_assoc(&self) -> Option<&OrderedMap> {
        match self {
            Value::Map(map) => Some(map),
            Value::View(view) => Some(view.as_map()),
            _ => None,
        }
    }

    /// Returns the backing map of either container kind, mutably
    pub fn as_assoc_mut(&mut self) -> Option<&mut OrderedMap> {
        match self {
            Value::Map(map) => Some(map),
            Value::View(view) => Some(view.as_map_mut()),
            _ => None,
        }
    }

    /// Converts a scalar to its text form, as used by pattern matching.
    ///
    /// `Null` is the empty string, `true` is `"1"` and `false` is empty.
    /// Containers have no text form.
    ///
    /// ```
    /// # use assoc::map::Value;
    /// assert_eq!(Value::from(111).to_text().as_deref(), Some("111"));
    /// assert_eq!(Value::from(true).to_text().as_deref(), Some("1"));
    /// assert_eq!(Value::from(2.5).to_text().as_deref(), Some("2.5"));
    /// assert_eq!(Value::Null.to_text().as_deref(), Some(""));
    /// ```
    pub fn to_text(&self) -> Option<String> {
        match self {
            Value::Null => Some(String::new()),
            Value::Bool(true) => Some("1".to_string()),
            Value::Bool(false) => Some(String::new()),
            Value::Int(n) => Some(n.to_string()),
            Value::Float(n) => Some(n.to_string()),
            Value::Text(s) => Some(s.clone()),
            Value::Map(_) | Value::View(_) => None,
        }
    }

    /// Replaces every nested view with its plain map, recursively
    pub fn into_plain(self) -> Value {
        match self {
            Value::View(view) => Value::Map(view.into_map()),
            Value::Map(map) => Value::Map(map.into_plain()),
            scalar => scalar,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Map(map) => write!(f, "{map}"),
            Value::View(view) => write!(f, "{}", view.as_map()),
        }
    }
}

impl<K: Into<Key>> Index<K> for Value {
    type Output = Value;

    fn index(&self, key: K) -> &Value {
        self.as_assoc()
            .and_then(|map| map.get(key))
            .unwrap_or(&NULL)
    }
}

/// Write access by key.
///
/// A `Null` value turns into an empty map first, and a missing key is
/// appended with a `Null` value.
///
/// # Panics
///
/// Panics when the value is a scalar other than `Null`.
impl<K: Into<Key>> IndexMut<K> for Value {
    fn index_mut(&mut self, key: K) -> &mut Value {
        if self.is_null() {
            *self = Value::Map(OrderedMap::new());
        }
        let type_name = self.type_name();
        match self.as_assoc_mut() {
            Some(map) => map.entry_or_null(key.into()),
            None => panic!("cannot index into a value of type {type_name}"),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        // Out-of-range integers degrade to floats
        i64::try_from(value)
            .map(Value::Int)
            .unwrap_or(Value::Float(value as f64))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Int(n) => Value::Int(n),
            Key::Text(s) => Value::Text(s),
        }
    }
}

impl From<OrderedMap> for Value {
    fn from(value: OrderedMap) -> Self {
        Value::Map(value)
    }
}

impl From<DualView> for Value {
    fn from(value: DualView) -> Self {
        Value::View(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Converts a value into a key.
///
/// Text goes through [`to_key`](super::to_key), booleans become `0`/`1`, `Null`
/// becomes the empty string and floats are truncated. Containers cannot be keys.
impl TryFrom<&Value> for Key {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Key::Text(String::new())),
            Value::Bool(b) => Ok(Key::from(*b)),
            Value::Int(n) => Ok(Key::Int(*n)),
            Value::Float(n) => Ok(Key::Int(n.trunc() as i64)),
            Value::Text(s) => Ok(Key::from(s.as_str())),
            Value::Map(_) | Value::View(_) => Err(MapError::InvalidKey {
                actual: value.type_name(),
            }),
        }
    }
}

// TryFrom implementations for typed extraction
impl TryFrom<&Value> for String {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            _ => Err(MapError::TypeMismatch {
                expected: "text",
                actual: value.type_name(),
            }),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = MapError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Text(s) => Ok(s),
            _ => Err(MapError::TypeMismatch {
                expected: "text",
                actual: value.type_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for i64 {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(*n),
            _ => Err(MapError::TypeMismatch {
                expected: "int",
                actual: value.type_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_float().ok_or(MapError::TypeMismatch {
            expected: "float",
            actual: value.type_name(),
        })
    }
}

impl TryFrom<&Value> for bool {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(*b),
            _ => Err(MapError::TypeMismatch {
                expected: "bool",
                actual: value.type_name(),
            }),
        }
    }
}

impl TryFrom<&Value> for OrderedMap {
    type Error = MapError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Map(map) => Ok(map.clone()),
            Value::View(view) => Ok(view.to_map()),
            _ => Err(MapError::TypeMismatch {
                expected: "map",
                actual: value.type_name(),
            }),
        }
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<OrderedMap> for Value {
    fn eq(&self, other: &OrderedMap) -> bool {
        matches!(self, Value::Map(map) if map == other)
    }
}

// Reverse implementations for symmetry
impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i32 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

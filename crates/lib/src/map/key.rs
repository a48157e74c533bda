//! Keys of an ordered map and the canonical key coercion rule.
//!
//! A key is either an integer or a string. Text that spells a canonical decimal
//! integer is always stored as an integer key, so `"7"` and `7` address the same
//! entry. Every conversion into [`Key`] goes through [`to_key`], which keeps
//! insertion, lookup, and rename in agreement.

use std::fmt;

/// A key in an [`OrderedMap`](super::OrderedMap).
///
/// # Examples
///
/// ```
/// use assoc::map::Key;
///
/// assert_eq!(Key::from("42"), Key::Int(42));
/// assert_eq!(Key::from("042"), Key::Text("042".to_string()));
/// assert_eq!(Key::from(7), Key::Int(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key
    Int(i64),
    /// String key that does not spell a canonical integer
    Text(String),
}

/// Converts text into its canonical key form.
///
/// The text becomes an integer key if and only if it is the canonical decimal
/// spelling of an `i64`: `"0"`, or an optional `-` followed by digits without a
/// leading zero. Anything else is kept verbatim as a string key, including
/// `"01"`, `"+1"`, `"1.0"`, `"-0"` and values that overflow `i64`.
///
/// # Examples
///
/// ```
/// use assoc::map::{Key, to_key};
///
/// assert_eq!(to_key("1"), Key::Int(1));
/// assert_eq!(to_key("-15"), Key::Int(-15));
/// assert_eq!(to_key("01"), Key::Text("01".to_string()));
/// assert_eq!(to_key("+1"), Key::Text("+1".to_string()));
/// assert_eq!(to_key("1.0"), Key::Text("1.0".to_string()));
/// ```
pub fn to_key(value: &str) -> Key {
    match parse_canonical(value) {
        Some(n) => Key::Int(n),
        None => Key::Text(value.to_string()),
    }
}

/// Parses `value` as an integer only if it is written in canonical form.
fn parse_canonical(value: &str) -> Option<i64> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(b'0') => {
            // "0" is canonical, "-0" and "05" are not
            return (value == "0").then_some(0);
        }
        Some(b'1'..=b'9') => {}
        _ => return None,
    }
    if !bytes.all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

impl Key {
    /// Returns the integer if this is an integer key
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Text(_) => None,
        }
    }

    /// Returns the string if this is a string key
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Text(s) => Some(s),
        }
    }

    /// Returns true for integer keys
    pub fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns true for string keys
    pub fn is_text(&self) -> bool {
        matches!(self, Key::Text(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        to_key(value)
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match parse_canonical(&value) {
            Some(n) => Key::Int(n),
            None => Key::Text(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        to_key(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Int(value as i64)
    }
}

impl PartialEq<str> for Key {
    fn eq(&self, other: &str) -> bool {
        *self == to_key(other)
    }
}

impl PartialEq<&str> for Key {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Key {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Key::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Key {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Key::Int(n) if *n == *other as i64)
    }
}

impl serde::Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Key::Int(n) => serializer.serialize_i64(*n),
            Key::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct KeyVisitor;

        impl serde::de::Visitor<'_> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an integer or a string key")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Key, E> {
                Ok(Key::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Key, E> {
                Ok(i64::try_from(v)
                    .map(Key::Int)
                    .unwrap_or_else(|_| Key::Text(v.to_string())))
            }

            fn visit_str<E>(self, v: &str) -> Result<Key, E> {
                Ok(to_key(v))
            }

            fn visit_string<E>(self, v: String) -> Result<Key, E> {
                Ok(Key::from(v))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}

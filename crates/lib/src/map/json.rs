//! JSON and serde interop for ordered maps.
//!
//! Maps whose keys are exactly `0..n` serialize as sequences, every other map
//! serializes as a JSON object with stringified keys. On the way back, object
//! keys go through [`to_key`](super::to_key) and sequences become list-shaped
//! maps, so a serialize/deserialize round trip preserves keys and order.
//!
//! ```
//! use assoc::{map::OrderedMap, omap};
//!
//! let map = omap! { "name" => "Alice", "tags" => omap!["a", "b"], "7" => true };
//! let json = map.to_json_string()?;
//! assert_eq!(json, r#"{"name":"Alice","tags":["a","b"],"7":true}"#);
//!
//! let back = OrderedMap::from_json_str(&json)?;
//! assert_eq!(back, map);
//! # Ok::<(), assoc::Error>(())
//! ```

use std::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeMap, SerializeSeq},
};

use super::{Key, MapError, OrderedMap, Value};
use crate::arrays;

impl OrderedMap {
    /// Parses a JSON document whose root is an object or an array.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        match serde_json::from_str::<Value>(json)? {
            Value::Map(map) => Ok(map),
            other => Err(MapError::NotAMap {
                key: "(root)".to_string(),
                actual: other.type_name(),
            }
            .into()),
        }
    }

    /// Renders the map as compact JSON.
    pub fn to_json_string(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for OrderedMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.is_empty() && arrays::is_list(self) {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        } else {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (key, value) in self {
                map.serialize_entry(key, value)?;
            }
            map.end()
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Map(map) => map.serialize(serializer),
            Value::View(view) => view.as_map().serialize(serializer),
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON-compatible value")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::from(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::Text(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut map = OrderedMap::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element::<Value>()? {
            map.push(value);
        }
        Ok(Value::Map(map))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut map = OrderedMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<Key, Value>()? {
            map.insert(key, value);
        }
        Ok(Value::Map(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for OrderedMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Map(map) => Ok(map),
            other => Err(serde::de::Error::custom(format!(
                "expected a map or a sequence, found {}",
                other.type_name()
            ))),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n
                    .as_u64()
                    .map(Value::from)
                    .or_else(|| n.as_f64().map(Value::Float))
                    .unwrap_or(Value::Null),
            },
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                let mut map = OrderedMap::with_capacity(items.len());
                for item in items {
                    map.push(Value::from(item));
                }
                Value::Map(map)
            }
            serde_json::Value::Object(object) => Value::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

use assoc::{
    map::{Key, OrderedMap, Value},
    omap,
};

/// The nested map used by most lookup tests
pub fn setup_nested_map() -> OrderedMap {
    omap! {
        "a" => omap! { "b" => 1 },
        "c" => 2,
        "list" => omap!["x", "y", "z"],
    }
}

/// Collect the keys of a map in iteration order
pub fn keys_of(map: &OrderedMap) -> Vec<Key> {
    map.keys().cloned().collect()
}

/// Collect the keys of a map in iteration order, rendered as text
pub fn key_strings(map: &OrderedMap) -> Vec<String> {
    map.keys().map(ToString::to_string).collect()
}

/// Assert that a value is text with the expected contents
pub fn assert_text_value(value: &Value, expected: &str) {
    match value {
        Value::Text(actual) => assert_eq!(actual, expected),
        other => panic!("Expected text value '{expected}', got: {other:?}"),
    }
}

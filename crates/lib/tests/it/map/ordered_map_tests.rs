//! OrderedMap container tests
//!
//! Insertion order, overwrite-in-place, removal and the next free integer key.

use assoc::{
    map::{Key, OrderedMap, Value},
    omap,
};

use crate::helpers::*;

#[test]
fn test_overwrite_keeps_position() {
    let mut map = omap! { "a" => 1, "b" => 2, "c" => 3 };
    let previous = map.insert("b", 20);
    assert_eq!(previous, Some(Value::Int(2)));
    assert_eq!(key_strings(&map), ["a", "b", "c"]);
    assert_eq!(map.get("b").and_then(Value::as_int), Some(20));
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut map = omap! { "a" => 1, "b" => 2, "c" => 3, "d" => 4 };
    assert_eq!(map.remove("b"), Some(Value::Int(2)));
    assert_eq!(map.remove("missing"), None);
    assert_eq!(key_strings(&map), ["a", "c", "d"]);
}

#[test]
fn test_push_uses_next_free_integer() {
    let mut map = OrderedMap::new();
    assert_eq!(map.push("first"), Key::Int(0));

    map.insert(10, "ten");
    map.insert("name", "text keys do not count");
    assert_eq!(map.push("next"), Key::Int(11));

    // Removal never lowers the next free key
    map.remove(11);
    map.remove(10);
    assert_eq!(map.push("after removal"), Key::Int(12));
}

#[test]
fn test_push_after_negative_keys_starts_at_zero() {
    let mut map = omap! { -5 => "negative" };
    assert_eq!(map.push("x"), Key::Int(0));
}

#[test]
fn test_clear_resets_next_free() {
    let mut map = omap!["a", "b", "c"];
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.push("again"), Key::Int(0));
}

#[test]
fn test_push_at_saturated_key_overwrites_last_slot() {
    let mut map = omap! { i64::MAX => "a" };
    assert_eq!(map.next_free_index(), i64::MAX);
    assert_eq!(map.push("b"), Key::Int(i64::MAX));
    assert_eq!(map, omap! { i64::MAX => "b" });
}

#[test]
fn test_equality_is_order_sensitive() {
    let ab = omap! { "a" => 1, "b" => 2 };
    let ba = omap! { "b" => 2, "a" => 1 };
    assert_ne!(ab, ba);
    assert_eq!(ab, omap! { "a" => 1, "b" => 2 });
}

#[test]
fn test_positional_access() {
    let map = omap! { "x" => 1, "y" => 2, "z" => 3 };
    assert_eq!(map.get_index_of("z"), Some(2));
    assert_eq!(map.get_index(1).map(|(k, _)| k.to_string()), Some("y".to_string()));
    assert_eq!(map.first().map(|(k, _)| k.clone()), Some(Key::from("x")));
    assert_eq!(map.last().and_then(|(_, v)| v.as_int()), Some(3));
}

#[test]
fn test_collect_and_extend() {
    let mut map: OrderedMap = [("a", 1), ("b", 2)].into_iter().collect();
    map.extend([("c", 3), ("a", 10)]);
    assert_eq!(map, omap! { "a" => 10, "b" => 2, "c" => 3 });
    assert_eq!(keys_of(&map), vec![Key::from("a"), Key::from("b"), Key::from("c")]);
}

#[test]
fn test_iter_mut_updates_in_place() {
    let mut map = omap![1, 2, 3];
    for (_, value) in &mut map {
        if let Some(n) = value.as_int() {
            *value = Value::Int(n * 10);
        }
    }
    assert_eq!(map, omap![10, 20, 30]);
}

#[test]
fn test_display() {
    let map = omap! { "a" => 1, "b" => "two", "c" => omap![true] };
    assert_eq!(map.to_string(), r#"{a: 1, b: "two", c: {0: true}}"#);
}

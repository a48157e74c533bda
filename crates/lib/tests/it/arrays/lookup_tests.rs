//! Lookup tests
//!
//! `get`, `get_or`, `get_ref` and `get_key_offset`.

use assoc::{
    arrays,
    map::{OrderedMap, Value},
    omap, path,
};

use crate::helpers::*;

#[test]
fn test_get_with_default() {
    let empty = OrderedMap::new();
    let default = Value::from("default");
    assert_eq!(*arrays::get_or(&empty, "foo", &default), "default");
}

#[test]
fn test_get_missing_key_fails() {
    let err = arrays::get(&OrderedMap::new(), "foo").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "map");
}

#[test]
fn test_get_nested_path() {
    let map = setup_nested_map();
    assert_eq!(*arrays::get(&map, ["a", "b"]).unwrap(), 1);
    assert_eq!(*arrays::get(&map, path!["list", 2]).unwrap(), "z");
    assert!(arrays::get(&map, "a").unwrap().as_map().is_some());
}

#[test]
fn test_get_error_reports_failing_prefix() {
    let map = setup_nested_map();
    let err = arrays::get(&map, ["a", "missing", "deeper"]).unwrap_err();
    match err {
        assoc::Error::Map(map_err) => assert_eq!(map_err.key(), Some("a.missing")),
        other => panic!("Expected map error, got: {other:?}"),
    }
}

#[test]
fn test_get_ref_reads_existing_value() {
    let mut map = omap! { "a" => 1 };
    assert_eq!(*arrays::get_ref(&mut map, "a").unwrap(), 1);

    let mut map = setup_nested_map();
    assert_eq!(*arrays::get_ref(&mut map, ["a", "b"]).unwrap(), 1);
}

#[test]
fn test_get_ref_writes_through() {
    let mut map = setup_nested_map();
    *arrays::get_ref(&mut map, ["a", "b"]).unwrap() = Value::from("changed");
    assert_text_value(arrays::get(&map, ["a", "b"]).unwrap(), "changed");
}

#[test]
fn test_get_ref_creates_missing_path_at_end() {
    let mut map = omap! { "first" => 1 };
    *arrays::get_ref(&mut map, ["new", "leaf"]).unwrap() = Value::from(2);
    assert_eq!(key_strings(&map), ["first", "new"]);
    assert_eq!(map, omap! { "first" => 1, "new" => omap! { "leaf" => 2 } });
}

#[test]
fn test_get_ref_through_scalar_fails_without_mutation() {
    let mut map = setup_nested_map();
    let before = map.clone();
    let err = arrays::get_ref(&mut map, ["c", "d", "e"]).unwrap_err();
    assert!(err.is_not_a_map());
    assert_eq!(map, before);
}

#[test]
fn test_get_ref_empty_path_fails() {
    let mut map = setup_nested_map();
    assert!(arrays::get_ref(&mut map, path![]).unwrap_err().is_not_found());
}

#[test]
fn test_get_key_offset() {
    let map = omap! { "first" => 10, "second" => 20 };
    assert_eq!(arrays::get_key_offset(&map, "first"), Some(0));
    assert_eq!(arrays::get_key_offset(&map, "second"), Some(1));
    assert_eq!(arrays::get_key_offset(&map, "not-exists"), None);
}

#[test]
fn test_get_key_offset_normalizes_key() {
    let map = omap!["a", "b"];
    assert_eq!(arrays::get_key_offset(&map, "1"), Some(1));
    assert_eq!(arrays::get_key_offset(&map, "01"), None);
}

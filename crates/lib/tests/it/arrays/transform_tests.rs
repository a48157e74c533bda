//! Whole-map transform tests
//!
//! Predicates, flatten, grep, map, merge_tree, normalize and is_list.

use assoc::{
    arrays,
    map::{Key, OrderedMap, Value},
    omap,
    view::DualView,
};

use crate::helpers::*;

#[test]
fn test_every() {
    let map = omap![1, 30, 39, 29, 10, 13];
    assert!(arrays::every(&map, |value, _| value
        .as_int()
        .is_some_and(|n| n < 40)));
    assert!(arrays::every(&OrderedMap::new(), |_, _| false));
}

#[test]
fn test_some() {
    let map = omap![1, 2, 3, 4];
    assert!(arrays::some(&map, |value, _| value
        .as_int()
        .is_some_and(|n| n % 2 == 0)));
    assert!(!arrays::some(&OrderedMap::new(), |_, _| true));
}

#[test]
fn test_every_is_not_some_of_negation() {
    let is_small = |value: &Value, _: &Key| value.as_int().is_some_and(|n| n < 10);
    for map in [omap![1, 2, 3], omap![1, 20, 3], omap![], omap![50]] {
        assert_eq!(
            arrays::every(&map, is_small),
            !arrays::some(&map, |value, key| !is_small(value, key))
        );
    }
}

#[test]
fn test_flatten() {
    let flat = arrays::flatten(&omap![1, 2, omap![3, 4, omap![5, 6]]], false);
    assert_eq!(flat, omap![1, 2, 3, 4, 5, 6]);
    assert!(arrays::is_list(&flat));
}

#[test]
fn test_flatten_preserving_keys() {
    let map = omap! { "a" => 1, "inner" => omap! { "b" => 2, "deeper" => omap! { "c" => 3 } } };
    assert_eq!(
        arrays::flatten(&map, true),
        omap! { "a" => 1, "b" => 2, "c" => 3 }
    );
}

#[test]
fn test_flatten_empty_nested_maps_vanish() {
    let map = omap![omap![], 1, omap![omap![]]];
    assert_eq!(arrays::flatten(&map, false), omap![1]);
}

#[test]
fn test_grep() {
    let map = omap! { "a" => 111, 1 => "b", "c" => "111b" };
    assert_eq!(arrays::grep(&map, r"^\d+$").unwrap(), omap! { "a" => 111 });
}

#[test]
fn test_grep_and_invert_partition_scalars() {
    let map = omap! { "a" => 111, 1 => "b", "c" => "111b", "d" => 2.5 };
    let kept = arrays::grep(&map, r"^\d+$").unwrap();
    let dropped = arrays::grep_invert(&map, r"^\d+$").unwrap();
    assert_eq!(kept.len() + dropped.len(), map.len());
    assert_eq!(key_strings(&dropped), ["1", "c", "d"]);
}

#[test]
fn test_map() {
    let map = omap!["foo", "bar", "baz"];
    let doubled = arrays::map(&map, |value, _| value.as_text().unwrap_or_default().repeat(2));
    assert_eq!(doubled, omap!["foofoo", "barbar", "bazbaz"]);
}

#[test]
fn test_map_with_keys() {
    let map = omap! { "x" => 1, "y" => 2 };
    let tagged = arrays::map(&map, |value, key| format!("{key}:{value}"));
    assert_eq!(tagged, omap! { "x" => "x:1", "y" => "y:2" });
}

#[test]
fn test_merge_tree() {
    let left = omap! { "color" => omap! { "favorite" => "red" }, 0 => 5 };
    let right = omap! {
        0 => 10,
        "color" => omap! { "favorite" => "green", 1 => "blue" },
        2 => 11,
    };
    assert_eq!(
        arrays::merge_tree(&left, &right),
        omap! { "color" => omap! { "favorite" => "red", 0 => "blue" }, 0 => 5, 1 => 11 }
    );
}

#[test]
fn test_merge_tree_with_list_keyed_right_side() {
    // Same merge with the right side written as a list literal
    let left = omap! { "color" => omap! { "favorite" => "red" }, 0 => 5 };
    let mut right = omap![10];
    right.insert("color", omap! { "favorite" => "green", 0 => "blue" });
    right.push(11);
    assert_eq!(
        arrays::merge_tree(&left, &right),
        omap! { "color" => omap! { "favorite" => "red", 0 => "blue" }, 0 => 5, 1 => 11 }
    );
}

#[test]
fn test_merge_tree_with_empty_sides() {
    let map = setup_nested_map();
    assert_eq!(arrays::merge_tree(&map, &OrderedMap::new()), map);
    assert_eq!(arrays::merge_tree(&OrderedMap::new(), &map), map);
}

#[test]
fn test_merge_tree_does_not_descend_into_views() {
    let left = omap! { "v" => DualView::from(omap! { "a" => 1 }) };
    let right = omap! { "v" => omap! { "b" => 2 } };
    assert_eq!(arrays::merge_tree(&left, &right), left);
}

#[test]
fn test_normalize() {
    let map = omap! { 1 => "first", "a" => "second" };
    assert_eq!(
        arrays::normalize(&map).unwrap(),
        omap! { "first" => Value::Null, "a" => "second" }
    );
    assert_eq!(
        arrays::normalize_with(&map, "foobar").unwrap(),
        omap! { "first" => "foobar", "a" => "second" }
    );
}

#[test]
fn test_normalize_container_value_fails() {
    let err = arrays::normalize(&omap![omap![1]]).unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_is_list() {
    assert!(arrays::is_list(&omap!["a", "b", "c"]));
    assert!(!arrays::is_list(&omap! { 4 => 1, 5 => 2, 6 => 3 }));
    assert!(!arrays::is_list(&omap! { "a" => 1, "b" => 2 }));
}

#[test]
fn test_is_list_after_removal() {
    let mut map = omap!["a", "b", "c"];
    map.remove(1);
    assert!(!arrays::is_list(&map));
}

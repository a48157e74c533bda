use assoc::{arrays, map::OrderedMap, omap, view::DualView};

#[test]
fn test_json_document_round_trip_keeps_order() {
    let json = r#"{"zeta":1,"alpha":{"list":["x","y"],"flag":true},"empty":{},"none":null}"#;
    let map = OrderedMap::from_json_str(json).unwrap();
    assert_eq!(map.to_json_string().unwrap(), json);
}

#[test]
fn test_parsed_arrays_are_lists() {
    let map = OrderedMap::from_json_str(r#"[10, 20, 30]"#).unwrap();
    assert!(arrays::is_list(&map));
    assert_eq!(map.next_free_index(), 3);
}

#[test]
fn test_invalid_json_is_serialization_error() {
    let err = OrderedMap::from_json_str("{not json").unwrap_err();
    assert!(err.is_serialization_error());
    assert_eq!(err.module(), "serialize");
}

#[test]
fn test_scalar_root_is_not_a_map() {
    let err = OrderedMap::from_json_str(r#""text""#).unwrap_err();
    assert!(err.is_not_a_map());
    assert_eq!(err.module(), "map");
}

#[test]
fn test_view_serializes_like_its_map() {
    let map = omap! { "a" => omap! { "b" => 1 } };
    let view = DualView::from(map.clone());
    assert_eq!(
        serde_json::to_string(&view).unwrap(),
        map.to_json_string().unwrap()
    );
}

#[test]
fn test_view_deserializes_recursively() {
    let view: DualView = serde_json::from_str(r#"{"inner":{"a":"b"}}"#).unwrap();
    assert!(view["inner"].as_view().is_some());
    assert_eq!(view["inner"]["a"], "b");
}

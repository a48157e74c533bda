use assoc::{
    map::{OrderedMap, Value},
    omap,
    view::DualView,
};

fn source_map() -> OrderedMap {
    omap! { "foo" => 123, "bar" => 456, "inner" => omap! { "a" => "b" } }
}

#[test]
fn test_from_map_recursive() {
    let hash = DualView::from_map(source_map(), true);
    assert_eq!(*hash.member("foo"), 123);
    assert_eq!(*hash.member("bar"), 456);

    let inner = hash.member("inner").as_view().expect("inner should be a view");
    assert_eq!(*inner.member("a"), "b");
    assert_eq!(hash["inner"]["a"], "b");
}

#[test]
fn test_from_map_shallow() {
    let hash = DualView::from_map(source_map(), false);
    assert!(hash["inner"].as_map().is_some());
    assert!(hash["inner"].as_view().is_none());
    assert_eq!(hash["inner"]["a"], "b");
    assert_eq!(hash.as_map(), &source_map());
}

#[test]
fn test_from_map_wraps_every_depth() {
    let deep = omap! { "l1" => omap! { "l2" => omap! { "l3" => 1 } } };
    let hash = DualView::from(deep);
    let l2 = hash["l1"]
        .as_view()
        .and_then(|l1| l1.member("l2").as_view())
        .expect("every level should be a view");
    assert_eq!(l2["l3"], 1);
}

#[test]
fn test_round_trip_restores_plain_map() {
    for recursive in [true, false] {
        let hash = DualView::from_map(source_map(), recursive);
        assert_eq!(hash.to_map(), source_map());
        assert_eq!(OrderedMap::from(hash), source_map());
    }
}

#[test]
fn test_later_writes_are_stored_as_given() {
    let mut hash = DualView::new();
    hash.set_member("plain", omap! { "a" => 1 });
    assert!(hash["plain"].as_map().is_some());
    assert!(hash["plain"].as_view().is_none());
}

#[test]
fn test_views_are_independent_copies() {
    let source = source_map();
    let mut hash = DualView::from(source.clone());
    hash.set_member("foo", 0);
    assert_eq!(source.get("foo"), Some(&Value::Int(123)));
}

#[test]
fn test_as_map_mut_edits_backing_map() {
    let mut hash = DualView::from(source_map());
    hash.as_map_mut().remove("bar");
    assert!(!hash.has_member("bar"));
    assert!(!hash.is_empty());
}

//! `shape!` and `dispatch!`.

use std::collections::{BTreeMap, HashSet};

use collection_caps::prelude::*;
use collection_caps::{dispatch, shape};

fn kind<S: Shape + ?Sized>(value: &S) -> &'static str {
    dispatch!(value, {
        IndexedCollection => "sequence",
        FixedSizeIndexedCollection => "array",
        Collection => "bag",
        KeyedCollection => "map",
        ReadonlyKeyedCollection => "view",
        _ => "opaque",
    })
}

#[test]
fn test_dispatch_picks_first_match() {
    assert_eq!(kind(&vec![1]), "sequence");
    assert_eq!(kind(&[1, 2]), "array");
    assert_eq!(kind(&HashSet::from([1])), "bag");
    assert_eq!(kind(&BTreeMap::from([(1, 1)])), "map");
    assert_eq!(kind(&3_i64), "opaque");
    assert_eq!(kind("text"), "opaque");

    let view = DynamicShape::implementing(Interface::ReadonlyKeyedCollection);
    assert_eq!(kind(&view), "view");
}

#[test]
fn test_shape_macro() {
    let iterable = shape![readonly_collection::size(), readonly_collection::has()];
    assert!(iterable.is_iterable());
    assert_eq!(iterable.len(), 2);
    assert!(is_readonly_collection(&iterable));

    let opaque = shape![opaque; readonly_collection::size(), readonly_collection::has(),];
    assert!(!opaque.is_iterable());
    assert!(!is_readonly_collection(&opaque));

    let empty = shape![];
    assert!(empty.is_empty());
    assert_eq!(empty, DynamicShape::iterable());
}

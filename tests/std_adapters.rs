//! Standard collections implement the interfaces and classify accordingly.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use collection_caps::prelude::*;
use pretty_assertions::assert_eq;
use static_assertions::{assert_impl_all, assert_not_impl_any};

// =============================================================================
// Compile-time lattice
// =============================================================================

assert_impl_all!(Vec<u8>: IndexedCollection, Collection, FixedSizeIndexedCollection, Shape);
assert_impl_all!(VecDeque<u8>: IndexedCollection, Shape);
assert_impl_all!([u8; 4]: FixedSizeIndexedCollection, Shape);
assert_impl_all!(BTreeSet<u8>: Collection, Shape);
assert_impl_all!(HashSet<u8>: Collection, Shape);
assert_impl_all!(BTreeMap<u8, u8>: KeyedCollection, Shape);
assert_impl_all!(HashMap<u8, u8>: KeyedCollection, Shape);

assert_not_impl_any!([u8; 4]: Collection, IndexedCollection);
assert_not_impl_any!(HashSet<u8>: ReadonlyIndexedCollection, ReadonlyKeyedCollection);
assert_not_impl_any!(HashMap<u8, u8>: ReadonlyCollection);
assert_not_impl_any!(String: ReadonlyCollection, ReadonlyIndexedCollection);

// =============================================================================
// Runtime classification
// =============================================================================

fn classify<S: Shape + ?Sized>(candidate: &S) -> Vec<Interface> {
    Interface::ALL.into_iter().filter(|i| i.matches(candidate)).collect()
}

#[test]
fn test_sequences_classify_as_indexed() {
    use Interface as I;
    let indexed = vec![
        I::ReadonlyCollection,
        I::Collection,
        I::ReadonlyIndexedCollection,
        I::FixedSizeIndexedCollection,
        I::IndexedCollection,
    ];
    assert_eq!(classify(&vec![1, 2, 3]), indexed);
    assert_eq!(classify(&VecDeque::from([1, 2, 3])), indexed);

    let fixed = vec![
        I::ReadonlyCollection,
        I::ReadonlyIndexedCollection,
        I::FixedSizeIndexedCollection,
    ];
    assert_eq!(classify(&[1, 2, 3]), fixed);
    assert_eq!(classify(&[1, 2, 3][..]), fixed);
}

#[test]
fn test_sets_and_maps_classify() {
    use Interface as I;
    let set: HashSet<i32> = [1, 2].into_iter().collect();
    assert_eq!(classify(&set), vec![I::ReadonlyCollection, I::Collection]);
    assert_eq!(classify(&BTreeSet::from([1])), vec![I::ReadonlyCollection, I::Collection]);

    let map = HashMap::from([("a", 1)]);
    assert_eq!(classify(&map), vec![I::ReadonlyKeyedCollection, I::KeyedCollection]);
    assert_eq!(
        classify(&BTreeMap::from([(1, 'a')])),
        vec![I::ReadonlyKeyedCollection, I::KeyedCollection]
    );
}

#[test]
fn test_smart_pointers_delegate() {
    let boxed: Box<Vec<i32>> = Box::new(vec![1]);
    assert!(is_indexed_collection(&boxed));

    let shared = std::rc::Rc::new(BTreeMap::<u8, u8>::new());
    assert!(is_keyed_collection(&shared));

    let scalar = std::sync::Arc::new(7_u64);
    assert!(!is_readonly_collection(&scalar));

    let mut v = vec![1];
    let by_mut = &mut v;
    assert!(is_collection(&by_mut));
}

// =============================================================================
// Operation contracts
// =============================================================================

#[test]
fn test_index_of_contract() {
    let seq = vec!['a', 'b', 'a'];
    assert_eq!(seq.index_of(&'a', None), Some(0));
    assert_eq!(seq.index_of(&'a', Some(1)), Some(2));
    assert_eq!(seq.index_of(&'z', None), None);

    let arr = ['a', 'b', 'a'];
    assert_eq!(arr.index_of(&'a', Some(1)), Some(2));
}

#[test]
fn test_get_at_set_at_boundaries() {
    let mut seq = vec![10, 20, 30];
    assert_eq!(seq.get_at(3), None);
    assert!(!seq.set_at(3, 99));
    assert_eq!(seq, [10, 20, 30]);

    assert!(seq.set_at(1, 99));
    assert_eq!(seq.get_at(1), Some(&99));

    let mut fixed = [10, 20, 30];
    assert_eq!(fixed.get_at(3), None);
    assert!(!fixed.set_at(3, 0));
    assert!(fixed.set_at(2, 0));
    assert_eq!(fixed, [10, 20, 0]);
}

#[test]
fn test_collection_operations() {
    let mut set = BTreeSet::new();
    set.add(2);
    set.add(1);
    set.add(2);
    assert_eq!(set.size(), 2);
    assert!(set.has(&1));
    assert!(Collection::delete(&mut set, &1));
    assert!(!Collection::delete(&mut set, &1));
    assert_eq!(set.elements().copied().collect::<Vec<_>>(), [2]);
    Collection::clear(&mut set);
    assert_eq!(set.size(), 0);

    let mut seq = vec![1, 2, 1];
    assert!(Collection::delete(&mut seq, &1));
    assert_eq!(seq, [2, 1]);
}

#[test]
fn test_keyed_operations() {
    let mut map = HashMap::new();
    map.set("a", 1);
    map.set("b", 2);
    map.set("a", 3);

    assert_eq!(ReadonlyKeyedCollection::size(&map), 2);
    assert!(ReadonlyKeyedCollection::has(&map, &"a"));
    assert_eq!(ReadonlyKeyedCollection::get(&map, &"a"), Some(&3));
    assert_eq!(ReadonlyKeyedCollection::get(&map, &"z"), None);

    let mut keys: Vec<_> = ReadonlyKeyedCollection::keys(&map).copied().collect();
    keys.sort();
    assert_eq!(keys, ["a", "b"]);

    let mut values: Vec<_> = ReadonlyKeyedCollection::values(&map).copied().collect();
    values.sort();
    assert_eq!(values, [2, 3]);

    assert!(KeyedCollection::delete(&mut map, &"a"));
    assert!(!KeyedCollection::delete(&mut map, &"a"));
    KeyedCollection::clear(&mut map);
    assert_eq!(ReadonlyKeyedCollection::size(&map), 0);
}

#[test]
fn test_ordered_map_entries_follow_key_order() {
    let map = BTreeMap::from([(3, 'c'), (1, 'a'), (2, 'b')]);
    let entries: Vec<_> = map.entries().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(entries, [(1, 'a'), (2, 'b'), (3, 'c')]);
}

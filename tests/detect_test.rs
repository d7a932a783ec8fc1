//! Compile-time `Detect<T>` constants for concrete types.

#![cfg(feature = "detect")]

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use collection_caps::detect;
use collection_caps::detect::Detect;

// =============================================================================
// Sequences
// =============================================================================

#[test]
fn test_vec_is_indexed() {
    assert!(detect!(Vec<i32>: ReadonlyCollection));
    assert!(detect!(Vec<i32>: Collection));
    assert!(detect!(Vec<i32>: ReadonlyIndexedCollection));
    assert!(detect!(Vec<i32>: FixedSizeIndexedCollection));
    assert!(detect!(Vec<i32>: IndexedCollection));
    assert!(!detect!(Vec<i32>: ReadonlyKeyedCollection));
    assert!(!detect!(Vec<i32>: KeyedCollection));

    assert!(detect!(VecDeque<String>: IndexedCollection));
}

#[test]
fn test_array_is_fixed_size() {
    assert!(detect!([u8; 4]: FixedSizeIndexedCollection));
    assert!(!detect!([u8; 4]: Collection));
    assert!(!detect!([u8; 4]: IndexedCollection));
}

#[test]
fn test_element_bounds_are_respected() {
    // Sequence impls need `T: PartialEq`.
    struct NoEq;
    assert!(!detect!(Vec<NoEq>: ReadonlyCollection));
    assert!(!detect!([NoEq; 2]: FixedSizeIndexedCollection));
}

// =============================================================================
// Sets and maps
// =============================================================================

#[test]
fn test_sets() {
    assert!(detect!(HashSet<u32>: Collection));
    assert!(detect!(BTreeSet<u32>: Collection));
    assert!(!detect!(HashSet<u32>: ReadonlyIndexedCollection));
}

#[test]
fn test_maps() {
    assert!(detect!(HashMap<String, u32>: KeyedCollection));
    assert!(detect!(BTreeMap<u32, ()>: ReadonlyKeyedCollection));
    assert!(!detect!(HashMap<String, u32>: ReadonlyCollection));
}

// =============================================================================
// Non-collections
// =============================================================================

#[test]
fn test_scalars() {
    assert!(!detect!(i32: ReadonlyCollection));
    assert!(!detect!(String: ReadonlyCollection));
    assert!(!detect!(bool: KeyedCollection));
}

#[test]
fn test_constants_are_const_evaluable() {
    use collection_caps::detect::fallback::*;

    const VEC_INDEXED: bool = Detect::<Vec<u8>>::IS_INDEXED_COLLECTION;
    const INT_KEYED: bool = Detect::<u8>::IS_KEYED_COLLECTION;
    assert!(VEC_INDEXED);
    assert!(!INT_KEYED);
}

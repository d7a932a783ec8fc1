//! `HashMap` and `BTreeMap`.

#![cfg(feature = "alloc")]

use alloc::collections::BTreeMap;

use crate::impl_shape;
use crate::interface::{KeyedCollection, ReadonlyKeyedCollection};

impl<K: Ord, V> ReadonlyKeyedCollection for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn size(&self) -> usize {
        self.len()
    }

    fn has(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn keys(&self) -> impl Iterator<Item = &K> {
        BTreeMap::keys(self)
    }

    fn values(&self) -> impl Iterator<Item = &V> {
        BTreeMap::values(self)
    }

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        BTreeMap::iter(self)
    }
}

impl<K: Ord, V> KeyedCollection for BTreeMap<K, V> {
    fn set(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }

    fn delete(&mut self, key: &K) -> bool {
        BTreeMap::remove(self, key).is_some()
    }

    fn clear(&mut self) {
        BTreeMap::clear(self);
    }
}

impl_shape!([K: Ord, V] BTreeMap<K, V> => KeyedCollection);

#[cfg(feature = "std")]
mod hashed {
    use core::hash::{BuildHasher, Hash};
    use std::collections::HashMap;

    use crate::impl_shape;
    use crate::interface::{KeyedCollection, ReadonlyKeyedCollection};

    impl<K: Eq + Hash, V, S: BuildHasher> ReadonlyKeyedCollection for HashMap<K, V, S> {
        type Key = K;
        type Value = V;

        fn size(&self) -> usize {
            self.len()
        }

        fn has(&self, key: &K) -> bool {
            self.contains_key(key)
        }

        fn get(&self, key: &K) -> Option<&V> {
            HashMap::get(self, key)
        }

        fn keys(&self) -> impl Iterator<Item = &K> {
            HashMap::keys(self)
        }

        fn values(&self) -> impl Iterator<Item = &V> {
            HashMap::values(self)
        }

        fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
            HashMap::iter(self)
        }
    }

    impl<K: Eq + Hash, V, S: BuildHasher> KeyedCollection for HashMap<K, V, S> {
        fn set(&mut self, key: K, value: V) {
            HashMap::insert(self, key, value);
        }

        fn delete(&mut self, key: &K) -> bool {
            HashMap::remove(self, key).is_some()
        }

        fn clear(&mut self) {
            HashMap::clear(self);
        }
    }

    impl_shape!([K: Eq + Hash, V, S: BuildHasher] HashMap<K, V, S> => KeyedCollection);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn btree_map_get_absent_is_none() {
        let mut map = BTreeMap::new();
        map.set("a", 1);
        assert_eq!(ReadonlyKeyedCollection::get(&map, &"a"), Some(&1));
        assert_eq!(ReadonlyKeyedCollection::get(&map, &"b"), None);
        assert!(map.delete(&"a"));
        assert!(!map.delete(&"a"));
        assert_eq!(map.size(), 0);
    }
}

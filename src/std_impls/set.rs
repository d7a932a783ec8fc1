//! `HashSet` and `BTreeSet`.

#![cfg(feature = "alloc")]

use alloc::collections::BTreeSet;

use crate::impl_shape;
use crate::interface::{Collection, ReadonlyCollection};

impl<T: Ord> ReadonlyCollection for BTreeSet<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn has(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        BTreeSet::iter(self)
    }
}

impl<T: Ord> Collection for BTreeSet<T> {
    fn add(&mut self, value: T) {
        BTreeSet::insert(self, value);
    }

    fn delete(&mut self, value: &T) -> bool {
        BTreeSet::remove(self, value)
    }

    fn clear(&mut self) {
        BTreeSet::clear(self);
    }
}

impl_shape!([T: Ord] BTreeSet<T> => Collection);

#[cfg(feature = "std")]
mod hashed {
    use core::hash::{BuildHasher, Hash};
    use std::collections::HashSet;

    use crate::impl_shape;
    use crate::interface::{Collection, ReadonlyCollection};

    impl<T: Eq + Hash, S: BuildHasher> ReadonlyCollection for HashSet<T, S> {
        type Item = T;

        fn size(&self) -> usize {
            self.len()
        }

        fn has(&self, value: &T) -> bool {
            self.contains(value)
        }

        fn elements(&self) -> impl Iterator<Item = &T> {
            HashSet::iter(self)
        }
    }

    impl<T: Eq + Hash, S: BuildHasher> Collection for HashSet<T, S> {
        fn add(&mut self, value: T) {
            HashSet::insert(self, value);
        }

        fn delete(&mut self, value: &T) -> bool {
            HashSet::remove(self, value)
        }

        fn clear(&mut self) {
            HashSet::clear(self);
        }
    }

    impl_shape!([T: Eq + Hash, S: BuildHasher] HashSet<T, S> => Collection);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn btree_set_delete_reports_removal() {
        let mut set: BTreeSet<u8> = BTreeSet::new();
        set.add(3);
        set.add(3);
        assert_eq!(set.size(), 1);
        assert!(set.delete(&3));
        assert!(!set.delete(&3));
        assert!(!set.has(&3));
    }
}

//! Slices, arrays, `Vec` and `VecDeque`.

use crate::impl_shape;
use crate::interface::{
    FixedSizeIndexedCollection, ReadonlyCollection, ReadonlyIndexedCollection,
};
#[cfg(feature = "alloc")]
use crate::interface::{Collection, IndexedCollection};

#[cfg(feature = "alloc")]
use alloc::{collections::VecDeque, vec::Vec};

/// First position of `value` at or after `from`.
fn position_from<'a, T: PartialEq + 'a>(
    items: impl Iterator<Item = &'a T>,
    value: &T,
    from: Option<usize>,
) -> Option<usize> {
    let start = from.unwrap_or(0);
    items.skip(start).position(|item| item == value).map(|at| at + start)
}

// =============================================================================
// [T]
// =============================================================================

impl<T: PartialEq> ReadonlyCollection for [T] {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn has(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        <[T]>::iter(self)
    }
}

impl<T: PartialEq> ReadonlyIndexedCollection for [T] {
    fn index_of(&self, value: &T, from_index: Option<usize>) -> Option<usize> {
        position_from(<[T]>::iter(self), value, from_index)
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T: PartialEq> FixedSizeIndexedCollection for [T] {
    fn set_at(&mut self, index: usize, value: T) -> bool {
        match <[T]>::get_mut(self, index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

impl_shape!([T: PartialEq] [T] => FixedSizeIndexedCollection);

// =============================================================================
// [T; N]
// =============================================================================

impl<T: PartialEq, const N: usize> ReadonlyCollection for [T; N] {
    type Item = T;

    fn size(&self) -> usize {
        N
    }

    fn has(&self, value: &T) -> bool {
        self.as_slice().has(value)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.as_slice().elements()
    }
}

impl<T: PartialEq, const N: usize> ReadonlyIndexedCollection for [T; N] {
    fn index_of(&self, value: &T, from_index: Option<usize>) -> Option<usize> {
        self.as_slice().index_of(value, from_index)
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get_at(index)
    }
}

impl<T: PartialEq, const N: usize> FixedSizeIndexedCollection for [T; N] {
    fn set_at(&mut self, index: usize, value: T) -> bool {
        self.as_mut_slice().set_at(index, value)
    }
}

impl_shape!([T: PartialEq, const N: usize] [T; N] => FixedSizeIndexedCollection);

// =============================================================================
// Vec<T>
// =============================================================================

#[cfg(feature = "alloc")]
impl<T: PartialEq> ReadonlyCollection for Vec<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn has(&self, value: &T) -> bool {
        self.as_slice().has(value)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        self.as_slice().elements()
    }
}

#[cfg(feature = "alloc")]
impl<T: PartialEq> ReadonlyIndexedCollection for Vec<T> {
    fn index_of(&self, value: &T, from_index: Option<usize>) -> Option<usize> {
        self.as_slice().index_of(value, from_index)
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        self.as_slice().get_at(index)
    }
}

#[cfg(feature = "alloc")]
impl<T: PartialEq> FixedSizeIndexedCollection for Vec<T> {
    fn set_at(&mut self, index: usize, value: T) -> bool {
        self.as_mut_slice().set_at(index, value)
    }
}

#[cfg(feature = "alloc")]
impl<T: PartialEq> Collection for Vec<T> {
    fn add(&mut self, value: T) {
        self.push(value);
    }

    fn delete(&mut self, value: &T) -> bool {
        match self.as_slice().index_of(value, None) {
            Some(at) => {
                Vec::remove(self, at);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

#[cfg(feature = "alloc")]
impl<T: PartialEq> IndexedCollection for Vec<T> {
    fn insert_at(&mut self, index: usize, value: T) {
        let index = index.min(self.len());
        Vec::insert(self, index, value);
    }

    fn remove_at(&mut self, index: usize) {
        if index < self.len() {
            Vec::remove(self, index);
        }
    }
}

#[cfg(feature = "alloc")]
impl_shape!([T: PartialEq] Vec<T> => IndexedCollection);

// =============================================================================
// VecDeque<T>
// =============================================================================

#[cfg(feature = "alloc")]
impl<T: PartialEq> ReadonlyCollection for VecDeque<T> {
    type Item = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn has(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn elements(&self) -> impl Iterator<Item = &T> {
        VecDeque::iter(self)
    }
}

#[cfg(feature = "alloc")]
impl<T: PartialEq> ReadonlyIndexedCollection for VecDeque<T> {
    fn index_of(&self, value: &T, from_index: Option<usize>) -> Option<usize> {
        position_from(VecDeque::iter(self), value, from_index)
    }

    fn get_at(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

#[cfg(feature = "alloc")]
impl<T: PartialEq> FixedSizeIndexedCollection for VecDeque<T> {
    fn set_at(&mut self, index: usize, value: T) -> bool {
        match VecDeque::get_mut(self, index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }
}

#[cfg(feature = "alloc")]
impl<T: PartialEq> Collection for VecDeque<T> {
    fn add(&mut self, value: T) {
        self.push_back(value);
    }

    fn delete(&mut self, value: &T) -> bool {
        match self.index_of(value, None) {
            Some(at) => VecDeque::remove(self, at).is_some(),
            None => false,
        }
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

#[cfg(feature = "alloc")]
impl<T: PartialEq> IndexedCollection for VecDeque<T> {
    fn insert_at(&mut self, index: usize, value: T) {
        let index = index.min(self.len());
        VecDeque::insert(self, index, value);
    }

    fn remove_at(&mut self, index: usize) {
        VecDeque::remove(self, index);
    }
}

#[cfg(feature = "alloc")]
impl_shape!([T: PartialEq] VecDeque<T> => IndexedCollection);

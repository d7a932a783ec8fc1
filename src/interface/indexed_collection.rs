//! `IndexedCollection`: a growable sequence.
//!
//! Extends both `FixedSizeIndexedCollection` and `Collection`; the `add`,
//! `delete` and `clear` tokens are `Collection`'s own.

use super::{Interface, check_own_tokens};
use crate::shape::Shape;

pub use super::collection::{ADD, CLEAR, DELETE, add, clear, delete, is_collection};
pub use super::fixed_size_indexed_collection::{
    GET_AT, HAS, INDEX_OF, SET_AT, SIZE, get_at, has, index_of, is_fixed_size_indexed_collection,
    is_readonly_collection, is_readonly_indexed_collection, set_at, size,
};

crate::tokens! {
    "IndexedCollection";
    /// Insert at a position, shifting later elements up.
    insert_at => "insertAt",
    /// Remove at a position, shifting later elements down.
    remove_at => "removeAt",
}

/// A resizable sequence.
///
/// `add` appends; `delete` removes the first equal element.
pub trait IndexedCollection: super::FixedSizeIndexedCollection + super::Collection {
    /// Insert `value` at `index`. An `index` past the end appends.
    fn insert_at(&mut self, index: usize, value: Self::Item);

    /// Remove the element at `index`. Out-of-bounds indices are ignored.
    fn remove_at(&mut self, index: usize);
}

/// Both parents must pass independently.
pub fn is_indexed_collection<S: Shape + ?Sized>(candidate: &S) -> bool {
    is_fixed_size_indexed_collection(candidate)
        && is_collection(candidate)
        && check_own_tokens(candidate, Interface::IndexedCollection)
}

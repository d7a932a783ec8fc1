//! `FixedSizeIndexedCollection`: positional writes, no resizing.

use super::{Interface, check_own_tokens};
use crate::shape::Shape;

pub use super::readonly_indexed_collection::{
    GET_AT, HAS, INDEX_OF, SIZE, get_at, has, index_of, is_readonly_collection,
    is_readonly_indexed_collection, size,
};

crate::tokens! {
    "FixedSizeIndexedCollection";
    /// Overwrite the element at a position.
    set_at => "setAt",
}

/// A [`ReadonlyIndexedCollection`](super::ReadonlyIndexedCollection) whose
/// slots can be overwritten in place.
pub trait FixedSizeIndexedCollection: super::ReadonlyIndexedCollection {
    /// Store `value` at `index`. Returns `false`, leaving the collection
    /// untouched, when `index` is out of bounds.
    fn set_at(&mut self, index: usize, value: Self::Item) -> bool;
}

pub fn is_fixed_size_indexed_collection<S: Shape + ?Sized>(candidate: &S) -> bool {
    is_readonly_indexed_collection(candidate)
        && check_own_tokens(candidate, Interface::FixedSizeIndexedCollection)
}

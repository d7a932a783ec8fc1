//! `ReadonlyIndexedCollection`: positional reads.

use super::{Interface, check_own_tokens};
use crate::shape::Shape;

pub use super::readonly_collection::{HAS, SIZE, has, is_readonly_collection, size};

crate::tokens! {
    "ReadonlyIndexedCollection";
    /// Position of the first matching element.
    index_of => "indexOf",
    /// Element at a position.
    get_at => "getAt",
}

/// A [`ReadonlyCollection`](super::ReadonlyCollection) whose elements have
/// stable positions `0..size()`.
///
/// [`elements`](super::ReadonlyCollection::elements) yields elements in
/// position order.
pub trait ReadonlyIndexedCollection: super::ReadonlyCollection {
    /// Position of the first element equal to `value` at or after
    /// `from_index` (default 0), or `None` if there is none.
    fn index_of(&self, value: &Self::Item, from_index: Option<usize>) -> Option<usize>;

    /// Element at `index`, or `None` when `index` is out of bounds.
    fn get_at(&self, index: usize) -> Option<&Self::Item>;
}

pub fn is_readonly_indexed_collection<S: Shape + ?Sized>(candidate: &S) -> bool {
    is_readonly_collection(candidate)
        && check_own_tokens(candidate, Interface::ReadonlyIndexedCollection)
}

//! `Collection`: a mutable unordered collection.

use super::{Interface, check_own_tokens};
use crate::shape::Shape;

pub use super::readonly_collection::{HAS, SIZE, has, is_readonly_collection, size};

crate::tokens! {
    "Collection";
    /// Insert one element.
    add => "add",
    /// Remove one element. Shared with `IndexedCollection` and
    /// `KeyedCollection`.
    delete => "delete",
    /// Remove every element.
    clear => "clear",
}

/// A [`ReadonlyCollection`](super::ReadonlyCollection) that can grow and
/// shrink.
pub trait Collection: super::ReadonlyCollection {
    fn add(&mut self, value: Self::Item);

    /// Remove one occurrence of `value`; `true` if something was removed.
    fn delete(&mut self, value: &Self::Item) -> bool;

    fn clear(&mut self);
}

/// Whether `candidate` is a readonly collection that also exposes `add`,
/// `delete` and `clear`.
pub fn is_collection<S: Shape + ?Sized>(candidate: &S) -> bool {
    is_readonly_collection(candidate) && check_own_tokens(candidate, Interface::Collection)
}

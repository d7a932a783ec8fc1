//! `ReadonlyCollection`: root of the unordered lattice.

use super::{Interface, check_iterable, check_own_tokens};
use crate::shape::Shape;

crate::tokens! {
    "ReadonlyCollection";
    /// Number of elements.
    size => "size",
    /// Membership test for one element.
    has => "has",
}

/// An iterable collection that can report its size and answer membership.
///
/// Iteration order is whatever the implementor chooses.
pub trait ReadonlyCollection {
    type Item;

    fn size(&self) -> usize;

    fn has(&self, value: &Self::Item) -> bool;

    /// Iterate over the elements.
    fn elements(&self) -> impl Iterator<Item = &Self::Item>;
}

/// Whether `candidate` is iterable and exposes `size` and `has`.
pub fn is_readonly_collection<S: Shape + ?Sized>(candidate: &S) -> bool {
    check_iterable(candidate, Interface::ReadonlyCollection)
        && check_own_tokens(candidate, Interface::ReadonlyCollection)
}

//! `KeyedCollection`: a mutable key/value mapping.

use super::{Interface, check_own_tokens};
use crate::shape::Shape;

pub use super::collection::{DELETE, delete};
pub use super::readonly_keyed_collection::{
    GET, HAS, KEYS, SIZE, VALUES, get, has, is_readonly_keyed_collection, keys, size, values,
};

crate::tokens! {
    "KeyedCollection";
    /// Insert or replace the value under a key.
    set => "set",
    /// Remove every entry.
    clear => "clear",
}

/// A [`ReadonlyKeyedCollection`](super::ReadonlyKeyedCollection) that can be
/// written to.
pub trait KeyedCollection: super::ReadonlyKeyedCollection {
    fn set(&mut self, key: Self::Key, value: Self::Value);

    /// Remove the entry under `key`; `true` if one existed.
    fn delete(&mut self, key: &Self::Key) -> bool;

    fn clear(&mut self);
}

pub fn is_keyed_collection<S: Shape + ?Sized>(candidate: &S) -> bool {
    is_readonly_keyed_collection(candidate)
        && check_own_tokens(candidate, Interface::KeyedCollection)
}

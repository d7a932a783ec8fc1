//! `ReadonlyKeyedCollection`: root of the keyed lattice.
//!
//! Unrelated to `ReadonlyCollection`: its `size` and `has` are distinct
//! tokens.

use super::{Interface, check_iterable, check_own_tokens};
use crate::shape::Shape;

crate::tokens! {
    "ReadonlyKeyedCollection";
    /// Number of entries.
    size => "size",
    /// Key membership test.
    has => "has",
    /// Value lookup by key.
    get => "get",
    /// Iterate over keys.
    keys => "keys",
    /// Iterate over values.
    values => "values",
}

/// An iterable key/value mapping.
pub trait ReadonlyKeyedCollection {
    type Key;
    type Value;

    fn size(&self) -> usize;

    fn has(&self, key: &Self::Key) -> bool;

    /// Value stored under `key`, or `None` when the key is absent.
    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn keys(&self) -> impl Iterator<Item = &Self::Key>;

    fn values(&self) -> impl Iterator<Item = &Self::Value>;

    /// Iterate over key/value pairs.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

pub fn is_readonly_keyed_collection<S: Shape + ?Sized>(candidate: &S) -> bool {
    check_iterable(candidate, Interface::ReadonlyKeyedCollection)
        && check_own_tokens(candidate, Interface::ReadonlyKeyedCollection)
}

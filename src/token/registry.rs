//! Well-known token registry.
//!
//! The seventeen tokens below are the protocol's whole vocabulary. The table
//! is built at compile time; nothing in it can change after startup.

use super::Token;
use crate::interface::{
    collection, fixed_size_indexed_collection, indexed_collection, keyed_collection,
    readonly_collection, readonly_indexed_collection, readonly_keyed_collection,
};
use crate::primitives::hash::fnv1a_64_str;

/// Every distinct well-known token, grouped by the interface that mints it.
///
/// Aliased tokens (`IndexedCollection.delete`, `KeyedCollection.delete`, ...)
/// appear once, under the interface that owns them.
pub const WELL_KNOWN: [Token; 17] = [
    readonly_collection::SIZE,
    readonly_collection::HAS,
    collection::ADD,
    collection::DELETE,
    collection::CLEAR,
    readonly_indexed_collection::INDEX_OF,
    readonly_indexed_collection::GET_AT,
    fixed_size_indexed_collection::SET_AT,
    indexed_collection::INSERT_AT,
    indexed_collection::REMOVE_AT,
    readonly_keyed_collection::SIZE,
    readonly_keyed_collection::HAS,
    readonly_keyed_collection::GET,
    readonly_keyed_collection::KEYS,
    readonly_keyed_collection::VALUES,
    keyed_collection::SET,
    keyed_collection::CLEAR,
];

/// Find the well-known token registered under `name`.
pub fn lookup(name: &str) -> Option<Token> {
    let hash = fnv1a_64_str(name);
    WELL_KNOWN
        .iter()
        .find(|token| token.hash64() == hash && token.name() == name)
        .copied()
}

/// Iterate over every well-known token.
pub fn well_known() -> impl Iterator<Item = Token> {
    WELL_KNOWN.iter().copied()
}

/// Return the process-wide token for `name`, interning it if needed.
///
/// Well-known names resolve to their registered token. Any other name is
/// copied once into a leaked `'static` string; subsequent calls reuse it.
/// Parsing and deserialization never intern: call this only for names the
/// program itself defines.
#[cfg(feature = "std")]
pub fn intern(name: &str) -> Token {
    use std::collections::HashSet;
    use std::sync::{OnceLock, PoisonError, RwLock};

    static INTERNED: OnceLock<RwLock<HashSet<&'static str>>> = OnceLock::new();

    if let Some(token) = lookup(name) {
        return token;
    }

    let table = INTERNED.get_or_init(Default::default);
    if let Some(existing) = table.read().unwrap_or_else(PoisonError::into_inner).get(name) {
        return Token::new(*existing);
    }

    let mut table = table.write().unwrap_or_else(PoisonError::into_inner);
    // Another writer may have won the race between the two locks.
    if let Some(existing) = table.get(name) {
        return Token::new(*existing);
    }
    let leaked: &'static str = Box::leak(name.to_owned().into_boxed_str());
    table.insert(leaked);
    tracing::debug!(name = leaked, "interned capability token");
    Token::new(leaked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_names_are_unique() {
        for (i, a) in WELL_KNOWN.iter().enumerate() {
            for b in &WELL_KNOWN[i + 1..] {
                assert_ne!(a, b, "duplicate token {a}");
            }
        }
    }

    #[test]
    fn lookup_finds_every_token() {
        for token in well_known() {
            assert_eq!(lookup(token.name()), Some(token));
        }
        assert_eq!(lookup("Collection.push"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn aliases_are_not_registered_twice() {
        assert_eq!(lookup("IndexedCollection.delete"), None);
        assert_eq!(lookup("KeyedCollection.delete"), None);
    }

    #[cfg(feature = "std")]
    #[test]
    fn intern_is_stable() {
        let a = intern("Custom.frobnicate");
        let b = intern(&String::from("Custom.frobnicate"));
        assert_eq!(a, b);
        assert_eq!(a.name(), "Custom.frobnicate");
        assert_eq!(intern("Collection.add"), collection::add());
    }
}

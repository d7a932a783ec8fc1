//! Token identity, aliasing and the registry.

use collection_caps::registry::{self, WELL_KNOWN};
use collection_caps::{
    Token, collection, fixed_size_indexed_collection, indexed_collection, keyed_collection,
    readonly_collection, readonly_indexed_collection, readonly_keyed_collection,
};

// =============================================================================
// Accessor stability
// =============================================================================

#[test]
fn test_accessor_returns_same_token_every_time() {
    assert_eq!(readonly_collection::size(), readonly_collection::size());
    assert_eq!(collection::add(), collection::add());
    assert_eq!(indexed_collection::insert_at(), indexed_collection::insert_at());
    assert_eq!(keyed_collection::set(), keyed_collection::set());
}

#[test]
fn test_independently_minted_tokens_agree() {
    // A second copy of the protocol would build its tokens from the same
    // global names; identity must not depend on which copy minted them.
    let copy = Token::new("Collection.delete");
    assert_eq!(copy, collection::delete());
    assert_eq!(copy.hash64(), collection::DELETE.hash64());
    assert!(copy.same_as(&collection::DELETE));
}

#[test]
fn test_const_and_accessor_agree() {
    const ADD: Token = collection::add();
    assert_eq!(ADD, collection::ADD);
    assert_eq!(readonly_indexed_collection::GET_AT.name(), "ReadonlyIndexedCollection.getAt");
    assert_eq!(readonly_indexed_collection::index_of().operation(), "indexOf");
    assert_eq!(fixed_size_indexed_collection::set_at().interface(), "FixedSizeIndexedCollection");
}

// =============================================================================
// Aliasing
// =============================================================================

#[test]
fn test_delete_is_shared_across_interfaces() {
    assert_eq!(indexed_collection::delete(), collection::delete());
    assert_eq!(keyed_collection::delete(), collection::delete());
    assert_eq!(keyed_collection::DELETE.name(), "Collection.delete");
}

#[test]
fn test_parent_tokens_are_reexported_not_reminted() {
    assert_eq!(indexed_collection::size(), readonly_collection::size());
    assert_eq!(indexed_collection::add(), collection::add());
    assert_eq!(indexed_collection::set_at(), fixed_size_indexed_collection::set_at());
    assert_eq!(fixed_size_indexed_collection::get_at(), readonly_indexed_collection::get_at());
    assert_eq!(keyed_collection::keys(), readonly_keyed_collection::keys());
}

#[test]
fn test_only_delete_is_aliased() {
    // Same operation name, distinct identity.
    assert_ne!(keyed_collection::clear(), collection::clear());
    assert_ne!(readonly_keyed_collection::size(), readonly_collection::size());
    assert_ne!(readonly_keyed_collection::has(), readonly_collection::has());
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_well_known_round_trips() {
    for token in WELL_KNOWN {
        assert_eq!(registry::lookup(token.name()), Some(token));
        assert_eq!(token.name().parse::<Token>(), Ok(token));
        assert_eq!(token.to_string(), token.name());
    }
}

#[test]
fn test_unknown_name_is_rejected() {
    assert_eq!(registry::lookup("Collection.push"), None);
    assert_eq!(registry::lookup("IndexedCollection.delete"), None);

    let err = "Collection.push".parse::<Token>().unwrap_err();
    assert_eq!(err.to_string(), "unknown capability token: Collection.push");
}

#[test]
fn test_registry_enumerates_every_token_once() {
    let names: Vec<&str> = registry::well_known().map(|t| t.name()).collect();
    assert_eq!(names.len(), 17);
    for (i, name) in names.iter().enumerate() {
        assert!(!names[i + 1..].contains(name), "{name} listed twice");
    }
}

#[test]
fn test_interned_tokens_are_stable() {
    let first = registry::intern("Stack.peek");
    let second = registry::intern("Stack.peek");
    assert_eq!(first, second);
    assert!(core::ptr::eq(first.name(), second.name()));
    assert_eq!(first.interface(), "Stack");
    assert_eq!(first.operation(), "peek");

    // Interning a well-known name yields the well-known token.
    assert_eq!(registry::intern("Collection.add"), collection::add());
    // Interned names never join the well-known table.
    assert_eq!(registry::lookup("Stack.peek"), None);
    assert!("Stack.peek".parse::<Token>().is_err());
}

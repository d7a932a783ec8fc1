//! Interface name table.
//!
//! Mirrors `collection_caps::Interface`; a name missing here is rejected at
//! expansion time rather than surfacing as an unresolved path.

use quote::format_ident;
use syn::Ident;

/// `(interface name, predicate fn name)`.
pub const INTERFACES: &[(&str, &str)] = &[
    ("ReadonlyCollection", "is_readonly_collection"),
    ("Collection", "is_collection"),
    ("ReadonlyIndexedCollection", "is_readonly_indexed_collection"),
    ("FixedSizeIndexedCollection", "is_fixed_size_indexed_collection"),
    ("IndexedCollection", "is_indexed_collection"),
    ("ReadonlyKeyedCollection", "is_readonly_keyed_collection"),
    ("KeyedCollection", "is_keyed_collection"),
];

fn unknown(name: &Ident) -> syn::Error {
    let expected: Vec<&str> = INTERFACES.iter().map(|(name, _)| *name).collect();
    syn::Error::new(
        name.span(),
        format!("unknown interface `{name}`; expected one of: {}", expected.join(", ")),
    )
}

/// Check that `name` is an interface and return it unchanged.
pub fn interface_variant(name: &Ident) -> syn::Result<Ident> {
    INTERFACES
        .iter()
        .find(|(known, _)| name == known)
        .map(|_| name.clone())
        .ok_or_else(|| unknown(name))
}

/// Predicate function for interface `name`, spanned at `name`.
pub fn predicate_for(name: &Ident) -> syn::Result<Ident> {
    INTERFACES
        .iter()
        .find(|(known, _)| name == known)
        .map(|(_, predicate)| format_ident!("{}", predicate, span = name.span()))
        .ok_or_else(|| unknown(name))
}

//! # Layer 3: Interface Lattice
//!
//! Seven capability interfaces, each a trait (the compile-time contract with
//! signatures) plus a module of tokens and a structural predicate (the
//! runtime contract).
//!
//! ```text
//!   ReadonlyCollection ─────────────┐
//!     │                             │
//!     ├─> Collection ───────────┐   │
//!     │                         │   │
//!     └─> ReadonlyIndexedCollection │
//!           └─> FixedSizeIndexedCollection
//!                 └─> IndexedCollection <─┘ (also extends Collection)
//!
//!   ReadonlyKeyedCollection
//!     └─> KeyedCollection
//! ```
//!
//! Each module re-exports its parents' tokens and predicates instead of
//! minting its own, so `indexed_collection::delete()` *is*
//! `collection::delete()`. `keyed_collection::delete()` is aliased the same
//! way; `keyed_collection::clear()` is not.

pub mod collection;
pub mod fixed_size_indexed_collection;
pub mod indexed_collection;
pub mod keyed_collection;
pub mod readonly_collection;
pub mod readonly_indexed_collection;
pub mod readonly_keyed_collection;

use core::fmt;
use core::str::FromStr;

use crate::Token;
use crate::shape::Shape;

pub use collection::{Collection, is_collection};
pub use fixed_size_indexed_collection::{FixedSizeIndexedCollection, is_fixed_size_indexed_collection};
pub use indexed_collection::{IndexedCollection, is_indexed_collection};
pub use keyed_collection::{KeyedCollection, is_keyed_collection};
pub use readonly_collection::{ReadonlyCollection, is_readonly_collection};
pub use readonly_indexed_collection::{ReadonlyIndexedCollection, is_readonly_indexed_collection};
pub use readonly_keyed_collection::{ReadonlyKeyedCollection, is_readonly_keyed_collection};

// =============================================================================
// Runtime contract descriptor
// =============================================================================

/// Runtime descriptor of one capability interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Interface {
    ReadonlyCollection,
    Collection,
    ReadonlyIndexedCollection,
    FixedSizeIndexedCollection,
    IndexedCollection,
    ReadonlyKeyedCollection,
    KeyedCollection,
}

impl Interface {
    /// Every interface, parents before children.
    pub const ALL: [Interface; 7] = [
        Interface::ReadonlyCollection,
        Interface::Collection,
        Interface::ReadonlyIndexedCollection,
        Interface::FixedSizeIndexedCollection,
        Interface::IndexedCollection,
        Interface::ReadonlyKeyedCollection,
        Interface::KeyedCollection,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Interface::ReadonlyCollection => "ReadonlyCollection",
            Interface::Collection => "Collection",
            Interface::ReadonlyIndexedCollection => "ReadonlyIndexedCollection",
            Interface::FixedSizeIndexedCollection => "FixedSizeIndexedCollection",
            Interface::IndexedCollection => "IndexedCollection",
            Interface::ReadonlyKeyedCollection => "ReadonlyKeyedCollection",
            Interface::KeyedCollection => "KeyedCollection",
        }
    }

    /// Direct structural parents, in delegation order.
    pub const fn parents(self) -> &'static [Interface] {
        match self {
            Interface::ReadonlyCollection | Interface::ReadonlyKeyedCollection => &[],
            Interface::Collection | Interface::ReadonlyIndexedCollection => {
                &[Interface::ReadonlyCollection]
            }
            Interface::FixedSizeIndexedCollection => &[Interface::ReadonlyIndexedCollection],
            Interface::IndexedCollection => {
                &[Interface::FixedSizeIndexedCollection, Interface::Collection]
            }
            Interface::KeyedCollection => &[Interface::ReadonlyKeyedCollection],
        }
    }

    /// Tokens this interface introduces beyond its parents.
    pub const fn own_tokens(self) -> &'static [Token] {
        match self {
            Interface::ReadonlyCollection => &[readonly_collection::SIZE, readonly_collection::HAS],
            Interface::Collection => &[collection::ADD, collection::DELETE, collection::CLEAR],
            Interface::ReadonlyIndexedCollection => &[
                readonly_indexed_collection::INDEX_OF,
                readonly_indexed_collection::GET_AT,
            ],
            Interface::FixedSizeIndexedCollection => &[fixed_size_indexed_collection::SET_AT],
            Interface::IndexedCollection => {
                &[indexed_collection::INSERT_AT, indexed_collection::REMOVE_AT]
            }
            Interface::ReadonlyKeyedCollection => &[
                readonly_keyed_collection::SIZE,
                readonly_keyed_collection::HAS,
                readonly_keyed_collection::GET,
                readonly_keyed_collection::KEYS,
                readonly_keyed_collection::VALUES,
            ],
            Interface::KeyedCollection => {
                &[keyed_collection::SET, keyed_collection::DELETE, keyed_collection::CLEAR]
            }
        }
    }

    /// Whether `token` is required by this interface, directly or inherited.
    pub fn requires(self, token: Token) -> bool {
        self.own_tokens().contains(&token)
            || self.parents().iter().any(|parent| parent.requires(token))
    }

    /// Reflexive, transitive structural extension.
    pub fn extends(self, other: Interface) -> bool {
        self == other || self.parents().iter().any(|parent| parent.extends(other))
    }

    /// Every required token, root-first, without duplicates.
    #[cfg(feature = "alloc")]
    pub fn tokens(self) -> alloc::vec::Vec<Token> {
        fn collect(interface: Interface, out: &mut alloc::vec::Vec<Token>) {
            for parent in interface.parents() {
                collect(*parent, out);
            }
            for token in interface.own_tokens() {
                if !out.contains(token) {
                    out.push(*token);
                }
            }
        }

        let mut out = alloc::vec::Vec::new();
        collect(self, &mut out);
        out
    }

    /// Run this interface's structural predicate against `candidate`.
    pub fn matches<S: Shape + ?Sized>(self, candidate: &S) -> bool {
        match self {
            Interface::ReadonlyCollection => is_readonly_collection(candidate),
            Interface::Collection => is_collection(candidate),
            Interface::ReadonlyIndexedCollection => is_readonly_indexed_collection(candidate),
            Interface::FixedSizeIndexedCollection => is_fixed_size_indexed_collection(candidate),
            Interface::IndexedCollection => is_indexed_collection(candidate),
            Interface::ReadonlyKeyedCollection => is_readonly_keyed_collection(candidate),
            Interface::KeyedCollection => is_keyed_collection(candidate),
        }
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name that matches no interface.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability interface: {name}")]
pub struct UnknownInterface {
    /// The name that failed to resolve.
    pub name: alloc::string::String,
}

/// Name that matches no interface.
#[cfg(not(feature = "alloc"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability interface")]
pub struct UnknownInterface;

impl FromStr for Interface {
    type Err = UnknownInterface;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[cfg(feature = "alloc")]
        let err = || UnknownInterface { name: s.into() };
        #[cfg(not(feature = "alloc"))]
        let err = || UnknownInterface;

        Interface::ALL.into_iter().find(|interface| interface.name() == s).ok_or_else(err)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Interface {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Interface {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct InterfaceVisitor;

        impl serde::de::Visitor<'_> for InterfaceVisitor {
            type Value = Interface;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a capability interface name")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Interface, E> {
                v.parse()
                    .map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(InterfaceVisitor)
    }
}

// =============================================================================
// Predicate building blocks
// =============================================================================

/// Step (a) of every root predicate.
pub(crate) fn check_iterable<S: Shape + ?Sized>(candidate: &S, interface: Interface) -> bool {
    let iterable = candidate.is_iterable();
    if !iterable {
        tracing::trace!(interface = interface.name(), "candidate rejected: not iterable");
    }
    iterable
}

/// Step (c) of every predicate: presence of the interface's own tokens.
pub(crate) fn check_own_tokens<S: Shape + ?Sized>(candidate: &S, interface: Interface) -> bool {
    let own = interface.own_tokens();
    if candidate.exposes_all(own) {
        return true;
    }
    if let Some(missing) = own.iter().find(|token| !candidate.exposes(**token)) {
        tracing::trace!(
            interface = interface.name(),
            missing = missing.name(),
            "candidate rejected: missing token"
        );
    }
    false
}

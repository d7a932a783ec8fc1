#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std library (HashSet/HashMap adapters, interner)
// - alloc: enables alloc types in no_std (DynamicShape, Vec/BTree adapters)
// - detect: compile-time Detect<T> constants
// - derive: #[derive(Shape)] and conforms!
// - serde: Token and Interface serialize as their global names

//! # collection-caps
//!
//! Structural capability protocol for collection-like types.
//!
//! A value is recognised as a collection by *what it exposes*, not by what it
//! is: each operation (`size`, `has`, `add`, `getAt`, ...) is named by a
//! globally-interned [`Token`], and a predicate checks that a candidate
//! exposes every token an interface requires.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - const FNV-1a hashing, const string equality                    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Tokens                                                  |
//! |  - Token ("Interface.operation"), well-known registry, interner   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Shapes                                                  |
//! |  - Shape (presence lookup), DynamicShape, scalar impls            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Interface Lattice                                       |
//! |  - 7 traits, Interface descriptor, is_* predicates                |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 4/5: Std adapters, compile-time Detect, macros             |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Lattice
//!
//! ```text
//! ReadonlyCollection ─> Collection ───────────────────────────┐
//!        └─> ReadonlyIndexedCollection ─> FixedSizeIndexedCollection ─> IndexedCollection
//!
//! ReadonlyKeyedCollection ─> KeyedCollection
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use collection_caps::prelude::*;
//!
//! let v = vec![1, 2, 3];
//! assert!(is_indexed_collection(&v));
//! assert!(!is_keyed_collection(&v));
//! assert!(!is_collection(&42_u32));
//!
//! // Tokens are shared by alias, not re-minted
//! assert_eq!(indexed_collection::delete(), collection::delete());
//!
//! // Candidates assembled at runtime
//! let shape = DynamicShape::iterable()
//!     .with(readonly_collection::size())
//!     .with(readonly_collection::has());
//! assert!(is_readonly_collection(&shape));
//! assert!(!is_collection(&shape));
//! ```
//!
//! ## Detection is shallow
//!
//! Predicates check presence only; they never invoke an operation. A
//! positive answer means the candidate *claims* the interface, not that its
//! operations honour the contracts documented on the traits.

// Allow `::collection_caps` to work inside the crate itself
extern crate self as collection_caps;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the tokens! macro
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Primitives (no dependencies)
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Tokens
// =============================================================================
pub mod token;

// =============================================================================
// Layer 2: Shapes
// =============================================================================
pub mod shape;

// =============================================================================
// Layer 3: Interface Lattice
// =============================================================================
pub mod interface;

// =============================================================================
// Layer 4: Standard Library Adapters
// =============================================================================
mod std_impls;

// =============================================================================
// Layer 5: Compile-time Detection
// =============================================================================
#[cfg(feature = "detect")]
pub mod detect;

// Syntax macros (shape!, dispatch!)
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use token::{Token, UnknownToken, registry};
pub use shape::{Conforming, Shape};
#[cfg(feature = "alloc")]
pub use shape::DynamicShape;
pub use interface::{
    Interface, UnknownInterface,
    // Traits
    Collection, FixedSizeIndexedCollection, IndexedCollection, KeyedCollection,
    ReadonlyCollection, ReadonlyIndexedCollection, ReadonlyKeyedCollection,
    // Predicates
    is_collection, is_fixed_size_indexed_collection, is_indexed_collection, is_keyed_collection,
    is_readonly_collection, is_readonly_indexed_collection, is_readonly_keyed_collection,
    // Token namespaces
    collection, fixed_size_indexed_collection, indexed_collection, keyed_collection,
    readonly_collection, readonly_indexed_collection, readonly_keyed_collection,
};

// Re-export proc-macros
#[cfg(feature = "derive")]
pub use macros::{Shape, conforms};

/// Common items for the capability protocol.
pub mod prelude {
    pub use crate::interface::{
        // Traits
        Collection, FixedSizeIndexedCollection, IndexedCollection, KeyedCollection,
        ReadonlyCollection, ReadonlyIndexedCollection, ReadonlyKeyedCollection,
        // Predicates
        is_collection, is_fixed_size_indexed_collection, is_indexed_collection,
        is_keyed_collection, is_readonly_collection, is_readonly_indexed_collection,
        is_readonly_keyed_collection,
        // Token namespaces
        collection, fixed_size_indexed_collection, indexed_collection, keyed_collection,
        readonly_collection, readonly_indexed_collection, readonly_keyed_collection,
        Interface,
    };
    pub use crate::shape::Shape;
    pub use crate::token::Token;
    #[cfg(feature = "alloc")]
    pub use crate::shape::DynamicShape;
    #[cfg(feature = "derive")]
    pub use macros::{Shape, conforms};
}

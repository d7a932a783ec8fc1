//! # Layer 5: Compile-time Interface Detection
//!
//! Answers "does type `T` implement interface I" for concrete types,
//! without a [`Shape`](crate::Shape) impl and without a value.
//!
//! ```
//! use collection_caps::detect;
//!
//! assert!(detect!(Vec<i32>: IndexedCollection));
//! assert!(detect!([u8; 4]: FixedSizeIndexedCollection));
//! assert!(!detect!([u8; 4]: Collection));
//! ```
//!
//! ## Supported Interfaces
//!
//! ReadonlyCollection, Collection, ReadonlyIndexedCollection,
//! FixedSizeIndexedCollection, IndexedCollection, ReadonlyKeyedCollection,
//! KeyedCollection

pub mod autoref;

pub use autoref::{Detect, fallback};

/// Compile-time check of a concrete type against an interface trait.
///
/// Expands to a `const`-evaluable `bool`.
#[macro_export]
macro_rules! detect {
    (@const $ty:ty, $CONST:ident) => {{
        #[allow(unused_imports)]
        use $crate::detect::fallback::*;
        $crate::detect::Detect::<$ty>::$CONST
    }};
    ($ty:ty : ReadonlyCollection) => { $crate::detect!(@const $ty, IS_READONLY_COLLECTION) };
    ($ty:ty : Collection) => { $crate::detect!(@const $ty, IS_COLLECTION) };
    ($ty:ty : ReadonlyIndexedCollection) => { $crate::detect!(@const $ty, IS_READONLY_INDEXED_COLLECTION) };
    ($ty:ty : FixedSizeIndexedCollection) => { $crate::detect!(@const $ty, IS_FIXED_SIZE_INDEXED_COLLECTION) };
    ($ty:ty : IndexedCollection) => { $crate::detect!(@const $ty, IS_INDEXED_COLLECTION) };
    ($ty:ty : ReadonlyKeyedCollection) => { $crate::detect!(@const $ty, IS_READONLY_KEYED_COLLECTION) };
    ($ty:ty : KeyedCollection) => { $crate::detect!(@const $ty, IS_KEYED_COLLECTION) };
}

//! Autoref-based interface detection machinery.
//!
//! This module implements the "Inherent Const Fallback" pattern for
//! compile-time interface detection on concrete types.
//!
//! ## How it works
//!
//! For each interface trait I:
//! 1. Define a fallback trait with `const IS_I: bool = false`
//! 2. Implement the fallback for `Detect<X>` for all X
//! 3. Implement an inherent const `IS_I = true` for `Detect<X>` where `X: I`
//!
//! When resolving `Detect::<Concrete>::IS_I`, the compiler:
//! - If `Concrete: I`, finds the inherent const (true)
//! - Otherwise, finds the trait const (false)
//!
//! ## Limitation
//!
//! This only works for **concrete types** known at the call site.
//! It does NOT work in generic contexts like `fn foo<T>()`.

use core::marker::PhantomData;

use crate::interface::{
    Collection, FixedSizeIndexedCollection, IndexedCollection, KeyedCollection,
    ReadonlyCollection, ReadonlyIndexedCollection, ReadonlyKeyedCollection,
};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T: ?Sized>(PhantomData<T>);

/// Generate fallback trait + inherent const for one interface trait.
macro_rules! impl_detect {
    ($($Trait:ident => $CONST:ident),+ $(,)?) => {
        ::paste::paste! {
            $(
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] {
                    const $CONST: bool = false;
                }
                impl<T: ?Sized> [<$Trait Fallback>] for Detect<T> {}
                impl<T: $Trait + ?Sized> Detect<T> {
                    pub const $CONST: bool = true;
                }
            )+

            /// Every fallback trait; glob-import to make `Detect` consts resolve.
            pub mod fallback {
                $(pub use super::[<$Trait Fallback>];)+
            }
        }
    };
}

impl_detect!(
    ReadonlyCollection => IS_READONLY_COLLECTION,
    Collection => IS_COLLECTION,
    ReadonlyIndexedCollection => IS_READONLY_INDEXED_COLLECTION,
    FixedSizeIndexedCollection => IS_FIXED_SIZE_INDEXED_COLLECTION,
    IndexedCollection => IS_INDEXED_COLLECTION,
    ReadonlyKeyedCollection => IS_READONLY_KEYED_COLLECTION,
    KeyedCollection => IS_KEYED_COLLECTION,
);

//! Procedural macros for the collection-caps capability protocol
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Shape)]` | struct/enum | Implement `Shape` from a list of interfaces |
//! | `conforms!` | expression | Boolean interface check on a candidate |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Shape)]
//! #[shape(IndexedCollection)]
//! struct Ring<T> { items: Vec<T> }
//!
//! let ring = Ring { items: vec![1, 2, 3] };
//! assert!(conforms!(ring: IndexedCollection & !KeyedCollection));
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

/// Derive macro implementing `Shape` for a type.
///
/// The `#[shape(...)]` attribute lists the interfaces whose tokens the type
/// exposes. `opaque` marks the type as not iterable.
///
/// # Usage
/// ```ignore
/// #[derive(Shape)]
/// #[shape(Collection, ReadonlyIndexedCollection)]
/// struct Bag { .. }
///
/// #[derive(Shape)]
/// #[shape(opaque, ReadonlyCollection)]
/// struct Handle { .. }
/// ```
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_shape(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Check a candidate against a boolean expression of interfaces.
///
/// # Syntax: `conforms!(expr: Expr)`
///
/// The candidate expression is evaluated once and borrowed. Operators are
/// `&`, `|`, `!` and parentheses; operands are interface names.
///
/// ```ignore
/// use collection_caps::conforms;
///
/// let v = vec![1, 2, 3];
/// assert!(conforms!(v: IndexedCollection));
/// assert!(conforms!(v: Collection & !KeyedCollection));
/// assert!(conforms!(&v: (KeyedCollection | FixedSizeIndexedCollection)));
/// ```
#[proc_macro]
pub fn conforms(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::ConformsInput);
    user::expand_conforms(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

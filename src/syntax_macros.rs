//! Declarative sugar over shapes and predicates.

// =============================================================================
// shape! - Build a DynamicShape inline
// =============================================================================

/// Build a [`DynamicShape`](crate::DynamicShape) from a list of tokens.
///
/// # Example
///
/// ```
/// use collection_caps::interface::readonly_collection::{has, size};
/// use collection_caps::{is_readonly_collection, shape};
///
/// let set_like = shape![size(), has()];          // iterable
/// let record = shape![opaque; size(), has()];    // not iterable
/// assert!(is_readonly_collection(&set_like));
/// assert!(!is_readonly_collection(&record));
/// ```
#[cfg(feature = "alloc")]
#[macro_export]
macro_rules! shape {
    (opaque; $($token:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut shape = $crate::DynamicShape::new();
        $(shape.insert($token);)*
        shape
    }};
    ($($token:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut shape = $crate::DynamicShape::iterable();
        $(shape.insert($token);)*
        shape
    }};
}

// =============================================================================
// dispatch! - Branch on the first matching interface
// =============================================================================

/// Run the arm of the first interface the candidate conforms to.
///
/// Arms are tried top to bottom, so list stronger interfaces first.
///
/// # Example
///
/// ```ignore
/// let label = dispatch!(value, {
///     IndexedCollection => "sequence",
///     Collection => "bag",
///     KeyedCollection => "map",
///     _ => "opaque",
/// });
/// ```
#[macro_export]
macro_rules! dispatch {
    ($candidate:expr, {
        $($interface:ident => $arm:expr,)+
        _ => $fallback:expr $(,)?
    }) => {{
        let candidate = &$candidate;
        $(
            if $crate::Interface::$interface.matches(candidate) {
                $arm
            } else
        )+
        {
            $fallback
        }
    }};
}

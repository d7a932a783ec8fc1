//! # Layer 2: Shapes
//!
//! A [`Shape`] is the presence-lookup view of a candidate value. Predicates
//! never call a collection operation; they only ask the candidate two
//! questions:
//!
//! - is it iterable at all?
//! - does it expose an entry for a given [`Token`]?
//!
//! Scalars answer "no" to both, which is how non-collection inputs end up
//! classified as `false` by every predicate instead of failing.

#[cfg(feature = "alloc")]
mod dynamic;
mod scalars;

#[cfg(feature = "alloc")]
pub use dynamic::DynamicShape;

use crate::Token;
use crate::interface::Interface;

/// Presence lookup over a candidate value.
///
/// Implementations must be cheap and side-effect free: they are called once
/// per required token on every predicate evaluation, and nothing is cached.
pub trait Shape {
    /// Whether the value can be iterated.
    fn is_iterable(&self) -> bool;

    /// Whether the value exposes the operation named by `token`.
    fn exposes(&self, token: Token) -> bool;

    /// Whether the value exposes every token in `tokens`.
    fn exposes_all(&self, tokens: &[Token]) -> bool {
        tokens.iter().all(|token| self.exposes(*token))
    }
}

/// Implement [`Shape`] for a type as "iterable, exposing every token of
/// these interfaces".
///
/// ```ignore
/// impl_shape!([T] Vec<T> => IndexedCollection);
/// impl_shape!([K, V] MyMap<K, V> => KeyedCollection);
/// ```
#[macro_export]
macro_rules! impl_shape {
    ([$($gen:tt)*] $ty:ty => $($iface:ident),+ $(,)?) => {
        impl<$($gen)*> $crate::Shape for $ty {
            #[inline]
            fn is_iterable(&self) -> bool {
                true
            }

            fn exposes(&self, token: $crate::Token) -> bool {
                false $(|| $crate::Interface::$iface.requires(token))+
            }
        }
    };
    ($ty:ty => $($iface:ident),+ $(,)?) => {
        $crate::impl_shape!([] $ty => $($iface),+);
    };
}

/// Shape of a value that implements exactly the given interface.
///
/// Useful as a stand-in candidate in tests and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conforming(pub Interface);

impl Shape for Conforming {
    fn is_iterable(&self) -> bool {
        true
    }

    fn exposes(&self, token: Token) -> bool {
        self.0.requires(token)
    }
}

// =============================================================================
// Delegating impls
// =============================================================================

impl<S: Shape + ?Sized> Shape for &S {
    fn is_iterable(&self) -> bool {
        (**self).is_iterable()
    }

    fn exposes(&self, token: Token) -> bool {
        (**self).exposes(token)
    }
}

impl<S: Shape + ?Sized> Shape for &mut S {
    fn is_iterable(&self) -> bool {
        (**self).is_iterable()
    }

    fn exposes(&self, token: Token) -> bool {
        (**self).exposes(token)
    }
}

/// `None` plays the role of a null candidate.
impl<S: Shape> Shape for Option<S> {
    fn is_iterable(&self) -> bool {
        self.as_ref().is_some_and(Shape::is_iterable)
    }

    fn exposes(&self, token: Token) -> bool {
        self.as_ref().is_some_and(|inner| inner.exposes(token))
    }
}

#[cfg(feature = "alloc")]
macro_rules! impl_shape_for_pointer {
    ($($ptr:ident)::+) => {
        impl<S: Shape + ?Sized> Shape for $($ptr)::+<S> {
            fn is_iterable(&self) -> bool {
                (**self).is_iterable()
            }

            fn exposes(&self, token: Token) -> bool {
                (**self).exposes(token)
            }
        }
    };
}

#[cfg(feature = "alloc")]
impl_shape_for_pointer!(alloc::boxed::Box);
#[cfg(feature = "alloc")]
impl_shape_for_pointer!(alloc::rc::Rc);
#[cfg(feature = "alloc")]
impl_shape_for_pointer!(alloc::sync::Arc);

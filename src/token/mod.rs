//! # Layer 1: Capability Tokens
//!
//! A [`Token`] names one capability operation, e.g. `Collection.add`.
//!
//! Identity is derived from the token's global name alone:
//!
//! ```text
//! "Collection.add" -> FNV-1a (u64) -> fast-path compare
//!                  -> full name    -> exact compare
//! ```
//!
//! Two copies of this crate linked into one process (or any third-party
//! code calling [`Token::new`] with the same name) therefore agree on
//! identity without sharing any state.

pub mod registry;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::primitives::hash::{find_dot, fnv1a_64_str, str_eq};

/// Globally-unique, stable identifier of one capability operation.
#[derive(Clone, Copy)]
pub struct Token {
    name: &'static str,
    hash: u64,
}

impl Token {
    /// Mint the token registered under `name`.
    ///
    /// Minting is a pure function of the name: every call with the same
    /// name, from any crate, yields an equal token.
    pub const fn new(name: &'static str) -> Self {
        Token { name, hash: fnv1a_64_str(name) }
    }

    /// The global name, `"<InterfaceName>.<operationName>"`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// FNV-1a hash of the global name.
    pub const fn hash64(&self) -> u64 {
        self.hash
    }

    /// Interface part of the name (before the first `.`).
    pub fn interface(&self) -> &'static str {
        match find_dot(self.name) {
            Some(at) => &self.name[..at],
            None => self.name,
        }
    }

    /// Operation part of the name (after the first `.`), empty if none.
    pub fn operation(&self) -> &'static str {
        match find_dot(self.name) {
            Some(at) => &self.name[at + 1..],
            None => "",
        }
    }

    /// Const equality, usable in `const` items and `match` guards.
    pub const fn same_as(&self, other: &Token) -> bool {
        self.hash == other.hash && str_eq(self.name, other.name)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(other.name)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Name that matches no well-known token.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability token: {name}")]
pub struct UnknownToken {
    /// The name that failed to resolve.
    pub name: alloc::string::String,
}

/// Name that matches no well-known token.
#[cfg(not(feature = "alloc"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability token")]
pub struct UnknownToken;

impl FromStr for Token {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        #[cfg(feature = "alloc")]
        let err = || UnknownToken { name: s.into() };
        #[cfg(not(feature = "alloc"))]
        let err = || UnknownToken;

        registry::lookup(s).ok_or_else(err)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Token {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Token {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TokenVisitor;

        impl serde::de::Visitor<'_> for TokenVisitor {
            type Value = Token;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a capability token name")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Token, E> {
                registry::lookup(v)
                    .ok_or_else(|| E::invalid_value(serde::de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_str(TokenVisitor)
    }
}

// =============================================================================
// Token declaration macro
// =============================================================================

/// Declare token accessors inside an interface module.
///
/// Each entry produces a `SCREAMING_CASE` constant and a `const fn` accessor
/// returning it.
///
/// ```ignore
/// tokens! {
///     "Collection";
///     /// Append an element.
///     add => "add",
/// }
/// // pub const ADD: Token = Token::new("Collection.add");
/// // pub const fn add() -> Token { ADD }
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! tokens {
    (
        $iface:literal;
        $(
            $(#[$meta:meta])*
            $accessor:ident => $op:literal
        ),+ $(,)?
    ) => {
        $crate::paste::paste! {
            $(
                $(#[$meta])*
                pub const [<$accessor:upper>]: $crate::Token =
                    $crate::Token::new(concat!($iface, ".", $op));

                $(#[$meta])*
                #[inline]
                pub const fn $accessor() -> $crate::Token {
                    [<$accessor:upper>]
                }
            )+
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_follows_name() {
        let a = Token::new("Collection.add");
        let b = Token::new("Collection.add");
        let c = Token::new("Collection.clear");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.hash64(), b.hash64());
    }

    #[test]
    fn splits_name() {
        let t = Token::new("ReadonlyIndexedCollection.getAt");
        assert_eq!(t.interface(), "ReadonlyIndexedCollection");
        assert_eq!(t.operation(), "getAt");

        let bare = Token::new("orphan");
        assert_eq!(bare.interface(), "orphan");
        assert_eq!(bare.operation(), "");
    }

    #[test]
    fn ordering_is_by_name() {
        let a = Token::new("A.x");
        let b = Token::new("B.x");
        assert!(a < b);
    }
}

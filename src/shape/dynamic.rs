//! Dynamically assembled candidates.

use alloc::collections::BTreeSet;
use core::fmt;

use super::Shape;
use crate::Token;
use crate::interface::Interface;

/// A candidate whose exposed tokens are decided at runtime.
///
/// Models an arbitrary object carrying token-keyed entries: tokens can be
/// added and removed at any time, and predicates always see the current
/// set.
///
/// ```
/// use collection_caps::prelude::*;
///
/// let mut shape = DynamicShape::iterable()
///     .with(readonly_collection::size())
///     .with(readonly_collection::has());
/// assert!(is_readonly_collection(&shape));
///
/// shape.remove(readonly_collection::has());
/// assert!(!is_readonly_collection(&shape));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DynamicShape {
    iterable: bool,
    tokens: BTreeSet<Token>,
}

impl DynamicShape {
    /// A non-iterable value with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// An iterable value with no entries.
    pub fn iterable() -> Self {
        Self { iterable: true, tokens: BTreeSet::new() }
    }

    /// An iterable value exposing every token `interface` requires.
    pub fn implementing(interface: Interface) -> Self {
        Self::iterable().with_interface(interface)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, token: Token) -> Self {
        self.insert(token);
        self
    }

    /// Builder form of [`remove`](Self::remove).
    pub fn without(mut self, token: Token) -> Self {
        self.remove(token);
        self
    }

    /// Add every token `interface` requires, inherited ones included.
    pub fn with_interface(mut self, interface: Interface) -> Self {
        self.tokens.extend(interface.tokens());
        self
    }

    /// Expose `token`. Returns `false` if it was already exposed.
    pub fn insert(&mut self, token: Token) -> bool {
        self.tokens.insert(token)
    }

    /// Stop exposing `token`. Returns `false` if it was not exposed.
    pub fn remove(&mut self, token: Token) -> bool {
        self.tokens.remove(&token)
    }

    pub fn set_iterable(&mut self, iterable: bool) {
        self.iterable = iterable;
    }

    /// Currently exposed tokens, in name order.
    pub fn tokens(&self) -> impl Iterator<Item = Token> + '_ {
        self.tokens.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Shape for DynamicShape {
    fn is_iterable(&self) -> bool {
        self.iterable
    }

    fn exposes(&self, token: Token) -> bool {
        self.tokens.contains(&token)
    }
}

impl FromIterator<Token> for DynamicShape {
    /// Collects into an iterable shape.
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self { iterable: true, tokens: iter.into_iter().collect() }
    }
}

impl Extend<Token> for DynamicShape {
    fn extend<I: IntoIterator<Item = Token>>(&mut self, iter: I) {
        self.tokens.extend(iter);
    }
}

impl fmt::Debug for DynamicShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicShape")
            .field("iterable", &self.iterable)
            .field("tokens", &self.tokens.iter().map(Token::name).collect::<alloc::vec::Vec<_>>())
            .finish()
    }
}

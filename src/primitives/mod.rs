//! # Layer 0: Primitives
//!
//! Const building blocks for token identity:
//! - `hash.rs`: FNV-1a hashing and string comparison usable in `const` context.

pub mod hash;

pub use hash::{fnv1a_64_str, str_eq};

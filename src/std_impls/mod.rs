//! # Layer 4: Standard Library Adapters
//!
//! Interface and [`Shape`](crate::Shape) impls for the standard containers.
//!
//! | Type | Strongest interface |
//! |------|---------------------|
//! | `[T]`, `[T; N]` | `FixedSizeIndexedCollection` |
//! | `Vec<T>`, `VecDeque<T>` | `IndexedCollection` |
//! | `HashSet<T>`, `BTreeSet<T>` | `Collection` |
//! | `HashMap<K, V>`, `BTreeMap<K, V>` | `KeyedCollection` |
//!
//! Shape impls carry the same bounds as the trait impls, so a type's shape
//! never claims more than the type implements.

mod map;
mod sequence;
mod set;

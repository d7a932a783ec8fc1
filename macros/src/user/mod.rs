//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Shape)]` | on struct/enum | Implement `Shape` |
//! | `conforms!` | function macro | Boolean interface check |

mod conforms;
mod shape;

pub use conforms::{expand_conforms, ConformsInput};
pub use shape::expand_derive_shape;

// Common utilities shared between macros
//
// This module contains:
// - bool_expr: Boolean expression parsing over interface names
// - interfaces: The interface name table

mod bool_expr;
mod interfaces;

pub use bool_expr::*;
pub use interfaces::*;

//! Shared types for the MASClang front end: source positions, string
//! interning, and diagnostic reporting. Every other crate in the workspace
//! (`masc-lex`, `masc-par`, `masc-sem`, `masc-drv`) depends on this one;
//! it depends on nothing in the workspace itself.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, Handler, Level};
pub use error::Located;
pub use span::Position;
pub use symbol::{Interner, Symbol};

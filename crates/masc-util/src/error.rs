//! Shared error plumbing.
//!
//! `masc-lex` and `masc-par` each define their own `thiserror`-derived error
//! type (`LexError`, `ParseError`) since their failure modes are specific to
//! their grammar layer. What's common across the whole front end is *how* an
//! error carries a position, which this trait captures so `masc-drv` can
//! format any of them uniformly without matching on which crate produced it.

use crate::Position;

/// An error that can report where in the source it happened.
pub trait Located {
    fn position(&self) -> Position;
}

//! Inferred expression types.
//!
//! Expression typing returns either a known `TypeTag` or the sentinel
//! `Unknown`, once a diagnostic has already been emitted for that
//! expression, so callers don't re-diagnose the same failure further up
//! the tree. Modeled here as a closed enum rather than a string:
//! `Ty::Known` carries the real `TypeTag`, `Ty::Unknown` is the sentinel.

use std::fmt;

use masc_par::ast::TypeTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ty {
    Known(TypeTag),
    Unknown,
}

impl Ty {
    pub fn tag(self) -> Option<TypeTag> {
        match self {
            Ty::Known(tag) => Some(tag),
            Ty::Unknown => None,
        }
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, Ty::Unknown)
    }
}

impl From<TypeTag> for Ty {
    fn from(tag: TypeTag) -> Self {
        Ty::Known(tag)
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Known(tag) => write!(f, "{tag}"),
            Ty::Unknown => write!(f, "unknown"),
        }
    }
}

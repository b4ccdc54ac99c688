//! Source position tracking.
//!
//! MASClang diagnostics are anchored to a single `(line, column)` pair
//! rather than a byte-offset range: the lexer reports the position it was
//! at while producing a token (see `masc-lex`'s module docs for exactly
//! what that means), and the parser/analyser simply carry that position
//! forward onto AST nodes and diagnostics.

use std::fmt;

/// A 1-based source location.
///
/// Lines are 1-based; columns are 1-based within a line and reset to 0
/// after each `\n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Dummy position for tests and synthesized nodes.
    pub const DUMMY: Position = Position { line: 0, column: 0 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The position of the very first character of a fresh source buffer.
    #[inline]
    pub const fn start() -> Self {
        Self { line: 1, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_fields() {
        let pos = Position::new(3, 7);
        assert_eq!(pos.line, 3);
        assert_eq!(pos.column, 7);
    }

    #[test]
    fn start_is_line_one_column_zero() {
        let pos = Position::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 0);
    }

    #[test]
    fn display_format() {
        assert_eq!(Position::new(2, 5).to_string(), "2:5");
    }

    #[test]
    fn dummy_is_zero_zero() {
        assert_eq!(Position::DUMMY, Position::new(0, 0));
    }
}

//! Fatal lexer errors.
//!
//! Only two things can make the lexer fail outright: an unterminated
//! string literal and an invalid char literal. Everything
//! else the lexer can't make sense of becomes an `Illegal` token instead of
//! an `Err`, and is left for the parser to reject as a syntax error.

use masc_util::{Diagnostic, Located, Position};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LexError {
    #[error("unterminated string literal at {pos}")]
    UnterminatedString { pos: Position },

    #[error("unterminated char literal at {pos}")]
    UnterminatedChar { pos: Position },

    #[error("empty char literal at {pos}")]
    EmptyCharLiteral { pos: Position },

    #[error("char literal contains more than one character at {pos}")]
    OverlongCharLiteral { pos: Position },
}

impl Located for LexError {
    fn position(&self) -> Position {
        match self {
            LexError::UnterminatedString { pos }
            | LexError::UnterminatedChar { pos }
            | LexError::EmptyCharLiteral { pos }
            | LexError::OverlongCharLiteral { pos } => *pos,
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        let pos = error.position();
        Diagnostic::error(error.to_string(), pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_diagnostic_carrying_its_position() {
        let error = LexError::UnterminatedString {
            pos: Position::new(3, 5),
        };
        let diagnostic: Diagnostic = error.into();
        assert_eq!(diagnostic.pos, Position::new(3, 5));
        assert!(diagnostic.message.contains("unterminated string literal"));
    }
}

//! Fatal parser errors.
//!
//! Parse failures are a typed `Result`, not a panic: every `parse_*`
//! method returns `Result<T, ParseError>`, and `parse_program` stops at
//! the first `Err` rather than attempting any recovery.

use masc_lex::TokenKind;
use masc_util::{Diagnostic, Located, Position};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("expected {expected}, found {found} at {pos}")]
    Expected {
        expected: String,
        found: TokenKind,
        pos: Position,
    },

    #[error("unexpected token {found} at {pos}")]
    UnexpectedToken { found: TokenKind, pos: Position },

    #[error("lexical error: {message} at {pos}")]
    Lexical { message: String, pos: Position },

    #[error("invalid literal '{text}': {message} at {pos}")]
    InvalidLiteral {
        text: String,
        message: String,
        pos: Position,
    },
}

impl Located for ParseError {
    fn position(&self) -> Position {
        match self {
            ParseError::Expected { pos, .. } => *pos,
            ParseError::UnexpectedToken { pos, .. } => *pos,
            ParseError::Lexical { pos, .. } => *pos,
            ParseError::InvalidLiteral { pos, .. } => *pos,
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        let pos = error.position();
        Diagnostic::error(error.to_string(), pos)
    }
}

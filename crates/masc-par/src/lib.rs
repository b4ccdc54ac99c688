//! Recursive-descent parsing for MASClang.
//!
//! The grammar uses explicit precedence levels rather than Pratt/precedence
//! climbing: `Comparison` calls `Additive` calls `Multiplicative` calls
//! `Factor`, each its own method, rather than a Pratt/binding-power table.
//! This grammar has only four fixed levels, so a handful of direct
//! recursive calls reads more honestly than a binding-power table with
//! four rows.

pub mod ast;
mod decl;
mod error;
mod expr;
mod stmt;

pub use error::ParseError;

use masc_lex::{Lexer, Token, TokenKind};
use masc_util::{Interner, Position, Symbol};

/// Parses MASClang source text into a [`ast::Program`].
///
/// Owns the lexer and a single lookahead token. It also holds the
/// interner identifiers and string literals are folded through, since the
/// AST it builds carries `Symbol`s rather than owned `String`s (see
/// `masc-util::symbol`'s module docs).
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    interner: &'a mut Interner,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, interner: &'a mut Interner) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = next_token(&mut lexer)?;
        Ok(Self {
            lexer,
            current,
            interner,
        })
    }

    pub(crate) fn intern(&mut self, text: &str) -> Symbol {
        self.interner.intern(text)
    }

    /// Parses an entire program: a sequence of top-level declarations until
    /// end of input. Stops at the first syntax error; there is no error
    /// recovery.
    pub fn parse_program(&mut self) -> Result<ast::Program, ParseError> {
        let mut decls = Vec::new();
        while self.current.kind != TokenKind::Eof {
            decls.push(self.parse_top_level()?);
        }
        Ok(decls)
    }

    fn peek(&self) -> &TokenKind {
        &self.current.kind
    }

    fn position(&self) -> Position {
        self.current.pos
    }

    /// Consumes the current token and returns it, advancing the lookahead.
    fn bump(&mut self) -> Result<Token, ParseError> {
        let next = next_token(&mut self.lexer)?;
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// Consumes the current token if it matches `kind`, else a fatal
    /// `Expected` error.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.current.kind == kind {
            self.bump()
        } else {
            Err(ParseError::Expected {
                expected: kind.to_string(),
                found: self.current.kind.clone(),
                pos: self.position(),
            })
        }
    }

    /// Consumes the current token if it matches `kind`, returning whether it
    /// matched, without erroring otherwise.
    fn eat(&mut self, kind: TokenKind) -> Result<bool, ParseError> {
        if self.current.kind == kind {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

fn next_token(lexer: &mut Lexer<'_>) -> Result<Token, ParseError> {
    lexer.next().map_err(|e| ParseError::Lexical {
        message: e.to_string(),
        pos: masc_util::Located::position(&e),
    })
}

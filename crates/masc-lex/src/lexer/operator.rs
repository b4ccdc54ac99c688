//! One-rune-lookahead operator lexing: `=`, `!`, `<`, `>`, `&`, `|`.
//!
//! `&&` and `||` only need to be recognised, not acted upon: they are
//! reserved but unused in expressions. A lone `&` or `|` with no matching
//! second character is `Illegal` rather than some single-rune bitwise
//! operator MASClang doesn't have.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor().advance();
        if self.cursor().match_char('=') {
            self.finish(TokenKind::Equal, "==")
        } else {
            self.finish(TokenKind::Assign, "=")
        }
    }

    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor().advance();
        if self.cursor().match_char('=') {
            self.finish(TokenKind::NEqual, "!=")
        } else {
            self.finish(TokenKind::Not, "!")
        }
    }

    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor().advance();
        if self.cursor().match_char('=') {
            self.finish(TokenKind::LtOe, "<=")
        } else {
            self.finish(TokenKind::Lt, "<")
        }
    }

    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor().advance();
        if self.cursor().match_char('=') {
            self.finish(TokenKind::GtOe, ">=")
        } else {
            self.finish(TokenKind::Gt, ">")
        }
    }

    pub(crate) fn lex_amp(&mut self) -> Token {
        self.cursor().advance();
        if self.cursor().match_char('&') {
            self.finish(TokenKind::And, "&&")
        } else {
            self.finish(TokenKind::Illegal, "&")
        }
    }

    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.cursor().advance();
        if self.cursor().match_char('|') {
            self.finish(TokenKind::Or, "||")
        } else {
            self.finish(TokenKind::Illegal, "|")
        }
    }
}

//! Identifier and keyword lexing.

use crate::lexer::core::ident_continue;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword: `[A-Za-z_][A-Za-z0-9_]*`.
    ///
    /// Looks the resulting lexeme up in the keyword table; a match emits the
    /// keyword's kind, otherwise `Ident`.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        let start = self.cursor().byte_offset();
        self.cursor().advance();
        while ident_continue(self.cursor().current_char()) {
            self.cursor().advance();
        }

        let text = self.cursor().slice_from(start).to_string();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Ident);
        self.finish(kind, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one(source: &str) -> Token {
        Lexer::new(source).next().unwrap()
    }

    #[test]
    fn plain_identifier() {
        let token = lex_one("total_count");
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.lexeme, "total_count");
    }

    #[test]
    fn identifier_with_digits_after_first_char() {
        let token = lex_one("x1y2");
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.lexeme, "x1y2");
    }

    #[test]
    fn keyword_func() {
        let token = lex_one("func");
        assert_eq!(token.kind, TokenKind::Func);
    }

    #[test]
    fn keyword_is_exact_match_not_prefix() {
        let token = lex_one("function");
        assert_eq!(token.kind, TokenKind::Ident);
        assert_eq!(token.lexeme, "function");
    }

    #[test]
    fn leading_underscore_is_an_identifier() {
        let token = lex_one("_private");
        assert_eq!(token.kind, TokenKind::Ident);
    }

    #[test]
    fn boolean_literal_keywords() {
        assert_eq!(lex_one("true").kind, TokenKind::True);
        assert_eq!(lex_one("false").kind, TokenKind::False);
    }
}

//! String and char literal lexing.
//!
//! Neither literal kind is escape-aware: a `"` consumes runes verbatim
//! until the next `"`, and a `'` consumes exactly one rune followed by a
//! closing `'`.

use crate::error::LexError;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes `STRING_LIT`. The lexeme carried on the token is the content
    /// between the quotes, not the quotes themselves.
    pub(crate) fn lex_string(&mut self) -> Result<Token, LexError> {
        self.cursor().advance(); // opening '"'
        let start = self.cursor().byte_offset();

        loop {
            if self.cursor().is_at_end() {
                return Err(LexError::UnterminatedString {
                    pos: self.position(),
                });
            }
            if self.cursor().current_char() == '"' {
                break;
            }
            self.cursor().advance();
        }

        let text = self.cursor().slice_from(start).to_string();
        self.cursor().advance(); // closing '"'
        Ok(self.finish(TokenKind::StringLit, text))
    }

    /// Lexes `CHAR_LIT`.
    ///
    /// The lexeme is just the character itself, not the quoted form.
    /// `''` (empty) and anything where the second rune isn't the closing
    /// `'` are fatal.
    pub(crate) fn lex_char(&mut self) -> Result<Token, LexError> {
        self.cursor().advance(); // opening '\''

        if self.cursor().is_at_end() {
            return Err(LexError::UnterminatedChar {
                pos: self.position(),
            });
        }
        if self.cursor().current_char() == '\'' {
            return Err(LexError::EmptyCharLiteral {
                pos: self.position(),
            });
        }

        let inner = self.cursor().current_char();
        self.cursor().advance();

        if self.cursor().is_at_end() {
            return Err(LexError::UnterminatedChar {
                pos: self.position(),
            });
        }
        if self.cursor().current_char() != '\'' {
            return Err(LexError::OverlongCharLiteral {
                pos: self.position(),
            });
        }
        self.cursor().advance(); // closing '\''

        Ok(self.finish(TokenKind::CharLit, inner.to_string()))
    }
}

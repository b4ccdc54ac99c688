//! Number literal lexing.
//!
//! MASClang's number literals are plain decimal digits, optionally
//! extended by a single `.` followed by at least one more digit. There is
//! no hex/octal/binary, no digit-group separators, and no exponent
//! notation.

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Lexes `INT_LIT` or `FLOAT_LIT`.
    ///
    /// Accumulates digits; if a `.` is followed by at least one digit, the
    /// dot and the following digits extend the lexeme into a float.
    /// A trailing `.` with no digit after it is folded into the lexeme
    /// anyway and rejected as `ILLEGAL`: `1.` followed by an identifier is
    /// one illegal token, not a silent split into `1` `.` `ident`.
    pub(crate) fn lex_number(&mut self) -> Token {
        let start = self.cursor().byte_offset();

        while self.cursor().current_char().is_ascii_digit() {
            self.cursor().advance();
        }

        let is_float =
            self.cursor().current_char() == '.' && self.cursor().peek_char(1).is_ascii_digit();

        if is_float {
            self.cursor().advance(); // consume '.'
            while self.cursor().current_char().is_ascii_digit() {
                self.cursor().advance();
            }
            let text = self.cursor().slice_from(start).to_string();
            self.finish(TokenKind::FloatLit, text)
        } else {
            let text = self.cursor().slice_from(start).to_string();

            // A lone trailing '.' with no digit after it is not part of a
            // valid number: fold it in anyway so the combined lexeme is
            // rejected as ILLEGAL.
            if self.cursor().current_char() == '.' {
                self.cursor().advance();
                let text = self.cursor().slice_from(start).to_string();
                return self.finish(TokenKind::Illegal, text);
            }

            self.finish(TokenKind::IntLit, text)
        }
    }
}

//! Expression parsing: the `Comparison`, `Additive`, `Multiplicative`, and
//! `Factor` productions.
//!
//! Precedence is explicit rather than table-driven: `parse_comparison`
//! calls `parse_additive`, which calls `parse_multiplicative`, which calls
//! `parse_factor`, each consuming a left-associative chain of its own
//! operators before returning to its caller. There is no generic
//! parenthesised expression in `Factor`; this is a real grammar
//! limitation, not an oversight to fix here.

use crate::ast::{AddOp, BinOp, CompareOp, Expr, FuncCall, MulOp};
use crate::error::ParseError;
use crate::Parser;
use masc_lex::TokenKind;

impl<'a> Parser<'a> {
    /// `Comparison := Additive ( (== | != | < | <= | > | >=) Additive )*`
    pub(crate) fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.peek() {
                TokenKind::Equal => CompareOp::Eq,
                TokenKind::NEqual => CompareOp::NEq,
                TokenKind::Lt => CompareOp::Lt,
                TokenKind::LtOe => CompareOp::LtOe,
                TokenKind::Gt => CompareOp::Gt,
                TokenKind::GtOe => CompareOp::GtOe,
                _ => break,
            };
            self.bump()?;
            let right = self.parse_additive()?;
            left = Expr::BinaryExpression {
                left: Box::new(left),
                op: BinOp::Compare(op),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// `Additive := Multiplicative ( (+ | - | .) Multiplicative )*`
    ///
    /// `-` is parsed here at the additive level even though only `+` and
    /// `.` belong to the additive family for typing purposes; the grammar
    /// nonetheless lexes `-` at this precedence, so it is parsed here but
    /// tagged `BinOp::Sub` rather than `BinOp::Add`, leaving it for the
    /// analyser's "other arithmetic" rule.
    pub(crate) fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.peek() {
                TokenKind::Add => BinOp::Add(AddOp::Add),
                TokenKind::Dot => BinOp::Add(AddOp::Concat),
                TokenKind::Sub => BinOp::Sub,
                _ => break,
            };
            self.bump()?;
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryExpression {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// `Multiplicative := Factor ( (* | / | %) Factor )*`
    pub(crate) fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.peek() {
                TokenKind::Mul => MulOp::Mul,
                TokenKind::Div => MulOp::Div,
                TokenKind::Rem => MulOp::Rem,
                _ => break,
            };
            self.bump()?;
            let right = self.parse_factor()?;
            left = Expr::BinaryExpression {
                left: Box::new(left),
                op: BinOp::Mul(op),
                right: Box::new(right),
            };
        }
        Ok(left)
    }

    /// `Factor := INT_LIT | FLOAT_LIT | STRING_LIT | CHAR_LIT`
    /// `        | 'true' | 'false'`
    /// `        | IDENT ( '(' ArgList? ')' )?`
    pub(crate) fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let pos = self.position();
        match self.peek().clone() {
            TokenKind::IntLit => {
                let token = self.bump()?;
                token
                    .lexeme
                    .parse::<i64>()
                    .map(Expr::IntLiteral)
                    .map_err(|e| ParseError::InvalidLiteral {
                        text: token.lexeme,
                        message: e.to_string(),
                        pos,
                    })
            }
            TokenKind::FloatLit => {
                let token = self.bump()?;
                token
                    .lexeme
                    .parse::<f64>()
                    .map(Expr::FloatLiteral)
                    .map_err(|e| ParseError::InvalidLiteral {
                        text: token.lexeme,
                        message: e.to_string(),
                        pos,
                    })
            }
            TokenKind::StringLit => {
                let token = self.bump()?;
                let symbol = self.intern(&token.lexeme);
                Ok(Expr::StringLiteral(symbol))
            }
            TokenKind::CharLit => {
                let token = self.bump()?;
                let c = token.lexeme.chars().next().ok_or_else(|| ParseError::InvalidLiteral {
                    text: token.lexeme.clone(),
                    message: "empty char literal lexeme".to_string(),
                    pos,
                })?;
                Ok(Expr::CharLiteral(c))
            }
            TokenKind::True => {
                self.bump()?;
                Ok(Expr::BoolLiteral(true))
            }
            TokenKind::False => {
                self.bump()?;
                Ok(Expr::BoolLiteral(false))
            }
            TokenKind::Ident => {
                let name = self.parse_ident_symbol()?;
                if self.eat(TokenKind::LParen)? {
                    let args = self.parse_arg_list()?;
                    self.expect(TokenKind::RParen)?;
                    Ok(Expr::FuncCall(FuncCall {
                        line: pos.line,
                        name,
                        args,
                    }))
                } else {
                    Ok(Expr::Ident(name))
                }
            }
            found => Err(ParseError::UnexpectedToken { found, pos }),
        }
    }
}

//! Statement parsing: the `Statement`, `VarDecl`, `IfStmt`, `WhileStmt`,
//! `ForStmt`, `PrintStmt`, `InputStmt`, `ReturnStmt`, and `AssignOrCall`
//! productions.

use crate::ast::{
    Assignment, CodeBlock, Decl, For, ForIncrement, ForInit, FuncCall, If, Input, Print, Return,
    Var, While,
};
use crate::error::ParseError;
use crate::Parser;
use masc_lex::TokenKind;

impl<'a> Parser<'a> {
    /// `Statement := VarDecl | IfStmt | WhileStmt | ForStmt`
    /// `           | PrintStmt | InputStmt | ReturnStmt | AssignOrCall`
    pub(crate) fn parse_statement(&mut self) -> Result<Decl, ParseError> {
        match self.peek() {
            TokenKind::Var => Ok(Decl::Var(self.parse_var_decl()?)),
            TokenKind::If => Ok(Decl::If(self.parse_if()?)),
            TokenKind::While => Ok(Decl::While(self.parse_while()?)),
            TokenKind::For => Ok(Decl::For(self.parse_for()?)),
            TokenKind::Print => Ok(Decl::Print(self.parse_print()?)),
            TokenKind::Input => Ok(Decl::Input(self.parse_input()?)),
            TokenKind::Return => Ok(Decl::Return(self.parse_return()?)),
            TokenKind::Ident => self.parse_assign_or_call(true),
            _ => Err(ParseError::UnexpectedToken {
                found: self.peek().clone(),
                pos: self.position(),
            }),
        }
    }

    /// `Block := '{' Statement* '}'`
    pub(crate) fn parse_block(&mut self) -> Result<CodeBlock, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while *self.peek() != TokenKind::RBrace {
            stmts.push(self.parse_statement()?);
        }
        self.expect(TokenKind::RBrace)?;
        Ok(stmts)
    }

    /// `VarDecl := 'var' IDENT ':' Type ('=' Comparison)? ';'`
    fn parse_var_decl(&mut self) -> Result<Var, ParseError> {
        let line = self.position().line;
        self.expect(TokenKind::Var)?;
        let name = self.parse_ident_symbol()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        let value = if self.eat(TokenKind::Assign)? {
            Some(self.parse_comparison()?)
        } else {
            None
        };
        self.expect(TokenKind::Semi)?;
        Ok(Var {
            line,
            name,
            ty,
            value,
        })
    }

    /// `IfStmt := 'if' '(' Comparison ')' Block ('else' Block)?`
    fn parse_if(&mut self) -> Result<If, ParseError> {
        let line = self.position().line;
        self.expect(TokenKind::If)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_comparison()?;
        self.expect(TokenKind::RParen)?;
        let then_block = self.parse_block()?;
        let else_block = if self.eat(TokenKind::Else)? {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(If {
            line,
            condition,
            then_block,
            else_block,
        })
    }

    /// `WhileStmt := 'while' '(' Comparison ')' Block`
    fn parse_while(&mut self) -> Result<While, ParseError> {
        let line = self.position().line;
        self.expect(TokenKind::While)?;
        self.expect(TokenKind::LParen)?;
        let condition = self.parse_comparison()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;
        Ok(While {
            line,
            condition,
            body,
        })
    }

    /// `ForStmt := 'for' '(' (VarDecl | AssignOrCall_withSemi)`
    /// `                  Comparison ';'`
    /// `                  AssignOrCall_noSemi`
    /// `           ')' Block`
    fn parse_for(&mut self) -> Result<For, ParseError> {
        let line = self.position().line;
        self.expect(TokenKind::For)?;
        self.expect(TokenKind::LParen)?;

        let init = if *self.peek() == TokenKind::Var {
            ForInit::Var(self.parse_var_decl()?)
        } else {
            self.parse_for_init_assign_or_call()?
        };

        let condition = self.parse_comparison()?;
        self.expect(TokenKind::Semi)?;

        let increment = self.parse_for_increment()?;
        self.expect(TokenKind::RParen)?;
        let body = self.parse_block()?;

        Ok(For {
            line,
            init: Box::new(init),
            condition,
            increment: Box::new(increment),
            body,
        })
    }

    /// `PrintStmt := 'print' '(' Additive ')' ';'`
    fn parse_print(&mut self) -> Result<Print, ParseError> {
        let line = self.position().line;
        self.expect(TokenKind::Print)?;
        self.expect(TokenKind::LParen)?;
        let value = self.parse_additive()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semi)?;
        Ok(Print { line, value })
    }

    /// `InputStmt := 'input' '(' IDENT ')' ';'`
    fn parse_input(&mut self) -> Result<Input, ParseError> {
        let line = self.position().line;
        self.expect(TokenKind::Input)?;
        self.expect(TokenKind::LParen)?;
        let target_name = self.parse_ident_symbol()?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Semi)?;
        Ok(Input { line, target_name })
    }

    /// `ReturnStmt := 'return' Additive? ';'`
    fn parse_return(&mut self) -> Result<Return, ParseError> {
        let line = self.position().line;
        self.expect(TokenKind::Return)?;
        let value = if *self.peek() == TokenKind::Semi {
            None
        } else {
            Some(self.parse_additive()?)
        };
        self.expect(TokenKind::Semi)?;
        Ok(Return { line, value })
    }

    /// `AssignOrCall := IDENT ( '=' Additive | '(' ArgList? ')' ) [';']`
    ///
    /// `require_semi` distinguishes the ordinary statement form (which
    /// consumes its trailing `;`) from the `for` loop's increment clause
    /// (which does not, since the loop's own `)` follows directly).
    fn parse_assign_or_call(&mut self, require_semi: bool) -> Result<Decl, ParseError> {
        let line = self.position().line;
        let name = self.parse_ident_symbol()?;

        let decl = if self.eat(TokenKind::Assign)? {
            let value = self.parse_additive()?;
            Decl::Assignment(Assignment { line, name, value })
        } else {
            self.expect(TokenKind::LParen)?;
            let args = self.parse_arg_list()?;
            self.expect(TokenKind::RParen)?;
            Decl::FuncCall(FuncCall { line, name, args })
        };

        if require_semi {
            self.expect(TokenKind::Semi)?;
        }
        Ok(decl)
    }

    fn parse_for_init_assign_or_call(&mut self) -> Result<ForInit, ParseError> {
        match self.parse_assign_or_call(true)? {
            Decl::Assignment(a) => Ok(ForInit::Assignment(a)),
            Decl::FuncCall(c) => Ok(ForInit::FuncCall(c)),
            _ => unreachable!("parse_assign_or_call only produces Assignment or FuncCall"),
        }
    }

    fn parse_for_increment(&mut self) -> Result<ForIncrement, ParseError> {
        match self.parse_assign_or_call(false)? {
            Decl::Assignment(a) => Ok(ForIncrement::Assignment(a)),
            Decl::FuncCall(c) => Ok(ForIncrement::FuncCall(c)),
            _ => unreachable!("parse_assign_or_call only produces Assignment or FuncCall"),
        }
    }

    /// `ArgList := Additive (',' Additive)*`
    pub(crate) fn parse_arg_list(&mut self) -> Result<Vec<crate::ast::Expr>, ParseError> {
        if *self.peek() == TokenKind::RParen {
            return Ok(Vec::new());
        }
        let mut args = vec![self.parse_additive()?];
        while self.eat(TokenKind::Comma)? {
            args.push(self.parse_additive()?);
        }
        Ok(args)
    }
}

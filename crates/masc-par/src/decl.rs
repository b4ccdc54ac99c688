//! Top-level declarations: `Function` and the `Type` production shared by
//! parameters, `var` declarations, and return types.

use crate::ast::{Decl, Function, Param, TypeTag};
use crate::error::ParseError;
use crate::Parser;
use masc_lex::TokenKind;
use masc_util::Symbol;

impl<'a> Parser<'a> {
    /// `TopLevel := Function | Statement`
    pub(crate) fn parse_top_level(&mut self) -> Result<Decl, ParseError> {
        if *self.peek() == TokenKind::Func {
            Ok(Decl::Function(self.parse_function()?))
        } else {
            self.parse_statement()
        }
    }

    /// `Function := 'func' IDENT '(' Params? ')' ':' Type Block`
    fn parse_function(&mut self) -> Result<Function, ParseError> {
        let line = self.position().line;
        self.expect(TokenKind::Func)?;
        let name = self.parse_ident_symbol()?;
        self.expect(TokenKind::LParen)?;
        let params = if *self.peek() == TokenKind::RParen {
            Vec::new()
        } else {
            self.parse_params()?
        };
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Colon)?;
        let return_type = self.parse_type()?;
        let body = self.parse_block()?;

        Ok(Function {
            line,
            name,
            params,
            return_type,
            body,
        })
    }

    /// `Params := Param (',' Param)*`
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = vec![self.parse_param()?];
        while self.eat(TokenKind::Comma)? {
            params.push(self.parse_param()?);
        }
        Ok(params)
    }

    /// `Param := IDENT ':' Type`
    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let name = self.parse_ident_symbol()?;
        self.expect(TokenKind::Colon)?;
        let ty = self.parse_type()?;
        Ok(Param { name, ty })
    }

    /// `Type := 'int' | 'float' | 'char' | 'bool' | 'string'`
    pub(crate) fn parse_type(&mut self) -> Result<TypeTag, ParseError> {
        let tag = match self.peek() {
            TokenKind::Int => TypeTag::Int,
            TokenKind::Float => TypeTag::Float,
            TokenKind::Char => TypeTag::Char,
            TokenKind::Bool => TypeTag::Bool,
            TokenKind::String => TypeTag::String,
            _ => {
                return Err(ParseError::Expected {
                    expected: "a type".to_string(),
                    found: self.peek().clone(),
                    pos: self.position(),
                })
            }
        };
        self.bump()?;
        Ok(tag)
    }

    /// Consumes an `IDENT` token and returns its lexeme, interned.
    pub(crate) fn parse_ident_symbol(&mut self) -> Result<Symbol, ParseError> {
        if *self.peek() != TokenKind::Ident {
            return Err(ParseError::Expected {
                expected: "an identifier".to_string(),
                found: self.peek().clone(),
                pos: self.position(),
            });
        }
        let token = self.bump()?;
        Ok(self.intern(&token.lexeme))
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::TypeTag;
    use masc_util::Interner;

    #[test]
    fn function_with_no_params() {
        let mut interner = Interner::new();
        let mut parser = crate::Parser::new("func main():int { return 0; }", &mut interner).unwrap();
        let program = parser.parse_program().unwrap();
        assert_eq!(program.len(), 1);
        match &program[0] {
            crate::ast::Decl::Function(f) => {
                assert_eq!(f.params.len(), 0);
                assert_eq!(f.return_type, TypeTag::Int);
            }
            other => panic!("expected Function, got {other:?}"),
        }
    }

    #[test]
    fn function_with_multiple_params() {
        let mut interner = Interner::new();
        let mut parser =
            crate::Parser::new("func add(a:int, b:int):int { return a; }", &mut interner)
                .unwrap();
        let program = parser.parse_program().unwrap();
        match &program[0] {
            crate::ast::Decl::Function(f) => assert_eq!(f.params.len(), 2),
            other => panic!("expected Function, got {other:?}"),
        }
    }

    #[test]
    fn all_five_type_tags_parse() {
        for (text, expected) in [
            ("int", TypeTag::Int),
            ("float", TypeTag::Float),
            ("char", TypeTag::Char),
            ("bool", TypeTag::Bool),
            ("string", TypeTag::String),
        ] {
            let source = format!("func f():{text} {{ }}");
            let mut interner = Interner::new();
            let mut parser = crate::Parser::new(&source, &mut interner).unwrap();
            let program = parser.parse_program().unwrap();
            match &program[0] {
                crate::ast::Decl::Function(f) => assert_eq!(f.return_type, expected),
                other => panic!("expected Function, got {other:?}"),
            }
        }
    }

    #[test]
    fn top_level_accepts_statements_alongside_functions() {
        let mut interner = Interner::new();
        let mut parser = crate::Parser::new("var x:int = 1; func f():int { return x; }", &mut interner)
            .unwrap();
        let program = parser.parse_program().unwrap();
        assert_eq!(program.len(), 2);
        assert!(matches!(program[0], crate::ast::Decl::Var(_)));
        assert!(matches!(program[1], crate::ast::Decl::Function(_)));
    }
}

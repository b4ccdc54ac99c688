//! Top-level traversal: `Program` and `Function`.

use masc_par::ast::{CodeBlock, Decl, Function, Program};

use crate::Analyzer;

impl<'a> Analyzer<'a> {
    /// Walks every top-level declaration in source order. Statements are
    /// allowed alongside functions at the top level; those run directly in
    /// the global scope, which is always active (`ScopeStack` starts with
    /// it and this traversal never pops it).
    pub(crate) fn analyze_program(&mut self, program: &Program) {
        for decl in program {
            match decl {
                Decl::Function(function) => self.analyze_function(function),
                other => self.analyze_decl(other),
            }
        }
    }

    /// `Function`: push a new scope, declare each parameter, analyse the
    /// body in that same scope, pop scope.
    fn analyze_function(&mut self, function: &Function) {
        self.scopes.push_scope();
        for param in &function.params {
            self.scopes.declare(param.name, param.ty);
        }

        let previous = self
            .current_function
            .replace((function.name, function.return_type));
        self.analyze_stmts_in_current_scope(&function.body);
        self.current_function = previous;

        self.scopes.pop_scope();
    }

    /// Analyses a `CodeBlock` as its own scope: push, analyse each
    /// statement in order, pop.
    pub(crate) fn analyze_block(&mut self, block: &CodeBlock) {
        self.scopes.push_scope();
        self.analyze_stmts_in_current_scope(block);
        self.scopes.pop_scope();
    }

    /// Analyses a sequence of statements without pushing a new scope, used
    /// where the statements need to share a scope already pushed by the
    /// caller (`Function`'s params scope, `For`'s init scope).
    pub(crate) fn analyze_stmts_in_current_scope(&mut self, stmts: &CodeBlock) {
        for stmt in stmts {
            self.analyze_decl(stmt);
        }
    }
}

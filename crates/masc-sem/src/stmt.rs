//! Statement analysis: the `Var`, `Assignment`, `Return`, `If`/`While`,
//! `For`, `Print`, and `Input` rules.

use masc_par::ast::{Decl, For, ForIncrement, ForInit, If, Input, Print, Return, Var, While};

use crate::Analyzer;

impl<'a> Analyzer<'a> {
    /// Dispatches one statement-shaped `Decl`. `Decl::Function` never
    /// appears here: the parser only ever nests a `CodeBlock` full of the
    /// other nine variants.
    pub(crate) fn analyze_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Function(_) => {
                unreachable!("the parser never nests a Function inside a CodeBlock")
            }
            Decl::Var(var) => self.analyze_var(var),
            Decl::Assignment(assignment) => self.analyze_assignment(assignment),
            Decl::Return(ret) => self.analyze_return(ret),
            Decl::If(if_stmt) => self.analyze_if(if_stmt),
            Decl::While(while_stmt) => self.analyze_while(while_stmt),
            Decl::For(for_stmt) => self.analyze_for(for_stmt),
            Decl::Print(print) => self.analyze_print(print),
            Decl::Input(input) => self.analyze_input(input),
            Decl::FuncCall(call) => {
                self.infer_call(call);
            }
        }
    }

    /// `Var { name, type, value? }`: if `value` is present, infer its type;
    /// a mismatch against the declared type is diagnosed. The name is
    /// declared in the innermost scope regardless of any mismatch.
    fn analyze_var(&mut self, var: &Var) {
        if let Some(value) = &var.value {
            let found = self.infer(value, var.line);
            if let Some(found_tag) = found.tag() {
                if found_tag != var.ty {
                    self.report(
                        format!(
                            "type mismatch in variable '{}': expected {}, got {}",
                            self.name(var.name),
                            var.ty,
                            found_tag
                        ),
                        var.line,
                    );
                }
            }
        }
        self.scopes.declare(var.name, var.ty);
    }

    /// `Assignment { name, value }`: the target must already be declared;
    /// its value's inferred type must match the declared type.
    fn analyze_assignment(&mut self, assignment: &masc_par::ast::Assignment) {
        let declared = self.scopes.resolve(assignment.name);
        let found = self.infer(&assignment.value, assignment.line);

        match declared {
            None => self.report(
                format!("undeclared variable '{}'", self.name(assignment.name)),
                assignment.line,
            ),
            Some(declared_tag) => {
                if let Some(found_tag) = found.tag() {
                    if found_tag != declared_tag {
                        self.report(
                            format!(
                                "type mismatch in assignment to '{}': expected {}, got {}",
                                self.name(assignment.name),
                                declared_tag,
                                found_tag
                            ),
                            assignment.line,
                        );
                    }
                }
            }
        }
    }

    /// `Return { value? }`: infers the value's type (when present) and
    /// checks it against the enclosing function's declared return type.
    /// A valueless `return;` is always accepted: MASClang has no
    /// `unit`/`void` tag to check it against.
    fn analyze_return(&mut self, ret: &Return) {
        let Some(value) = &ret.value else {
            return;
        };
        let found = self.infer(value, ret.line);
        let Some((function_name, declared_return)) = self.current_function else {
            return;
        };
        if let Some(found_tag) = found.tag() {
            if found_tag != declared_return {
                self.report(
                    format!(
                        "return type mismatch: function '{}' declares {} but returns {}",
                        self.name(function_name),
                        declared_return,
                        found_tag
                    ),
                    ret.line,
                );
            }
        }
    }

    /// `If`: condition must be `bool`; recurse into both blocks.
    fn analyze_if(&mut self, if_stmt: &If) {
        self.check_condition_is_bool(&if_stmt.condition, if_stmt.line, "if");
        self.analyze_block(&if_stmt.then_block);
        if let Some(else_block) = &if_stmt.else_block {
            self.analyze_block(else_block);
        }
    }

    /// `While`: condition must be `bool`; recurse into the body.
    fn analyze_while(&mut self, while_stmt: &While) {
        self.check_condition_is_bool(&while_stmt.condition, while_stmt.line, "while");
        self.analyze_block(&while_stmt.body);
    }

    /// `For`: push scope, analyse `init`, then `condition` (must be
    /// `bool`), then `increment`, then `body`. All four share the one
    /// pushed scope, then it is popped.
    fn analyze_for(&mut self, for_stmt: &For) {
        self.scopes.push_scope();

        match for_stmt.init.as_ref() {
            ForInit::Var(var) => self.analyze_var(var),
            ForInit::Assignment(assignment) => self.analyze_assignment(assignment),
            ForInit::FuncCall(call) => {
                self.infer_call(call);
            }
        }

        self.check_condition_is_bool(&for_stmt.condition, for_stmt.line, "for");

        match for_stmt.increment.as_ref() {
            ForIncrement::Assignment(assignment) => self.analyze_assignment(assignment),
            ForIncrement::FuncCall(call) => {
                self.infer_call(call);
            }
        }

        self.analyze_stmts_in_current_scope(&for_stmt.body);
        self.scopes.pop_scope();
    }

    /// `Print`: infers the argument's type; any type is accepted.
    fn analyze_print(&mut self, print: &Print) {
        self.infer(&print.value, print.line);
    }

    /// `Input`: the target must already be a declared variable.
    fn analyze_input(&mut self, input: &Input) {
        if self.scopes.resolve(input.target_name).is_none() {
            self.report(
                format!(
                    "undeclared variable '{}' in input",
                    self.name(input.target_name)
                ),
                input.line,
            );
        }
    }

    fn check_condition_is_bool(
        &mut self,
        condition: &masc_par::ast::Expr,
        line: u32,
        in_stmt: &str,
    ) {
        let ty = self.infer(condition, line);
        if let Some(tag) = ty.tag() {
            if tag != masc_par::ast::TypeTag::Bool {
                self.report(
                    format!("condition in {in_stmt} statement must be boolean"),
                    line,
                );
            }
        }
    }
}

//! Semantic analysis for MASClang: scope stack, function table,
//! expression-type inference, diagnostic accumulation.
//!
//! Unlike `masc-lex`/`masc-par`, analysis never halts on error: scan and
//! syntax errors are fatal, but semantic errors are accumulated, so
//! [`analyse`] always walks the whole `Program` and returns every
//! diagnostic it found rather than stopping at the first one. It never
//! mutates the AST, since it borrows `program` rather than owning it.

mod decl;
mod expr;
pub mod func_table;
mod scope;
mod stmt;
pub mod types;

pub use func_table::{FunctionSig, FunctionTable};
pub use types::Ty;

use masc_par::ast::{Program, TypeTag};
use masc_util::{Diagnostic, Interner, Position, Symbol};
use scope::ScopeStack;

/// Owns the scope stack, function table, and diagnostic list for one
/// analysis pass. Never constructed directly by callers; use [`analyse`].
pub(crate) struct Analyzer<'a> {
    interner: &'a Interner,
    functions: FunctionTable,
    scopes: ScopeStack,
    /// The declared return type of the function currently being analysed,
    /// and its name (for the `return type mismatch` diagnostic).
    /// `None` at the top level, outside any function.
    current_function: Option<(Symbol, TypeTag)>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Analyzer<'a> {
    fn new(interner: &'a Interner, functions: FunctionTable) -> Self {
        Self {
            interner,
            functions,
            scopes: ScopeStack::new(),
            current_function: None,
            diagnostics: Vec::new(),
        }
    }

    fn name(&self, symbol: Symbol) -> &str {
        self.interner.resolve(symbol)
    }

    fn report(&mut self, message: impl Into<String>, line: u32) {
        self.diagnostics.push(Diagnostic::error(message, Position::new(line, 0)));
    }
}

/// Runs phase 1 (function indexing) then phase 2 (scoped traversal) over
/// `program`, returning every diagnostic found in source order. Running
/// the same program through this twice always returns the same list.
///
/// `interner` must be the same interner the program's symbols were
/// produced from (ordinarily the one threaded through `masc_par::Parser`).
pub fn analyse(program: &Program, interner: &Interner) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let functions = FunctionTable::build(program, interner, &mut diagnostics);
    let mut analyzer = Analyzer::new(interner, functions);
    analyzer.diagnostics.append(&mut diagnostics);
    analyzer.analyze_program(program);
    analyzer.diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use masc_par::Parser;

    fn analyze_source(source: &str) -> Vec<Diagnostic> {
        let mut interner = Interner::new();
        let program = Parser::new(source, &mut interner)
            .unwrap()
            .parse_program()
            .unwrap();
        analyse(&program, &interner)
    }

    #[test]
    fn clean_program_has_no_diagnostics() {
        let diags = analyze_source("func main():int { var x:int = 2+3*4; return x; }");
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn assignment_type_mismatch_is_reported() {
        let diags = analyze_source("var x:int = 1; x = \"hi\";");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("assignment"));
        assert!(diags[0].message.contains('x'));
    }

    #[test]
    fn if_condition_must_be_boolean() {
        let diags = analyze_source("if (1) { }");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("if"));
        assert!(diags[0].message.contains("boolean"));
    }

    #[test]
    fn argument_count_mismatch_is_reported() {
        let diags =
            analyze_source("func f(a:int):int { return a; } var y:int = f(1,2);");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("argument count mismatch"));
        assert!(diags[0].message.contains('f'));
    }

    #[test]
    fn string_concatenation_is_clean() {
        let diags = analyze_source("var s:string = \"a\" + \"b\";");
        assert!(diags.is_empty(), "{diags:?}");
    }

    /// String-int concatenation via `.` is clean.
    #[test]
    fn dot_concat_of_string_and_int_is_clean() {
        let diags = analyze_source("print(\"value: \" . 7);");
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn undeclared_variable_in_assignment() {
        let diags = analyze_source("x = 1;");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("undeclared variable 'x'"));
    }

    #[test]
    fn undeclared_variable_in_input() {
        let diags = analyze_source("input(x);");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains('x'));
        assert!(diags[0].message.contains("input"));
    }

    #[test]
    fn calling_undeclared_function_diagnoses() {
        let diags = analyze_source("var y:int = missing(1);");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn forward_reference_to_function_is_clean() {
        let diags =
            analyze_source("func main():int { return helper(); } func helper():int { return 1; }");
        assert!(diags.is_empty(), "{diags:?}");
    }

    #[test]
    fn return_type_mismatch_is_diagnosed() {
        let diags = analyze_source("func f():int { return \"x\"; }");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("return type mismatch"));
        assert!(diags[0].message.contains('f'));
    }

    #[test]
    fn valueless_return_is_always_permitted() {
        let diags = analyze_source("func f():int { return; }");
        assert!(diags.is_empty(), "{diags:?}");
    }

    /// A variable declared inside an `if` block is gone once the block
    /// closes.
    #[test]
    fn variable_declared_in_block_is_not_visible_after_it_closes() {
        let diags = analyze_source(
            "func f():int { if (true) { var x:int = 1; } x = 2; return 0; }",
        );
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("undeclared variable 'x'"));
    }

    /// Running analysis twice on the same AST yields identical diagnostic
    /// message lists.
    #[test]
    fn analysis_is_deterministic() {
        let source = "var x:int = 1; x = \"no\"; if (1) { }";
        let mut interner = Interner::new();
        let program = Parser::new(source, &mut interner)
            .unwrap()
            .parse_program()
            .unwrap();
        let first: Vec<_> = analyse(&program, &interner).into_iter().map(|d| d.message).collect();
        let second: Vec<_> = analyse(&program, &interner).into_iter().map(|d| d.message).collect();
        assert_eq!(first, second);
    }
}

//! Function table: a single pre-pass over `Program` registering every
//! `Function` by name so that forward references and mutual recursion
//! work. No back-pointers into the AST are needed: the table copies out
//! everything the analyser needs at a call site.

use rustc_hash::FxHashMap;

use masc_par::ast::{Decl, Function, Program, TypeTag};
use masc_util::{Diagnostic, Interner, Position, Symbol};

/// The parts of a `Function` the analyser needs at call sites, without
/// borrowing the original AST node.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSig {
    pub param_types: Vec<TypeTag>,
    pub return_type: TypeTag,
}

impl FunctionSig {
    fn from_function(function: &Function) -> Self {
        Self {
            param_types: function.params.iter().map(|p| p.ty).collect(),
            return_type: function.return_type,
        }
    }
}

pub struct FunctionTable {
    functions: FxHashMap<Symbol, FunctionSig>,
}

impl FunctionTable {
    /// Builds the table in one pass over `program`'s top-level declarations.
    ///
    /// Duplicate names overwrite the previous entry (the kept definition is
    /// always the last one in source order), but the second and later
    /// registration of a name emits a `duplicate function 'F'` diagnostic
    /// first. The overwrite itself is silent; the diagnostic is additive.
    pub fn build(program: &Program, interner: &Interner, diagnostics: &mut Vec<Diagnostic>) -> Self {
        let mut functions: FxHashMap<Symbol, FunctionSig> = FxHashMap::default();
        for decl in program {
            if let Decl::Function(function) = decl {
                if functions.contains_key(&function.name) {
                    diagnostics.push(Diagnostic::error(
                        format!("duplicate function '{}'", interner.resolve(function.name)),
                        Position::new(function.line, 0),
                    ));
                }
                functions.insert(function.name, FunctionSig::from_function(function));
            }
        }
        Self { functions }
    }

    pub fn get(&self, name: Symbol) -> Option<&FunctionSig> {
        self.functions.get(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use masc_par::Parser;

    fn build(source: &str) -> (FunctionTable, Interner, Vec<Diagnostic>) {
        let mut interner = Interner::new();
        let program = Parser::new(source, &mut interner)
            .unwrap()
            .parse_program()
            .unwrap();
        let mut diagnostics = Vec::new();
        let table = FunctionTable::build(&program, &interner, &mut diagnostics);
        (table, interner, diagnostics)
    }

    #[test]
    fn registers_function_signature() {
        let (table, mut interner, diagnostics) =
            build("func add(a:int, b:int):int { return a; }");
        assert!(diagnostics.is_empty());
        let name = interner.intern("add");
        let sig = table.get(name).unwrap();
        assert_eq!(sig.param_types, vec![TypeTag::Int, TypeTag::Int]);
        assert_eq!(sig.return_type, TypeTag::Int);
    }

    #[test]
    fn unregistered_name_is_absent() {
        let (table, mut interner, _) = build("func f():int { return 0; }");
        let missing = interner.intern("g");
        assert!(table.get(missing).is_none());
    }

    /// A function may be called before its definition appears in source
    /// order: the pre-pass registers every function regardless of where
    /// in `program` it sits.
    #[test]
    fn forward_and_backward_references_both_register() {
        let (table, mut interner, _) = build(
            "func a():int { return 0; } func b():int { return 0; }",
        );
        assert!(table.get(interner.intern("a")).is_some());
        assert!(table.get(interner.intern("b")).is_some());
    }

    #[test]
    fn duplicate_function_name_diagnoses_and_keeps_latest() {
        let (table, mut interner, diagnostics) = build(
            "func f():int { return 1; } func f():string { return \"x\"; }",
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("duplicate function 'f'"));
        let sig = table.get(interner.intern("f")).unwrap();
        assert_eq!(sig.return_type, TypeTag::String);
    }
}

//! Scope stack for name resolution.
//!
//! A mutable list of maps works fine in an ownership-strict language too:
//! each scope is an owned map, the stack an owned `Vec` of them. The
//! bottom element is the global scope and is always present.

use rustc_hash::FxHashMap;

use masc_par::ast::TypeTag;
use masc_util::Symbol;

pub struct ScopeStack {
    scopes: Vec<FxHashMap<Symbol, TypeTag>>,
}

impl ScopeStack {
    /// A fresh stack holding only the always-present global scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![FxHashMap::default()],
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(FxHashMap::default());
    }

    /// # Panics
    ///
    /// Panics if called when only the global scope remains. Every push is
    /// matched by exactly one pop by construction of the analyser's
    /// traversal, so this would indicate a bug in the analyser itself.
    pub fn pop_scope(&mut self) {
        assert!(self.scopes.len() > 1, "cannot pop the global scope");
        self.scopes.pop();
    }

    /// Declares `name` in the innermost scope, shadowing any outer binding
    /// of the same name. Declares regardless of whether the initializer's
    /// type matched.
    pub fn declare(&mut self, name: Symbol, ty: TypeTag) {
        self.scopes
            .last_mut()
            .expect("the global scope is never popped")
            .insert(name, ty);
    }

    /// Walks scopes inner-to-outer looking for `name`.
    pub fn resolve(&self, name: Symbol) -> Option<TypeTag> {
        self.scopes.iter().rev().find_map(|scope| scope.get(&name).copied())
    }
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

//! Owned, per-compilation string interner.

use rustc_hash::FxHashMap;

use super::Symbol;

/// Maps strings to [`Symbol`]s and back.
///
/// There is no global table: each compilation owns its `Interner` for its
/// lifetime, and nothing is cached or kept running in the background past
/// that.
#[derive(Default)]
pub struct Interner {
    strings: Vec<Box<str>>,
    indices: FxHashMap<Box<str>, u32>,
}

impl Interner {
    pub fn new() -> Self {
        Self {
            strings: Vec::new(),
            indices: FxHashMap::default(),
        }
    }

    /// Intern `text`, returning its symbol. Interning the same string twice
    /// returns the same symbol.
    pub fn intern(&mut self, text: &str) -> Symbol {
        if let Some(&index) = self.indices.get(text) {
            return Symbol::from_index(index);
        }

        let index = self.strings.len() as u32;
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        self.indices.insert(boxed, index);
        Symbol::from_index(index)
    }

    /// Resolve a symbol back to its string.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` was not produced by this interner.
    pub fn resolve(&self, symbol: Symbol) -> &str {
        &self.strings[symbol.as_u32() as usize]
    }
}

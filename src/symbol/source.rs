//! Source of symbols, with an interner for their labels.

use std::collections::HashMap;

use super::repr::{SymbolRepr, FIRST_ID, NULL_ID};
use super::Symbol;

/// A source of numeric symbols.
///
/// Every symbol generated here carries a label. A label is interned once,
/// so looking it up again yields the same symbol.
#[derive(Clone, Debug, Default)]
pub struct SymbolSource {
    next_id: SymbolRepr,
    names: Vec<String>,
    ids: HashMap<String, Symbol>,
}

impl SymbolSource {
    /// Creates a source of numeric symbols with an empty symbol space.
    pub fn new() -> Self {
        SymbolSource {
            next_id: FIRST_ID,
            names: vec![],
            ids: HashMap::new(),
        }
    }

    /// Retrieves the symbol for a label, or generates a new one
    /// if the label was not seen before.
    pub fn intern(&mut self, name: impl AsRef<str>) -> Symbol {
        let name = name.as_ref();
        if let Some(&sym) = self.ids.get(name) {
            return sym;
        }
        let sym = self.next_sym();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), sym);
        sym
    }

    /// Looks up the symbol for an interned label.
    pub fn get(&self, name: impl AsRef<str>) -> Option<Symbol> {
        self.ids.get(name.as_ref()).copied()
    }

    /// Returns the label of a symbol generated by this source.
    pub fn name_of(&self, sym: Symbol) -> &str {
        &self.names[sym.usize()]
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.next_id as usize
    }

    fn next_sym(&mut self) -> Symbol {
        let ret = self.next_id.into();
        self.next_id += 1;
        debug_assert_ne!(self.next_id, NULL_ID, "ran out of Symbol space?");
        ret
    }
}

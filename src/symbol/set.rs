//! Informs whether symbols are terminal or nonterminal.

use std::iter;

use bit_vec::BitVec;

use crate::rule::Rule;
use crate::symbol::{Symbol, SymbolSource};

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Default)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs an empty `SymbolBitSet`.
    pub fn new() -> Self {
        SymbolBitSet {
            bit_vec: BitVec::new(),
        }
    }

    /// Gathers information about whether symbols are terminal or nonterminal.
    /// Constructs a set of nonterminal symbols: those that appear on the
    /// left-hand side of some rule.
    ///
    /// Constructs a data structure in O(n) time.
    pub fn nonterminal<'a>(
        &mut self,
        sym_source: &SymbolSource,
        rules: impl IntoIterator<Item = &'a Rule>,
    ) {
        self.bit_vec = BitVec::from_elem(sym_source.num_syms(), false);
        for rule in rules {
            if let Some(lhs) = sym_source.get(&rule.lhs) {
                self.set(lhs, true);
            }
        }
    }

    /// Grows the set so that every symbol of the source fits, without
    /// changing existing entries.
    pub fn reserve(&mut self, sym_source: &SymbolSource) {
        let missing = sym_source.num_syms().saturating_sub(self.bit_vec.len());
        self.bit_vec.grow(missing, false);
    }

    /// Set the entry for a symbol.
    pub fn set(&mut self, sym: Symbol, elem: bool) {
        self.bit_vec.set(sym.usize(), elem);
    }

    /// Checks whether a given symbol is in this set.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}

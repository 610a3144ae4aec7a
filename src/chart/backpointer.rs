//! Evidence of how chart entries were derived.

use std::collections::HashMap;

use crate::chart::Span;
use crate::symbol::Symbol;

/// Why a nonterminal derives a span.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Witness {
    /// The nonterminal rewrites to the terminal at a single-token span.
    Leaf {
        /// The token's terminal symbol.
        terminal: Symbol,
    },
    /// The nonterminal rewrites to `left right`, which meet at `split`.
    Split {
        /// Position where the left constituent ends and the right one begins.
        split: usize,
        /// Symbol of the left constituent.
        left: Symbol,
        /// Symbol of the right constituent.
        right: Symbol,
    },
}

impl Witness {
    /// For a split witness of the given parent span, returns both
    /// constituents with their spans.
    pub fn children(self, span: Span) -> Option<[(Symbol, Span); 2]> {
        match self {
            Witness::Leaf { .. } => None,
            Witness::Split { split, left, right } => {
                let (left_span, right_span) = span.split_at(split);
                Some([(left, left_span), (right, right_span)])
            }
        }
    }
}

/// All witnesses recorded during one parse, keyed by nonterminal and span.
///
/// Every witness is retained, including several for the same key. This is
/// what makes an ambiguous parse recoverable in full.
#[derive(Clone, Debug, Default)]
pub struct BackpointerStore {
    witnesses: HashMap<(Symbol, Span), Vec<Witness>>,
    len: usize,
}

impl BackpointerStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a witness for a nonterminal and span.
    pub fn record(&mut self, sym: Symbol, span: Span, witness: Witness) {
        self.witnesses.entry((sym, span)).or_default().push(witness);
        self.len += 1;
    }

    /// Witnesses for a nonterminal and span, in order of recording. `None`
    /// if nothing was recorded.
    pub fn get(&self, sym: Symbol, span: Span) -> Option<&[Witness]> {
        self.witnesses.get(&(sym, span)).map(|list| &list[..])
    }

    /// Returns the number of keys that have at least one witness.
    pub fn num_entries(&self) -> usize {
        self.witnesses.len()
    }

    /// Returns the total number of witnesses.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

//! The dynamic programming table of a CYK parse.
//!
//! The chart records, for every span of the input, the set of nonterminals
//! that derive exactly that span. It is stored as a bit matrix with one row
//! per span and one column per symbol of the grammar.

pub mod backpointer;
pub mod builder;
mod span;

use bit_matrix::BitMatrix;

use crate::symbol::Symbol;

pub use self::backpointer::{BackpointerStore, Witness};
pub use self::builder::{BuiltChart, ChartBuilder, Stats};
pub use self::span::Span;

/// A monotonic chart. Symbols can be added to cells, but never removed.
#[derive(Clone, Debug)]
pub struct Chart {
    cells: BitMatrix,
    num_tokens: usize,
    num_syms: usize,
}

impl Chart {
    /// Creates an empty chart for an input of the given length, with room for
    /// the given number of symbols in every cell.
    pub fn new(num_tokens: usize, num_syms: usize) -> Self {
        Chart {
            cells: BitMatrix::new(num_tokens * num_tokens, num_syms),
            num_tokens,
            num_syms,
        }
    }

    /// Returns the length of the input.
    pub fn num_tokens(&self) -> usize {
        self.num_tokens
    }

    /// Returns the span of the whole input, or `None` for an empty input.
    pub fn full_span(&self) -> Option<Span> {
        if self.num_tokens == 0 {
            None
        } else {
            Some(Span::new(0, self.num_tokens))
        }
    }

    /// Adds a symbol to the cell of a span. Returns `true` if the symbol was
    /// not present before.
    pub fn insert(&mut self, sym: Symbol, span: Span) -> bool {
        let row = self.row(span);
        if self.cells[(row, sym.usize())] {
            false
        } else {
            self.cells.set(row, sym.usize(), true);
            true
        }
    }

    /// Checks whether a symbol derives exactly the given span.
    pub fn contains(&self, sym: Symbol, span: Span) -> bool {
        sym.usize() < self.num_syms && self.cells[(self.row(span), sym.usize())]
    }

    /// Iterates over the symbols in the cell of a span, in order of their IDs.
    pub fn cell(&self, span: Span) -> impl Iterator<Item = Symbol> + '_ {
        self.cells
            .iter_row(self.row(span))
            .enumerate()
            .filter_map(|(id, present)| if present { Some(Symbol::from(id)) } else { None })
    }

    /// Returns the number of symbols in the cell of a span.
    pub fn cell_len(&self, span: Span) -> usize {
        self.cell(span).count()
    }

    fn row(&self, span: Span) -> usize {
        assert!(
            span.end <= self.num_tokens,
            "span {:?} exceeds input of length {}",
            span,
            self.num_tokens
        );
        span.start * self.num_tokens + (span.end - 1)
    }
}

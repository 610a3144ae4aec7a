//! Subscribing to chart construction.

use log::trace;

use crate::chart::{Span, Witness};
use crate::grammar::CnfGrammar;
use crate::symbol::Symbol;

/// Receives events while a chart is filled.
///
/// All methods do nothing by default. Events arrive in a deterministic order:
/// token spans left to right, then longer spans by increasing length and
/// start position.
pub trait ChartObserver {
    /// A symbol was added to a cell for the first time.
    fn cell_filled(&mut self, _span: Span, _sym: Symbol) {}

    /// A witness was recorded for a symbol in a cell.
    fn witness_added(&mut self, _sym: Symbol, _span: Span, _witness: Witness) {}

    /// No rule rewrites to the token at this position.
    fn unknown_token(&mut self, _position: usize, _token: &str) {}
}

impl ChartObserver for () {}

impl<'a, O> ChartObserver for &'a mut O
where
    O: ChartObserver + ?Sized,
{
    fn cell_filled(&mut self, span: Span, sym: Symbol) {
        (**self).cell_filled(span, sym)
    }

    fn witness_added(&mut self, sym: Symbol, span: Span, witness: Witness) {
        (**self).witness_added(sym, span, witness)
    }

    fn unknown_token(&mut self, position: usize, token: &str) {
        (**self).unknown_token(position, token)
    }
}

/// A recorded chart event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChartEvent {
    CellFilled { span: Span, sym: Symbol },
    WitnessAdded { sym: Symbol, span: Span, witness: Witness },
    UnknownToken { position: usize },
}

impl ChartObserver for Vec<ChartEvent> {
    fn cell_filled(&mut self, span: Span, sym: Symbol) {
        self.push(ChartEvent::CellFilled { span, sym });
    }

    fn witness_added(&mut self, sym: Symbol, span: Span, witness: Witness) {
        self.push(ChartEvent::WitnessAdded { sym, span, witness });
    }

    fn unknown_token(&mut self, position: usize, _token: &str) {
        self.push(ChartEvent::UnknownToken { position });
    }
}

/// Traces chart events through the `log` facade, with symbol labels.
#[derive(Clone, Copy, Debug)]
pub struct LogObserver<'g> {
    grammar: &'g CnfGrammar,
}

impl<'g> LogObserver<'g> {
    pub fn new(grammar: &'g CnfGrammar) -> Self {
        LogObserver { grammar }
    }
}

impl<'g> ChartObserver for LogObserver<'g> {
    fn cell_filled(&mut self, span: Span, sym: Symbol) {
        trace!("cell {} += {}", span, self.grammar.name_of(sym));
    }

    fn witness_added(&mut self, sym: Symbol, span: Span, witness: Witness) {
        let grammar = self.grammar;
        let name = |sym| grammar.name_of(sym);
        match witness {
            Witness::Leaf { terminal } => {
                trace!("witness {}{} -> {:?}", name(sym), span, name(terminal));
            }
            Witness::Split { split, left, right } => {
                trace!(
                    "witness {}{} -> {}({}, {}) {}({}, {})",
                    name(sym),
                    span,
                    name(left),
                    span.start,
                    split,
                    name(right),
                    split,
                    span.end
                );
            }
        }
    }

    fn unknown_token(&mut self, position: usize, token: &str) {
        trace!("unknown token {:?} at {}", token, position);
    }
}

//! Bottom-up chart construction.

use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::chart::{BackpointerStore, Chart, Span, Witness};
use crate::diagnostic::Diagnostic;
use crate::grammar::CnfGrammar;
use crate::observer::ChartObserver;
use crate::symbol::Symbol;

/// Work counters of a chart fill.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// One step per nonterminal recorded for a token, and one step per LHS
    /// symbol of every successful binary match.
    pub steps: usize,
    /// Number of (start, split, end, binary rule) combinations examined.
    pub combinations: usize,
}

/// A completely filled chart, with everything needed to extract trees.
#[derive(Clone, Debug)]
pub struct BuiltChart {
    pub chart: Chart,
    pub backpointers: BackpointerStore,
    pub stats: Stats,
    /// Unknown token diagnostics, by position.
    pub diagnostics: Vec<Diagnostic>,
}

impl BuiltChart {
    /// Checks whether the start symbol derives the whole input.
    ///
    /// An empty input is never accepted.
    pub fn accepts(&self, start: Symbol) -> bool {
        self.chart
            .full_span()
            .map_or(false, |span| self.chart.contains(start, span))
    }
}

/// Fills a chart with the CYK algorithm.
///
/// Spans are filled in order of increasing length, so that every cell a span
/// can be split into is final before the span itself is filled. The time taken
/// is O(n³ · R), where n is the input length and R is the number of distinct
/// binary right-hand sides.
pub struct ChartBuilder<'g, O = ()> {
    grammar: &'g CnfGrammar,
    observer: O,
}

/// Matches found for one cell, before they are committed to the chart.
struct CellFill {
    span: Span,
    entries: Vec<(Symbol, Witness)>,
    combinations: usize,
}

impl<'g> ChartBuilder<'g> {
    /// Creates a chart builder for the given grammar.
    pub fn new(grammar: &'g CnfGrammar) -> Self {
        ChartBuilder {
            grammar,
            observer: (),
        }
    }
}

impl<'g, O> ChartBuilder<'g, O>
where
    O: ChartObserver,
{
    /// Replaces the observer that receives chart events.
    pub fn with_observer<P: ChartObserver>(self, observer: P) -> ChartBuilder<'g, P> {
        ChartBuilder {
            grammar: self.grammar,
            observer,
        }
    }

    /// Returns the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Fills a fresh chart for a sequence of terminal labels.
    ///
    /// Tokens that no rule rewrites to are reported and skipped. The chart is
    /// always filled to completion.
    pub fn build<S>(&mut self, tokens: &[S]) -> BuiltChart
    where
        S: AsRef<str>,
    {
        let grammar = self.grammar;
        let num_tokens = tokens.len();
        let mut built = BuiltChart {
            chart: Chart::new(num_tokens, grammar.num_syms()),
            backpointers: BackpointerStore::new(),
            stats: Stats::default(),
            diagnostics: vec![],
        };

        for (position, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            let span = Span::token(position);
            let terminal = grammar.symbol(token);
            let lhs = terminal.map_or(&[][..], |terminal| grammar.unary_lhs(terminal));
            match terminal {
                Some(terminal) if !lhs.is_empty() => {
                    for &sym in lhs {
                        self.commit(&mut built, sym, span, Witness::Leaf { terminal });
                    }
                }
                _ => {
                    warn!("unknown token {:?} at position {}", token, position);
                    self.observer.unknown_token(position, token);
                    built.diagnostics.push(Diagnostic::UnknownToken {
                        position,
                        token: token.to_string(),
                    });
                }
            }
        }

        for len in 2..=num_tokens {
            for fill in fill_layer(grammar, &built.chart, len) {
                built.stats.combinations += fill.combinations;
                for (sym, witness) in fill.entries {
                    self.commit(&mut built, sym, fill.span, witness);
                }
            }
        }

        debug!(
            "filled chart for {} tokens: {} steps, {} combinations, {} witnesses",
            num_tokens,
            built.stats.steps,
            built.stats.combinations,
            built.backpointers.len()
        );
        built
    }

    fn commit(&mut self, built: &mut BuiltChart, sym: Symbol, span: Span, witness: Witness) {
        if built.chart.insert(sym, span) {
            self.observer.cell_filled(span, sym);
        }
        built.backpointers.record(sym, span, witness);
        self.observer.witness_added(sym, span, witness);
        built.stats.steps += 1;
    }
}

/// Cells of one span length only read cells of shorter spans, so they can be
/// filled independently. The results are returned in order of start position.
#[cfg(not(feature = "parallel"))]
fn fill_layer(grammar: &CnfGrammar, chart: &Chart, len: usize) -> Vec<CellFill> {
    (0..chart.num_tokens() - len + 1)
        .map(|start| fill_cell(grammar, chart, Span::new(start, start + len)))
        .collect()
}

#[cfg(feature = "parallel")]
fn fill_layer(grammar: &CnfGrammar, chart: &Chart, len: usize) -> Vec<CellFill> {
    (0..chart.num_tokens() - len + 1)
        .into_par_iter()
        .map(|start| fill_cell(grammar, chart, Span::new(start, start + len)))
        .collect()
}

fn fill_cell(grammar: &CnfGrammar, chart: &Chart, span: Span) -> CellFill {
    let mut fill = CellFill {
        span,
        entries: vec![],
        combinations: 0,
    };
    for split in span.split_points() {
        let (left_span, right_span) = span.split_at(split);
        for rule in grammar.binary_rules() {
            fill.combinations += 1;
            if chart.contains(rule.left, left_span) && chart.contains(rule.right, right_span) {
                let witness = Witness::Split {
                    split,
                    left: rule.left,
                    right: rule.right,
                };
                fill.entries.extend(rule.lhs.iter().map(|&lhs| (lhs, witness)));
            }
        }
    }
    fill
}

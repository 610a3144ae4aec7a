//! Recognition and parsing of token sequences against a compiled grammar.

use log::debug;

use crate::chart::{BuiltChart, ChartBuilder, Stats};
use crate::diagnostic::Diagnostic;
use crate::forest::{Forest, ForestError, ForestExtractor, ForestLimits};
use crate::grammar::CnfGrammar;
use crate::observer::ChartObserver;
use crate::symbol::Symbol;

/// A CYK parser for one grammar and start symbol.
///
/// The parser holds no per-parse state. Any number of parses may share it.
#[derive(Clone, Debug)]
pub struct CykParser<'g> {
    grammar: &'g CnfGrammar,
    start_name: String,
    start: Option<Symbol>,
    limits: ForestLimits,
}

/// Result of recognition.
#[derive(Clone, Debug)]
pub struct Recognition {
    /// Whether the start symbol derives the whole input.
    pub accepted: bool,
    pub stats: Stats,
    /// Diagnostics in order of emission.
    pub diagnostics: Vec<Diagnostic>,
}

/// Result of a full parse.
#[derive(Clone, Debug)]
pub struct ParseOutcome {
    pub accepted: bool,
    pub stats: Stats,
    pub diagnostics: Vec<Diagnostic>,
    /// Empty when the input was rejected.
    pub forest: Forest,
    /// The filled chart, kept for inspection and rendering. Its diagnostics
    /// are moved to `diagnostics`.
    pub chart: BuiltChart,
}

impl<'g> CykParser<'g> {
    /// Creates a parser that recognizes the nonterminal labeled `start`.
    ///
    /// If `start` is not a nonterminal of the grammar, every parse is
    /// rejected with a diagnostic.
    pub fn new(grammar: &'g CnfGrammar, start: impl Into<String>) -> Self {
        let start_name = start.into();
        CykParser {
            grammar,
            start: grammar.nonterminal(&start_name),
            start_name,
            limits: ForestLimits::unbounded(),
        }
    }

    /// Sets bounds on forest extraction.
    pub fn limits(mut self, limits: ForestLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the grammar.
    pub fn grammar(&self) -> &'g CnfGrammar {
        self.grammar
    }

    /// Returns the start symbol, if the grammar has it.
    pub fn start(&self) -> Option<Symbol> {
        self.start
    }

    /// Fills a chart and checks whether the input is derivable.
    pub fn recognize<S: AsRef<str>>(&self, tokens: &[S]) -> Recognition {
        let (accepted, chart, diagnostics) = self.build(tokens, ());
        Recognition {
            accepted,
            stats: chart.stats,
            diagnostics,
        }
    }

    /// Fills a chart and extracts all trees of the start symbol over the
    /// whole input, up to the limits.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParseOutcome, ForestError> {
        self.parse_with_observer(tokens, ())
    }

    /// Like `parse`, reporting chart events to an observer.
    pub fn parse_with_observer<S, O>(
        &self,
        tokens: &[S],
        observer: O,
    ) -> Result<ParseOutcome, ForestError>
    where
        S: AsRef<str>,
        O: ChartObserver,
    {
        let (accepted, chart, diagnostics) = self.build(tokens, observer);
        let forest = match (accepted, self.start, chart.chart.full_span()) {
            (true, Some(start), Some(span)) => ForestExtractor::new(&chart.backpointers)
                .limits(self.limits)
                .extract(start, span)?,
            _ => Forest::default(),
        };
        Ok(ParseOutcome {
            accepted,
            stats: chart.stats,
            diagnostics,
            forest,
            chart,
        })
    }

    fn build<S, O>(&self, tokens: &[S], observer: O) -> (bool, BuiltChart, Vec<Diagnostic>)
    where
        S: AsRef<str>,
        O: ChartObserver,
    {
        let mut diagnostics = vec![];
        if self.start.is_none() {
            diagnostics.push(Diagnostic::UnknownStartSymbol {
                name: self.start_name.clone(),
            });
        }
        let mut chart = ChartBuilder::new(self.grammar)
            .with_observer(observer)
            .build(tokens);
        diagnostics.append(&mut chart.diagnostics);
        let accepted = self.start.map_or(false, |start| chart.accepts(start));
        debug!(
            "{} {} tokens in {} steps",
            if accepted { "accepted" } else { "rejected" },
            tokens.len(),
            chart.stats.steps
        );
        (accepted, chart, diagnostics)
    }
}

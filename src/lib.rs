//! Recognition and parse forest extraction for context-free grammars in Chomsky
//! normal form, with the CYK algorithm.
//!
//! A list of rules is compiled once into a [`CnfGrammar`]. Each parse fills a
//! fresh [`Chart`] bottom-up, recording every way a nonterminal derives a span
//! in a [`BackpointerStore`]. A [`ForestExtractor`] then rebuilds all parse
//! trees from the backpointers.
//!
//! ```
//! use cfg_cyk::{CnfGrammar, CykParser, RuleBuilder};
//!
//! let mut rules = vec![];
//! RuleBuilder::new(&mut rules)
//!     .rule("S").rhs(["NP", "VP"])
//!     .rule("NP").rhs(["Det", "N"])
//!     .rule("VP").rhs(["sneezed"])
//!     .rule("Det").rhs(["the"])
//!     .rule("N").rhs(["elephant"]);
//! let compiled = CnfGrammar::compile(&rules);
//! assert!(compiled.diagnostics.is_empty());
//!
//! let parser = CykParser::new(&compiled.grammar, "S");
//! let outcome = parser.parse(&["the", "elephant", "sneezed"]).unwrap();
//! assert!(outcome.accepted);
//! assert_eq!(
//!     outcome.forest.trees[0].display(&compiled.grammar).to_string(),
//!     "(S (NP (Det the) (N elephant)) (VP sneezed))"
//! );
//! ```

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod chart;
pub mod diagnostic;
pub mod forest;
pub mod grammar;
pub mod observer;
pub mod parser;
pub mod rule;
pub mod symbol;

pub use crate::chart::{BackpointerStore, BuiltChart, Chart, ChartBuilder, Span, Stats, Witness};
pub use crate::diagnostic::{CnfViolation, Diagnostic};
pub use crate::forest::{Forest, ForestError, ForestExtractor, ForestLimits, Tree};
pub use crate::grammar::{BinaryRule, CnfGrammar, Compiled};
pub use crate::observer::{ChartEvent, ChartObserver, LogObserver};
pub use crate::parser::{CykParser, ParseOutcome, Recognition};
pub use crate::rule::{Rule, RuleBuilder};
pub use crate::symbol::Symbol;

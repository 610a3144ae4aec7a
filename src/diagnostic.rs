//! Structured messages about recoverable problems in grammars and input.
//!
//! Diagnostics never interrupt compilation or chart construction. They are
//! collected in emission order and handed back to the caller next to the
//! result they concern.

use std::fmt;

use crate::rule::Rule;

/// The way in which a rule breaks Chomsky normal form.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CnfViolation {
    /// A rule of the form `A -> B`, where `B` is a nonterminal.
    UnaryNonterminal,
    /// A rule with two RHS symbols, at least one of which is a terminal.
    BinaryWithTerminal,
    /// A rule with a number of RHS symbols other than one or two.
    Arity(usize),
}

/// A recoverable problem found while compiling a grammar or filling a chart.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnostic {
    /// The rule was dropped from the compiled grammar.
    CnfViolation {
        /// The offending rule.
        rule: Rule,
        /// What is wrong with it.
        violation: CnfViolation,
    },
    /// No rule rewrites to this token. It contributes nothing to the chart.
    UnknownToken {
        /// Zero-based position in the token sequence.
        position: usize,
        /// The token itself.
        token: String,
    },
    /// The start label is not a nonterminal of the grammar.
    UnknownStartSymbol {
        /// The start label.
        name: String,
    },
}

impl Diagnostic {
    /// Whether the diagnostic was emitted by the grammar compiler.
    pub fn is_cnf_violation(&self) -> bool {
        matches!(self, Diagnostic::CnfViolation { .. })
    }
}

impl fmt::Display for CnfViolation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CnfViolation::UnaryNonterminal => {
                write!(f, "has a single RHS symbol, which is not a terminal symbol")
            }
            CnfViolation::BinaryWithTerminal => {
                write!(f, "has two RHS symbols, which are not both nonterminal")
            }
            CnfViolation::Arity(0) => write!(f, "has an empty RHS"),
            CnfViolation::Arity(n) => write!(f, "has {} RHS symbols, more than two", n),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::CnfViolation { rule, violation } => {
                write!(f, "rule `{}` {}", rule, violation)
            }
            Diagnostic::UnknownToken { position, token } => {
                write!(f, "unknown token `{}` at position {}", token, position)
            }
            Diagnostic::UnknownStartSymbol { name } => {
                write!(f, "start symbol `{}` is not a nonterminal", name)
            }
        }
    }
}

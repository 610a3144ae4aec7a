//! This module defines grammar rules as they arrive from a grammar loader.
//! Each rule consists of a single label on its left-hand side and an array of
//! labels on its right-hand side. Labels are opaque strings; whether one names
//! a terminal or a nonterminal is decided when the grammar is compiled.

pub mod builder;

use std::fmt;

pub use self::builder::RuleBuilder;

/// Label-level grammar rule representation.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    /// The rule's left-hand side label.
    pub lhs: String,
    /// The rule's right-hand side labels.
    pub rhs: Vec<String>,
}

impl Rule {
    /// Creates a new rule.
    pub fn new<S>(lhs: impl Into<String>, rhs: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Rule {
            lhs: lhs.into(),
            rhs: rhs.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ->", self.lhs)?;
        for sym in &self.rhs {
            write!(f, " {}", sym)?;
        }
        Ok(())
    }
}

//! Grammar rules can be built with the builder pattern.

use crate::rule::Rule;

/// The rule builder.
///
/// ```
/// use cfg_cyk::RuleBuilder;
///
/// let mut rules = vec![];
/// RuleBuilder::new(&mut rules)
///     .rule("S")
///     .rhs(["NP", "VP"])
///     .rule("Det")
///     .rhs(["the"])
///     .rhs(["an"]);
/// assert_eq!(rules.len(), 3);
/// ```
pub struct RuleBuilder<'a> {
    lhs: Option<String>,
    rules: &'a mut Vec<Rule>,
}

impl<'a> RuleBuilder<'a> {
    /// Creates a rule builder that appends to the given list.
    pub fn new(rules: &'a mut Vec<Rule>) -> Self {
        RuleBuilder { lhs: None, rules }
    }

    /// Starts building a new rule with the given LHS.
    pub fn rule(mut self, lhs: impl Into<String>) -> Self {
        self.lhs = Some(lhs.into());
        self
    }

    /// Adds a rule alternative to the list.
    ///
    /// # Panics
    ///
    /// Panics if no LHS was given with `rule`.
    pub fn rhs<S, I>(self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lhs = self
            .lhs
            .clone()
            .expect("rule alternative added before its left-hand side");
        self.rules.push(Rule::new(lhs, syms));
        self
    }

    /// Adds one alternative per terminal, each with a single-label RHS.
    pub fn terminals<S, I>(self, terminals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        terminals
            .into_iter()
            .fold(self, |builder, terminal| builder.rhs([terminal]))
    }
}

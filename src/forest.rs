//! Parse forest extraction.
//!
//! Trees are rebuilt from the backpointers of a filled chart. A node with
//! several witnesses, or with children that have several trees each, yields
//! the cross product of all alternatives. The number of trees can be
//! exponential in the input length, so the extractor accepts limits.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use log::debug;

use crate::chart::{BackpointerStore, Span, Witness};
use crate::grammar::CnfGrammar;
use crate::symbol::Symbol;

/// A parse tree node.
///
/// A terminal leaf has no children and spans a single token. Every other node
/// is labeled by a nonterminal and has one terminal leaf or two nonterminal
/// children.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tree {
    pub symbol: Symbol,
    pub span: Span,
    pub children: Vec<Tree>,
}

impl Tree {
    /// Creates a terminal leaf.
    pub fn leaf(terminal: Symbol, position: usize) -> Self {
        Tree {
            symbol: terminal,
            span: Span::token(position),
            children: vec![],
        }
    }

    /// Whether this node is a terminal leaf.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Collects the terminal leaves from left to right.
    pub fn leaves(&self) -> Vec<Symbol> {
        let mut result = vec![];
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                result.push(node.symbol);
            } else {
                stack.extend(node.children.iter().rev());
            }
        }
        result
    }

    /// Returns the number of nodes, leaves included.
    pub fn num_nodes(&self) -> usize {
        1 + self.children.iter().map(Tree::num_nodes).sum::<usize>()
    }

    /// Displays the tree in bracketed form, such as
    /// `(S (NP (Det the) (N elephant)) (VP sneezed))`.
    pub fn display<'a>(&'a self, grammar: &'a CnfGrammar) -> TreeDisplay<'a> {
        TreeDisplay { tree: self, grammar }
    }
}

/// Helper for displaying a tree with symbol labels.
#[derive(Clone, Copy)]
pub struct TreeDisplay<'a> {
    tree: &'a Tree,
    grammar: &'a CnfGrammar,
}

impl<'a> fmt::Display for TreeDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = self.grammar.name_of(self.tree.symbol);
        if self.tree.is_leaf() {
            return f.write_str(name);
        }
        write!(f, "({}", name)?;
        for child in &self.tree.children {
            write!(f, " {}", child.display(self.grammar))?;
        }
        f.write_str(")")
    }
}

/// Bounds on forest extraction. `None` means unbounded.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForestLimits {
    /// The maximum number of trees kept for any node, the root included.
    pub trees_per_node: Option<usize>,
    /// The maximum number of trees returned. Extraction never builds more
    /// than this many trees for any node.
    pub total_trees: Option<usize>,
}

impl ForestLimits {
    /// No limits.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn trees_per_node(mut self, limit: usize) -> Self {
        self.trees_per_node = Some(limit);
        self
    }

    pub fn total_trees(mut self, limit: usize) -> Self {
        self.total_trees = Some(limit);
        self
    }

    /// The number of trees kept for any node. The first `k` trees of a node
    /// never need more than `k` trees of either child, so the total limit
    /// applies below the root as well.
    fn node_cap(self) -> Option<usize> {
        match (self.trees_per_node, self.total_trees) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }
}

/// Extracted trees.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Forest {
    /// Trees in a deterministic order: witnesses in recording order, each
    /// expanded as a cross product of left and right alternatives.
    pub trees: Vec<Tree>,
    /// Whether a limit cut the enumeration short.
    pub truncated: bool,
}

impl Forest {
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tree> {
        self.trees.iter()
    }
}

/// A backpointer store contradicts the chart it belongs to.
///
/// This never happens for a symbol that the chart holds for the span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ForestError {
    /// No witness was recorded for the symbol and span.
    MissingWitness {
        /// The symbol.
        symbol: Symbol,
        /// The span.
        span: Span,
    },
    /// A leaf witness on a longer span, or a split witness on a token span.
    InconsistentWitness {
        /// The symbol.
        symbol: Symbol,
        /// The span.
        span: Span,
    },
}

impl fmt::Display for ForestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForestError::MissingWitness { symbol, span } => write!(
                f,
                "no witness recorded for symbol {} at span {}",
                symbol.usize(),
                span
            ),
            ForestError::InconsistentWitness { symbol, span } => write!(
                f,
                "witness for symbol {} does not fit span {}",
                symbol.usize(),
                span
            ),
        }
    }
}

impl Error for ForestError {}

/// Trees for one node, shared between all parents that refer to it.
#[derive(Debug, Default)]
struct Subforest {
    trees: Vec<Tree>,
    truncated: bool,
}

/// Rebuilds trees from backpointers.
///
/// Subforests are memoized per symbol and span, so a node shared by many
/// derivations is expanded once.
pub struct ForestExtractor<'a> {
    backpointers: &'a BackpointerStore,
    limits: ForestLimits,
    memo: HashMap<(Symbol, Span), Rc<Subforest>>,
}

impl<'a> ForestExtractor<'a> {
    /// Creates an extractor with no limits.
    pub fn new(backpointers: &'a BackpointerStore) -> Self {
        ForestExtractor {
            backpointers,
            limits: ForestLimits::unbounded(),
            memo: HashMap::new(),
        }
    }

    /// Sets the limits.
    pub fn limits(mut self, limits: ForestLimits) -> Self {
        self.limits = limits;
        self.memo.clear();
        self
    }

    /// Extracts every tree of `symbol` over `span`, up to the limits.
    ///
    /// # Errors
    ///
    /// Fails if a witness is missing or inconsistent anywhere below the root.
    /// Callers should only extract symbols that the chart holds for the span.
    pub fn extract(&mut self, symbol: Symbol, span: Span) -> Result<Forest, ForestError> {
        let root = self.expand(symbol, span)?;
        debug!(
            "extracted {} trees at span {}{}",
            root.trees.len(),
            span,
            if root.truncated { " (truncated)" } else { "" }
        );
        Ok(Forest {
            trees: root.trees,
            truncated: root.truncated,
        })
    }

    fn subforest(&mut self, symbol: Symbol, span: Span) -> Result<Rc<Subforest>, ForestError> {
        if let Some(subforest) = self.memo.get(&(symbol, span)) {
            return Ok(subforest.clone());
        }
        let subforest = Rc::new(self.expand(symbol, span)?);
        self.memo.insert((symbol, span), subforest.clone());
        Ok(subforest)
    }

    fn expand(&mut self, symbol: Symbol, span: Span) -> Result<Subforest, ForestError> {
        let backpointers = self.backpointers;
        let cap = self.limits.node_cap();
        let full = |trees: &Vec<Tree>| cap.map_or(false, |cap| trees.len() >= cap);
        let witnesses = match backpointers.get(symbol, span) {
            Some(witnesses) if !witnesses.is_empty() => witnesses,
            _ => return Err(ForestError::MissingWitness { symbol, span }),
        };
        let inconsistent = ForestError::InconsistentWitness { symbol, span };

        if span.is_token() {
            if cap == Some(0) {
                return Ok(Subforest {
                    trees: vec![],
                    truncated: true,
                });
            }
            return match witnesses[0] {
                Witness::Leaf { terminal } => Ok(Subforest {
                    trees: vec![Tree {
                        symbol,
                        span,
                        children: vec![Tree::leaf(terminal, span.start)],
                    }],
                    truncated: false,
                }),
                Witness::Split { .. } => Err(inconsistent),
            };
        }

        let mut result = Subforest::default();
        for &witness in witnesses {
            // Every witness yields at least one tree.
            if full(&result.trees) {
                result.truncated = true;
                return Ok(result);
            }
            let [(left, left_span), (right, right_span)] =
                witness.children(span).ok_or(inconsistent)?;
            let lefts = self.subforest(left, left_span)?;
            let rights = self.subforest(right, right_span)?;
            result.truncated |= lefts.truncated || rights.truncated;
            for left_tree in &lefts.trees {
                for right_tree in &rights.trees {
                    if full(&result.trees) {
                        result.truncated = true;
                        return Ok(result);
                    }
                    result.trees.push(Tree {
                        symbol,
                        span,
                        children: vec![left_tree.clone(), right_tree.clone()],
                    });
                }
            }
        }
        Ok(result)
    }
}

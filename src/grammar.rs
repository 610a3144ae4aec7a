//! Compilation of rules into the indexed tables of a grammar in Chomsky normal form.

use std::collections::HashMap;
use std::fmt::Write;

use log::{debug, warn};

use crate::diagnostic::{CnfViolation, Diagnostic};
use crate::rule::Rule;
use crate::symbol::{Symbol, SymbolBitSet, SymbolSource};

/// A context-free grammar in Chomsky normal form, indexed by right-hand sides.
///
/// The grammar is immutable once compiled and can be shared between any
/// number of parses.
#[derive(Clone, Debug, Default)]
pub struct CnfGrammar {
    /// Interned labels of all symbols.
    sym_source: SymbolSource,
    /// Symbols that appear on some left-hand side.
    nonterminals: SymbolBitSet,
    /// For every terminal, the nonterminals that rewrite to exactly that terminal.
    unary: HashMap<Symbol, Vec<Symbol>>,
    /// Binary rules grouped by their right-hand side, in order of first appearance.
    binary: Vec<BinaryRule>,
    binary_index: HashMap<(Symbol, Symbol), usize>,
    num_unary_rules: usize,
    num_binary_rules: usize,
}

/// All rules `A -> left right` that share one right-hand side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinaryRule {
    /// First RHS nonterminal.
    pub left: Symbol,
    /// Second RHS nonterminal.
    pub right: Symbol,
    /// Every LHS nonterminal with this right-hand side.
    pub lhs: Vec<Symbol>,
}

/// Result of grammar compilation.
#[derive(Clone, Debug)]
pub struct Compiled {
    /// The grammar, without the rules that were dropped.
    pub grammar: CnfGrammar,
    /// One diagnostic per dropped rule, in rule order.
    pub diagnostics: Vec<Diagnostic>,
}

impl CnfGrammar {
    /// Validates and indexes a list of rules.
    ///
    /// A label is a nonterminal if and only if it appears on the left-hand side
    /// of some rule. Rules that break Chomsky normal form are dropped and
    /// reported; compilation always proceeds with the remaining rules.
    pub fn compile(rules: impl AsRef<[Rule]>) -> Compiled {
        let rules = rules.as_ref();
        let mut sym_source = SymbolSource::new();
        for rule in rules {
            sym_source.intern(&rule.lhs);
        }
        let mut nonterminals = SymbolBitSet::new();
        nonterminals.nonterminal(&sym_source, rules);

        let mut grammar = CnfGrammar {
            sym_source,
            nonterminals,
            ..CnfGrammar::default()
        };
        let mut diagnostics = vec![];

        for rule in rules {
            if let Err(violation) = grammar.add_rule(rule) {
                warn!("dropping rule `{}`: {}", rule, violation);
                diagnostics.push(Diagnostic::CnfViolation {
                    rule: rule.clone(),
                    violation,
                });
            }
        }
        grammar.nonterminals.reserve(&grammar.sym_source);

        debug!(
            "compiled grammar with {} unary and {} binary rules, {} dropped",
            grammar.num_unary_rules,
            grammar.num_binary_rules,
            diagnostics.len()
        );
        Compiled {
            grammar,
            diagnostics,
        }
    }

    fn add_rule(&mut self, rule: &Rule) -> Result<(), CnfViolation> {
        let lhs = self.sym_source.intern(&rule.lhs);
        match &rule.rhs[..] {
            [terminal] => {
                if self.nonterminal(terminal).is_some() {
                    return Err(CnfViolation::UnaryNonterminal);
                }
                let terminal = self.sym_source.intern(terminal);
                let lhs_list = self.unary.entry(terminal).or_default();
                if lhs_list.contains(&lhs) {
                    debug!("ignoring duplicate rule `{}`", rule);
                } else {
                    lhs_list.push(lhs);
                    self.num_unary_rules += 1;
                }
                Ok(())
            }
            [left, right] => match (self.nonterminal(left), self.nonterminal(right)) {
                (Some(left), Some(right)) => {
                    let binary = &mut self.binary;
                    let index = *self
                        .binary_index
                        .entry((left, right))
                        .or_insert_with(|| {
                            binary.push(BinaryRule {
                                left,
                                right,
                                lhs: vec![],
                            });
                            binary.len() - 1
                        });
                    let lhs_list = &mut self.binary[index].lhs;
                    if lhs_list.contains(&lhs) {
                        debug!("ignoring duplicate rule `{}`", rule);
                    } else {
                        lhs_list.push(lhs);
                        self.num_binary_rules += 1;
                    }
                    Ok(())
                }
                _ => Err(CnfViolation::BinaryWithTerminal),
            },
            rhs => Err(CnfViolation::Arity(rhs.len())),
        }
    }

    /// Returns the symbol source that holds the labels of this grammar.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Looks up a symbol by its label.
    pub fn symbol(&self, name: impl AsRef<str>) -> Option<Symbol> {
        self.sym_source.get(name)
    }

    /// Looks up a nonterminal by its label.
    pub fn nonterminal(&self, name: impl AsRef<str>) -> Option<Symbol> {
        self.symbol(name).filter(|&sym| self.is_nonterminal(sym))
    }

    /// Returns the label of a symbol.
    pub fn name_of(&self, sym: Symbol) -> &str {
        self.sym_source.name_of(sym)
    }

    /// Checks whether a symbol appears on some left-hand side.
    pub fn is_nonterminal(&self, sym: Symbol) -> bool {
        self.nonterminals.has_sym(sym)
    }

    /// Iterates over all nonterminals.
    pub fn nonterminals(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.nonterminals.iter()
    }

    /// Returns the number of symbols, terminal and nonterminal.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Nonterminals that rewrite to exactly the given terminal.
    pub fn unary_lhs(&self, terminal: Symbol) -> &[Symbol] {
        self.unary.get(&terminal).map_or(&[][..], |lhs| &lhs[..])
    }

    /// Nonterminals that rewrite to exactly `left` followed by `right`.
    pub fn binary_lhs(&self, left: Symbol, right: Symbol) -> &[Symbol] {
        match self.binary_index.get(&(left, right)) {
            Some(&index) => &self.binary[index].lhs[..],
            None => &[],
        }
    }

    /// Binary rules grouped by right-hand side, in order of first appearance.
    pub fn binary_rules(&self) -> &[BinaryRule] {
        &self.binary[..]
    }

    /// Returns the number of distinct rules of the form `A -> terminal`.
    pub fn num_unary_rules(&self) -> usize {
        self.num_unary_rules
    }

    /// Returns the number of distinct rules of the form `A -> B C`.
    pub fn num_binary_rules(&self) -> usize {
        self.num_binary_rules
    }

    /// Formats the grammar for debugging. Binary rules come first, in order of
    /// first appearance, followed by unary rules ordered by terminal.
    pub fn stringify_to_bnf(&self) -> String {
        let mut result = String::new();
        for rule in &self.binary {
            for &lhs in &rule.lhs {
                writeln!(
                    &mut result,
                    "{} ::= {} ~ {};",
                    self.name_of(lhs),
                    self.name_of(rule.left),
                    self.name_of(rule.right)
                )
                .expect("writing to String failed");
            }
        }
        let mut terminals: Vec<_> = self.unary.keys().copied().collect();
        terminals.sort();
        for terminal in terminals {
            for &lhs in self.unary_lhs(terminal) {
                writeln!(
                    &mut result,
                    "{} ::= {:?};",
                    self.name_of(lhs),
                    self.name_of(terminal)
                )
                .expect("writing to String failed");
            }
        }
        result
    }
}

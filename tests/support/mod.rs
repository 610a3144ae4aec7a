#![allow(dead_code)]

use std::collections::HashSet;

use cfg_cyk::{CnfGrammar, Forest, Rule, Span, Tree};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn compile(rules: &[Rule]) -> CnfGrammar {
    let compiled = CnfGrammar::compile(rules);
    assert!(
        compiled.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        compiled.diagnostics
    );
    compiled.grammar
}

/// Enumerates derivations top-down by exhaustive search over the rule list,
/// in the bracketed form used by `Tree::display`.
pub fn brute_force_trees(rules: &[Rule], start: &str, tokens: &[&str]) -> Vec<String> {
    let nonterminals: HashSet<&str> = rules.iter().map(|rule| rule.lhs.as_str()).collect();
    if tokens.is_empty() {
        return vec![];
    }
    derive(rules, &nonterminals, start, tokens)
}

fn derive(rules: &[Rule], nonterminals: &HashSet<&str>, sym: &str, tokens: &[&str]) -> Vec<String> {
    let mut result = vec![];
    for rule in rules.iter().filter(|rule| rule.lhs == sym) {
        match &rule.rhs[..] {
            [terminal] if !nonterminals.contains(terminal.as_str()) => {
                if tokens == [terminal.as_str()] {
                    result.push(format!("({} {})", sym, terminal));
                }
            }
            [left, right]
                if nonterminals.contains(left.as_str()) && nonterminals.contains(right.as_str()) =>
            {
                for split in 1..tokens.len() {
                    let lefts = derive(rules, nonterminals, left, &tokens[..split]);
                    if lefts.is_empty() {
                        continue;
                    }
                    let rights = derive(rules, nonterminals, right, &tokens[split..]);
                    for l in &lefts {
                        for r in &rights {
                            result.push(format!("({} {} {})", sym, l, r));
                        }
                    }
                }
            }
            _ => {}
        }
    }
    result
}

pub fn displayed(grammar: &CnfGrammar, forest: &Forest) -> Vec<String> {
    forest
        .iter()
        .map(|tree| tree.display(grammar).to_string())
        .collect()
}

pub fn sorted(mut strings: Vec<String>) -> Vec<String> {
    strings.sort();
    strings
}

/// Checks that the tree yields the tokens and that every node is an
/// instance of a rule.
pub fn assert_sound(grammar: &CnfGrammar, rules: &[Rule], tree: &Tree, tokens: &[&str]) {
    let leaves: Vec<&str> = tree
        .leaves()
        .into_iter()
        .map(|sym| grammar.name_of(sym))
        .collect();
    assert_eq!(leaves, tokens);
    assert_eq!(tree.span, Span::new(0, tokens.len()));
    assert_node_sound(grammar, rules, tree);
}

fn assert_node_sound(grammar: &CnfGrammar, rules: &[Rule], node: &Tree) {
    let lhs = grammar.name_of(node.symbol);
    let rhs: Vec<&str> = node
        .children
        .iter()
        .map(|child| grammar.name_of(child.symbol))
        .collect();
    assert!(
        rules.iter().any(|rule| rule.lhs == lhs && rule.rhs == rhs),
        "no rule {} -> {:?}",
        lhs,
        rhs
    );
    match &node.children[..] {
        [leaf] => {
            assert!(leaf.is_leaf());
            assert_eq!(leaf.span, node.span);
            assert!(node.span.is_token());
        }
        [left, right] => {
            assert_eq!(left.span.start, node.span.start);
            assert_eq!(left.span.end, right.span.start);
            assert_eq!(right.span.end, node.span.end);
            assert_node_sound(grammar, rules, left);
            assert_node_sound(grammar, rules, right);
        }
        children => panic!("node with {} children", children.len()),
    }
}

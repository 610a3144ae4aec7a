mod grammars;
mod support;

use std::collections::HashMap;

use cfg_cyk::{CykParser, Rule};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Generates random derivations that stay within a height limit.
struct Generator<'a> {
    rules: &'a [Rule],
    min_height: HashMap<&'a str, usize>,
    rng: SmallRng,
}

impl<'a> Generator<'a> {
    fn new(rules: &'a [Rule], seed: u64) -> Self {
        let mut min_height: HashMap<&str, usize> = HashMap::new();
        let mut changed = true;
        while changed {
            changed = false;
            for rule in rules {
                let height = match &rule.rhs[..] {
                    [_] => Some(1),
                    [left, right] => {
                        match (min_height.get(left.as_str()), min_height.get(right.as_str())) {
                            (Some(&l), Some(&r)) => Some(l.max(r) + 1),
                            _ => None,
                        }
                    }
                    _ => None,
                };
                if let Some(height) = height {
                    let entry = min_height.entry(rule.lhs.as_str()).or_insert(usize::MAX);
                    if height < *entry {
                        *entry = height;
                        changed = true;
                    }
                }
            }
        }
        Generator {
            rules,
            min_height,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn rule_height(&self, rule: &Rule) -> usize {
        match &rule.rhs[..] {
            [left, right] => self.min_height[left.as_str()].max(self.min_height[right.as_str()]) + 1,
            _ => 1,
        }
    }

    /// Returns the bracketed tree and its tokens.
    fn generate(&mut self, sym: &str, max_height: usize) -> (String, Vec<String>) {
        let candidates: Vec<&'a Rule> = self
            .rules
            .iter()
            .filter(|rule| rule.lhs == sym && self.rule_height(rule) <= max_height)
            .collect();
        let rule = *candidates
            .choose(&mut self.rng)
            .expect("height limit too low");
        match &rule.rhs[..] {
            [terminal] => (format!("({} {})", sym, terminal), vec![terminal.clone()]),
            [left, right] => {
                let (left_tree, mut tokens) = self.generate(left, max_height - 1);
                let (right_tree, right_tokens) = self.generate(right, max_height - 1);
                tokens.extend(right_tokens);
                (format!("({} {} {})", sym, left_tree, right_tree), tokens)
            }
            _ => unreachable!(),
        }
    }
}

fn check_random_sentences(rules: &[Rule], num_sentences: u64, max_height: usize) {
    support::init_logging();
    let grammar = support::compile(rules);
    let parser = CykParser::new(&grammar, "S");

    for seed in 0..num_sentences {
        let mut generator = Generator::new(rules, seed);
        let (tree, tokens) = generator.generate("S", max_height);
        let tokens: Vec<&str> = tokens.iter().map(|token| token.as_str()).collect();

        let outcome = parser.parse(&tokens).unwrap();
        assert!(outcome.accepted, "rejected {:?}", tokens);
        assert!(outcome.diagnostics.is_empty());

        let displayed = support::displayed(&grammar, &outcome.forest);
        assert!(
            displayed.contains(&tree),
            "{} missing from the forest of {:?}",
            tree,
            tokens
        );
        for tree in outcome.forest.iter() {
            support::assert_sound(&grammar, rules, tree, &tokens);
        }
        if tokens.len() <= 9 {
            let expected = support::brute_force_trees(rules, "S", &tokens);
            assert_eq!(support::sorted(displayed), support::sorted(expected));
        }
    }
}

#[test]
fn test_random_pajamas() {
    check_random_sentences(&grammars::pajamas(), 60, 6);
}

#[test]
fn test_random_workers() {
    check_random_sentences(&grammars::workers(), 40, 6);
}

#[test]
fn test_random_elephant() {
    check_random_sentences(&grammars::elephant(), 10, 3);
}

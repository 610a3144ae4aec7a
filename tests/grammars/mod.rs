#![allow(dead_code)]

use cfg_cyk::{Rule, RuleBuilder};

/// S -> NP VP; NP -> Det N; VP -> 'sneezed'; and a lexicon.
pub fn elephant() -> Vec<Rule> {
    let mut rules = vec![];
    RuleBuilder::new(&mut rules)
        .rule("S")
        .rhs(["NP", "VP"])
        .rule("NP")
        .rhs(["Det", "N"])
        .rule("VP")
        .rhs(["sneezed"])
        .rule("Det")
        .terminals(["the", "an"])
        .rule("N")
        .terminals(["elephant", "mouse"])
        .rule("V")
        .rhs(["sneezed"]);
    rules
}

/// "workers can fish": `can` is either a transitive verb or a modal.
pub fn workers() -> Vec<Rule> {
    let mut rules = vec![];
    RuleBuilder::new(&mut rules)
        .rule("S")
        .rhs(["NP", "VP"])
        .rule("NP")
        .rhs(["Det", "N"])
        .terminals(["workers", "fish"])
        .rule("VP")
        .rhs(["V", "NP"])
        .rhs(["MD", "VP"])
        .terminals(["fish"])
        .rule("Det")
        .terminals(["the"])
        .rule("N")
        .terminals(["workers", "fish"])
        .rule("V")
        .terminals(["can"])
        .rule("MD")
        .terminals(["can"]);
    rules
}

/// A grammar with prepositional phrase attachment ambiguity.
pub fn pajamas() -> Vec<Rule> {
    let mut rules = vec![];
    RuleBuilder::new(&mut rules)
        .rule("S")
        .rhs(["NP", "VP"])
        .rule("NP")
        .rhs(["DET", "N"])
        .rhs(["DET", "NP1"])
        .terminals(["I", "workers", "fish"])
        .rule("NP1")
        .rhs(["N", "PP"])
        .rule("VP")
        .rhs(["V", "NP"])
        .rhs(["V", "VP1"])
        .terminals(["sneezed", "giggled", "trumpeted", "saw", "shot"])
        .rule("VP1")
        .rhs(["NP", "PP"])
        .rule("PP")
        .rhs(["P", "NP"])
        .rule("DET")
        .terminals(["the", "an", "my", "most"])
        .rule("P")
        .terminals(["in", "with"])
        .rule("N")
        .terminals([
            "elephant", "elephants", "mouse", "mice", "pajamas", "workers", "fish",
        ])
        .rule("V")
        .terminals(["sneezed", "giggled", "trumpeted", "saw", "shot", "can"]);
    rules
}

/// S -> S S | 'a'. A string of n `a`s has Catalan(n - 1) parses.
pub fn catalan() -> Vec<Rule> {
    let mut rules = vec![];
    RuleBuilder::new(&mut rules)
        .rule("S")
        .rhs(["S", "S"])
        .rhs(["a"]);
    rules
}

pub fn tokens(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

//! Leetspeak substitution expander

use std::collections::HashSet;

use super::cartesian_join;

/// Look-alike table. Each entry lists the character itself first.
const SUBSTITUTIONS: &[(char, &[char])] = &[
    ('a', &['a', '@']),
    ('A', &['A', '@']),
    ('e', &['e', '3']),
    ('E', &['E', '3']),
    ('i', &['i', '1']),
    ('I', &['I', '1']),
    ('o', &['o', '0']),
    ('O', &['O', '0']),
    ('s', &['s', '$']),
    ('S', &['S', '$']),
];

/// Interchangeable representations of `ch`, or `None` when it has no entry
pub fn substitutions_for(ch: char) -> Option<&'static [char]> {
    SUBSTITUTIONS
        .iter()
        .find(|(key, _)| *key == ch)
        .map(|(_, options)| *options)
}

fn substitution_choices(ch: char) -> Vec<char> {
    match substitutions_for(ch) {
        Some(options) => options.to_vec(),
        None => vec![ch],
    }
}

/// Every string reachable by independently keeping or replacing each
/// character that has a table entry. The word itself is always included.
pub fn expand_substitutions(word: &str) -> HashSet<String> {
    let choices: Vec<Vec<char>> = word.chars().map(substitution_choices).collect();
    cartesian_join(&choices).into_iter().collect()
}

/// Exact count of distinct strings produced by case permutation followed by
/// substitution: each position contributes the size of the union of the
/// substitution sets of its case variants.
pub fn complex_variant_count(word: &str) -> u128 {
    word.chars().fold(1u128, |acc, ch| {
        let mut reachable: Vec<char> = Vec::with_capacity(4);
        for variant in super::case::case_choices(ch) {
            for option in substitution_choices(variant) {
                if !reachable.contains(&option) {
                    reachable.push(option);
                }
            }
        }
        acc.saturating_mul(reachable.len() as u128)
    })
}

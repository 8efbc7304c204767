//! Case permutation expander

use std::collections::HashSet;

use super::cartesian_join;

/// Lower/upper choices for one character; caseless characters pass through.
pub(crate) fn case_choices(ch: char) -> Vec<char> {
    let lower = ch.to_ascii_lowercase();
    let upper = ch.to_ascii_uppercase();
    if lower == upper {
        vec![ch]
    } else {
        vec![lower, upper]
    }
}

/// Every string reachable by choosing upper or lower case independently at
/// each letter position. `""` expands to `{""}`.
pub fn expand_case(word: &str) -> HashSet<String> {
    let choices: Vec<Vec<char>> = word.chars().map(case_choices).collect();
    cartesian_join(&choices).into_iter().collect()
}

/// Number of case variants without expanding them (saturating)
pub fn case_variant_count(word: &str) -> u128 {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .fold(1u128, |acc, _| acc.saturating_mul(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: HashSet<String>) -> Vec<String> {
        let mut v: Vec<String> = set.into_iter().collect();
        v.sort();
        v
    }

    #[test]
    fn test_two_letters() {
        assert_eq!(sorted(expand_case("ab")), vec!["AB", "Ab", "aB", "ab"]);
    }

    #[test]
    fn test_empty_word() {
        let result = expand_case("");
        assert_eq!(result.len(), 1);
        assert!(result.contains(""));
    }

    #[test]
    fn test_digits_and_symbols_pass_through() {
        assert_eq!(sorted(expand_case("a1!")), vec!["A1!", "a1!"]);
    }

    #[test]
    fn test_count_is_power_of_two() {
        let word = "Secret9";
        assert_eq!(expand_case(word).len() as u128, case_variant_count(word));
        assert_eq!(case_variant_count(word), 64);
    }

    #[test]
    fn test_mixed_case_input() {
        let result = expand_case("Ab");
        assert_eq!(result.len(), 4);
        assert!(result.contains("ab"));
    }
}

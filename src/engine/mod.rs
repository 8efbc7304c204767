//! Combination engine - expands a base word into candidate passwords
//!
//! Stages: case permutation, optional leetspeak substitution, affix
//! combination, then set union and a final sort.

pub mod affix;
pub mod case;
pub mod generator;
pub mod numeric;
pub mod substitution;
pub mod validator;

pub use affix::combine;
pub use case::expand_case;
pub use generator::{generate, GenerationLimits, WordlistGenerator};
pub use numeric::{NumericPreset, NumericRange};
pub use substitution::{expand_substitutions, substitutions_for};
pub use validator::ConfigValidator;

/// Symbols used for prepend, append and between placements, in fixed order
pub const SYMBOLS: [char; 10] = ['!', '@', '#', '$', '%', '^', '&', '*', '(', ')'];

/// Cartesian product of per-position choices, each tuple joined into a string.
///
/// An empty choice list yields the single empty string.
pub(crate) fn cartesian_join(choices: &[Vec<char>]) -> Vec<String> {
    let capacity = choices.iter().map(|c| c.len().max(1)).product::<usize>();
    let mut combos: Vec<String> = Vec::with_capacity(capacity);
    combos.push(String::with_capacity(choices.len()));

    for options in choices {
        if options.len() == 1 {
            for combo in combos.iter_mut() {
                combo.push(options[0]);
            }
            continue;
        }

        let mut next = Vec::with_capacity(combos.len() * options.len());
        for combo in &combos {
            for &ch in options {
                let mut extended = combo.clone();
                extended.push(ch);
                next.push(extended);
            }
        }
        combos = next;
    }

    combos
}

//! Affix combinator - numbers, years and symbols around one word variant

use std::collections::HashSet;

use super::SYMBOLS;
use crate::types::GenerationConfig;

/// Build every affixed form of `word` for one optional year.
///
/// Stage order: prepend number, prepend symbols, year, symbols between the
/// word and the year, appended symbols, append number. Symbol stages add to
/// the working set; the year and append-number stages rewrite all of it.
/// The result also keeps the base form and its prepend-symbol forms.
pub fn combine(word: &str, cfg: &GenerationConfig, year: Option<u32>) -> HashSet<String> {
    let base = match &cfg.prepend_number {
        Some(number) => format!("{}{}", number, word),
        None => word.to_string(),
    };

    let mut working = Vec::with_capacity(1 + SYMBOLS.len());
    if cfg.prepend_symbols {
        working.extend(SYMBOLS.iter().map(|symbol| format!("{}{}", symbol, base)));
    }
    working.push(base);

    let mut result: HashSet<String> = working.iter().cloned().collect();

    let year_digits = year.map(|y| y.to_string());
    if let Some(digits) = &year_digits {
        for form in working.iter_mut() {
            form.push_str(digits);
        }
        if cfg.between_symbols {
            let between = insert_before_suffix(&working, digits.len());
            working.extend(between);
        }
    }

    if cfg.append_symbols {
        let appended: Vec<String> = working
            .iter()
            .flat_map(|form| SYMBOLS.iter().map(move |symbol| format!("{}{}", form, symbol)))
            .collect();
        working.extend(appended);
    }

    if let Some(number) = &cfg.append_number {
        // Without a year the between flag targets the append number instead
        let between: Vec<String> = if year_digits.is_none() && cfg.between_symbols {
            working
                .iter()
                .flat_map(|form| {
                    SYMBOLS
                        .iter()
                        .map(move |symbol| format!("{}{}{}", form, symbol, number))
                })
                .collect()
        } else {
            Vec::new()
        };
        for form in working.iter_mut() {
            form.push_str(number);
        }
        working.extend(between);
    }

    result.extend(working);
    result
}

/// For each form, insert every symbol right before its last `suffix_len` bytes.
fn insert_before_suffix(forms: &[String], suffix_len: usize) -> Vec<String> {
    let mut inserted = Vec::with_capacity(forms.len() * SYMBOLS.len());
    for form in forms {
        let (head, tail) = form.split_at(form.len() - suffix_len);
        for symbol in SYMBOLS {
            inserted.push(format!("{}{}{}", head, symbol, tail));
        }
    }
    inserted
}

/// Upper bound on `combine` output size for one word, with or without a year
pub fn combination_upper_bound(cfg: &GenerationConfig, with_year: bool) -> u128 {
    let symbols = SYMBOLS.len() as u128;
    let prefixed = if cfg.prepend_symbols { 1 + symbols } else { 1 };
    let between_target = with_year || cfg.append_number.is_some();
    let between = if cfg.between_symbols && between_target { 1 + symbols } else { 1 };
    let appended = if cfg.append_symbols { 1 + symbols } else { 1 };
    prefixed + prefixed * between * appended
}

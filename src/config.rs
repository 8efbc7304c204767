//! Application settings from environment variables

use std::env;

use crate::engine::generator::DEFAULT_MAX_ENTRIES;
use crate::engine::GenerationLimits;
use crate::error::{Result, WordlistError};

pub const OUTPUT_VAR: &str = "WORDLIST_OUTPUT";
pub const NUMBERS_OUTPUT_VAR: &str = "WORDLIST_NUMBERS_OUTPUT";
pub const MAX_ENTRIES_VAR: &str = "WORDLIST_MAX_ENTRIES";
pub const BATCH_SIZE_VAR: &str = "WORDLIST_BATCH_SIZE";

/// Runtime settings for the CLI shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Wordlist output path
    pub output: String,
    /// Numeric list output path
    pub numbers_output: String,
    pub max_entries: u64,
    /// Lines per write batch
    pub batch_size: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            output: "generated_wordlist.txt".to_string(),
            numbers_output: "numbers.txt".to_string(),
            max_entries: DEFAULT_MAX_ENTRIES,
            batch_size: 10_000,
        }
    }
}

impl AppSettings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(output) = non_empty(lookup(OUTPUT_VAR)) {
            settings.output = output;
        }
        if let Some(output) = non_empty(lookup(NUMBERS_OUTPUT_VAR)) {
            settings.numbers_output = output;
        }
        if let Some(value) = non_empty(lookup(MAX_ENTRIES_VAR)) {
            settings.max_entries = parse_positive(MAX_ENTRIES_VAR, &value)?;
        }
        if let Some(value) = non_empty(lookup(BATCH_SIZE_VAR)) {
            settings.batch_size = parse_positive(BATCH_SIZE_VAR, &value)? as usize;
        }

        Ok(settings)
    }

    /// Generation limits derived from these settings
    pub fn limits(&self) -> GenerationLimits {
        GenerationLimits {
            max_entries: self.max_entries,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn parse_positive(key: &str, value: &str) -> Result<u64> {
    match value.replace('_', "").parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(WordlistError::validation(format!(
            "{} must be a positive integer, got '{}'",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = AppSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.limits().max_entries, DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_overrides() {
        let settings = AppSettings::from_lookup(lookup(&[
            (OUTPUT_VAR, "out.txt"),
            (MAX_ENTRIES_VAR, "1_000"),
            (BATCH_SIZE_VAR, " 50 "),
        ]))
        .unwrap();
        assert_eq!(settings.output, "out.txt");
        assert_eq!(settings.max_entries, 1000);
        assert_eq!(settings.batch_size, 50);
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(AppSettings::from_lookup(lookup(&[(MAX_ENTRIES_VAR, "lots")])).is_err());
        assert!(AppSettings::from_lookup(lookup(&[(BATCH_SIZE_VAR, "0")])).is_err());
    }
}

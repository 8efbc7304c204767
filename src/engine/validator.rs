//! Generation configuration validation

use crate::error::{Result, WordlistError};
use crate::types::GenerationConfig;
use regex::Regex;

/// Largest year accepted in a range
pub const MAX_YEAR: u32 = 9999;

/// Validator for base words and generation configs
#[derive(Debug, Clone)]
pub struct ConfigValidator {
    max_word_len: usize,
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self { max_word_len: 64 }
    }

    /// Create validator with a custom base word length limit
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Validate a base word together with its configuration
    pub fn validate(&self, base_word: &str, cfg: &GenerationConfig) -> Result<()> {
        self.validate_word(base_word, cfg)?;
        self.validate_number("Prepend number", cfg.prepend_number.as_deref())?;
        self.validate_number("Append number", cfg.append_number.as_deref())?;
        self.validate_years(cfg)?;
        Ok(())
    }

    /// Validate the base word
    fn validate_word(&self, base_word: &str, cfg: &GenerationConfig) -> Result<()> {
        if base_word.is_empty() && !cfg.has_affixes() {
            return Err(WordlistError::validation(
                "Base word cannot be empty when no numbers, years or symbols are configured",
            ));
        }

        if !base_word.is_ascii() {
            return Err(WordlistError::validation("Base word must be ASCII"));
        }

        if base_word.chars().any(|c| c.is_ascii_control()) {
            return Err(WordlistError::validation("Base word cannot contain control characters"));
        }

        if base_word.len() > self.max_word_len {
            return Err(WordlistError::validation(format!(
                "Base word too long (max {} characters)",
                self.max_word_len
            )));
        }

        Ok(())
    }

    /// Validate an optional numeric token
    fn validate_number(&self, label: &str, token: Option<&str>) -> Result<()> {
        if let Some(token) = token {
            if !self.is_digits(token)? {
                return Err(WordlistError::validation(format!(
                    "{} must contain only digits, got '{}'",
                    label, token
                )));
            }
        }
        Ok(())
    }

    /// Validate the year range
    fn validate_years(&self, cfg: &GenerationConfig) -> Result<()> {
        if let Some(range) = &cfg.years {
            if range.end < range.start {
                return Err(WordlistError::validation(format!(
                    "End year {} is before start year {}",
                    range.end, range.start
                )));
            }
            if range.end > MAX_YEAR {
                return Err(WordlistError::validation(format!(
                    "Year {} is out of range (max {})",
                    range.end, MAX_YEAR
                )));
            }
        }
        Ok(())
    }

    /// Check that a token is a non-empty run of ASCII digits
    pub fn is_digits(&self, token: &str) -> Result<bool> {
        let digits = Regex::new(r"^[0-9]+$")
            .map_err(|e| WordlistError::internal(e.to_string()))?;
        Ok(digits.is_match(token))
    }

    /// Parse a non-negative integer token such as a year
    pub fn parse_non_negative(&self, label: &str, token: &str) -> Result<u32> {
        let token = token.trim();
        if !self.is_digits(token)? {
            return Err(WordlistError::validation(format!(
                "{} must be a non-negative integer, got '{}'",
                label, token
            )));
        }
        token
            .parse::<u32>()
            .map_err(|e| WordlistError::validation(format!("{} is out of range: {}", label, e)))
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}

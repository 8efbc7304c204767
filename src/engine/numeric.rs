//! Zero-padded numeric range lists (dates, phone numbers)

use crate::error::{Result, WordlistError};

/// Built-in numeric list shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericPreset {
    /// 8-digit dates such as DDMMYYYY, up to 99999999
    Dates,
    /// 10-digit phone numbers, up to 0799999999
    Phones,
}

impl NumericPreset {
    pub fn width(&self) -> usize {
        match self {
            NumericPreset::Dates => 8,
            NumericPreset::Phones => 10,
        }
    }

    /// Last number of the range
    pub fn end(&self) -> &'static str {
        match self {
            NumericPreset::Dates => "99999999",
            NumericPreset::Phones => "0799999999",
        }
    }
}

impl std::fmt::Display for NumericPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericPreset::Dates => write!(f, "dates"),
            NumericPreset::Phones => write!(f, "phones"),
        }
    }
}

/// Generator for a zero-padded inclusive numeric range
#[derive(Debug, Clone)]
pub struct NumericRange {
    width: usize,
    start: u64,
    current_index: u64,
    total: u64,
}

impl NumericRange {
    /// Create a range from two digit tokens of equal width
    pub fn new(start: &str, end: &str) -> Result<Self> {
        let width = start.len();
        if width == 0 || width > 19 {
            return Err(WordlistError::validation("Start number needs between 1 and 19 digits"));
        }
        if end.len() != width {
            return Err(WordlistError::validation(format!(
                "End number needs to have {} digits",
                width
            )));
        }

        let first = parse_digits("Start number", start)?;
        let last = parse_digits("End number", end)?;
        if last < first {
            return Err(WordlistError::validation(format!(
                "Start number {} is after end number {}",
                start, end
            )));
        }

        Ok(Self {
            width,
            start: first,
            current_index: 0,
            total: last - first + 1,
        })
    }

    /// Create a range from a preset; the start must match its width
    pub fn from_preset(preset: NumericPreset, start: &str) -> Result<Self> {
        let start = start.trim();
        if start.len() != preset.width() {
            return Err(WordlistError::validation(format!(
                "Start number needs to have {} digits",
                preset.width()
            )));
        }
        Self::new(start, preset.end())
    }

    /// Get total number of values
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Get current progress index
    pub fn current_index(&self) -> u64 {
        self.current_index
    }

    /// Value at a specific index, zero-padded to the range width
    pub fn value_at(&self, index: u64) -> Option<String> {
        if index >= self.total {
            return None;
        }
        Some(format!("{:0width$}", self.start + index, width = self.width))
    }

    /// Generate next batch of values
    pub fn next_batch(&mut self, count: usize) -> Vec<String> {
        let mut batch = Vec::with_capacity(count.min(self.remaining() as usize));

        for _ in 0..count {
            if let Some(value) = self.value_at(self.current_index) {
                batch.push(value);
                self.current_index += 1;
            } else {
                break;
            }
        }

        batch
    }

    /// Check if the range is exhausted
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.total
    }

    /// Get progress percentage
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.current_index as f64 / self.total as f64) * 100.0
        }
    }

    /// Remaining count
    pub fn remaining(&self) -> u64 {
        self.total.saturating_sub(self.current_index)
    }
}

impl Iterator for NumericRange {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value_at(self.current_index)?;
        self.current_index += 1;
        Some(value)
    }
}

fn parse_digits(label: &str, token: &str) -> Result<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WordlistError::validation(format!(
            "{} must contain only digits, got '{}'",
            label, token
        )));
    }
    token
        .parse::<u64>()
        .map_err(|e| WordlistError::validation(format!("{} is out of range: {}", label, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_preset() {
        let range = NumericRange::from_preset(NumericPreset::Dates, "99999990").unwrap();
        assert_eq!(range.total(), 10);
        assert_eq!(range.value_at(0), Some("99999990".to_string()));
        assert_eq!(range.value_at(9), Some("99999999".to_string()));
        assert_eq!(range.value_at(10), None);
    }

    #[test]
    fn test_phones_keep_leading_zero() {
        let mut range = NumericRange::from_preset(NumericPreset::Phones, "0799999998").unwrap();
        assert_eq!(range.next(), Some("0799999998".to_string()));
        assert_eq!(range.next(), Some("0799999999".to_string()));
        assert_eq!(range.next(), None);
    }

    #[test]
    fn test_wrong_width_rejected() {
        let err = NumericRange::from_preset(NumericPreset::Dates, "123").unwrap_err();
        assert!(err.to_string().contains("8 digits"));
    }

    #[test]
    fn test_non_digits_rejected() {
        assert!(NumericRange::from_preset(NumericPreset::Dates, "0101abcd").is_err());
    }

    #[test]
    fn test_start_after_end_rejected() {
        assert!(NumericRange::from_preset(NumericPreset::Phones, "0800000000").is_err());
    }

    #[test]
    fn test_next_batch_until_exhausted() {
        let mut range = NumericRange::new("000", "009").unwrap();
        assert_eq!(range.next_batch(3), vec!["000", "001", "002"]);
        assert_eq!(range.current_index(), 3);
        assert!((range.progress_percent() - 30.0).abs() < 1e-9);

        assert_eq!(range.next_batch(5).len(), 5);
        assert_eq!(range.next_batch(5), vec!["008", "009"]);
        assert!(range.is_exhausted());
        assert_eq!(range.remaining(), 0);
        assert!((range.progress_percent() - 100.0).abs() < f64::EPSILON);
    }
}

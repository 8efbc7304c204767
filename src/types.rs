//! Core types and structures for wordlist-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Expansion mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Case permutations only
    #[default]
    Simple,
    /// Case permutations plus leetspeak substitutions
    Complex,
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerationMode::Simple => write!(f, "simple"),
            GenerationMode::Complex => write!(f, "complex"),
        }
    }
}

impl std::str::FromStr for GenerationMode {
    type Err = crate::error::WordlistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(GenerationMode::Simple),
            "complex" => Ok(GenerationMode::Complex),
            other => Err(crate::error::WordlistError::validation(format!(
                "Unknown mode '{}' (expected simple or complex)",
                other
            ))),
        }
    }
}

/// Inclusive year range appended as a suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawYearRange")]
pub struct YearRange {
    pub start: u32,
    pub end: u32,
}

/// Year range as written in a run file, where `end` may be omitted
#[derive(Deserialize)]
struct RawYearRange {
    start: u32,
    #[serde(default)]
    end: Option<u32>,
}

impl From<RawYearRange> for YearRange {
    fn from(raw: RawYearRange) -> Self {
        YearRange::new(raw.start, raw.end)
    }
}

impl YearRange {
    /// Build a range; a missing end collapses to a single year
    pub fn new(start: u32, end: Option<u32>) -> Self {
        Self {
            start,
            end: end.unwrap_or(start),
        }
    }

    /// Iterate every year in the range
    pub fn years(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }

    /// Number of years covered (0 for an inverted range)
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as u64 + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn default_keep_base_forms() -> bool {
    true
}

/// Configuration for one generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Digits prefixed to the word (leading zeros are kept)
    pub prepend_number: Option<String>,
    /// Digits suffixed after symbols
    pub append_number: Option<String>,
    pub years: Option<YearRange>,
    pub prepend_symbols: bool,
    pub append_symbols: bool,
    pub between_symbols: bool,
    pub mode: GenerationMode,
    /// Also emit bare variants and year-less forms when years are configured
    #[serde(default = "default_keep_base_forms")]
    pub keep_base_forms: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            prepend_number: None,
            append_number: None,
            years: None,
            prepend_symbols: false,
            append_symbols: false,
            between_symbols: false,
            mode: GenerationMode::Simple,
            keep_base_forms: true,
        }
    }
}

impl GenerationConfig {
    /// Whether any affix that produces output is configured.
    /// Between symbols only land next to a year or an appended number.
    pub fn has_affixes(&self) -> bool {
        self.prepend_number.is_some()
            || self.append_number.is_some()
            || self.years.is_some()
            || self.prepend_symbols
            || self.append_symbols
            || (self.between_symbols && (self.years.is_some() || self.append_number.is_some()))
    }
}

/// A complete run: base word plus its configuration (JSON run files)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSpec {
    pub base_word: String,
    #[serde(flatten)]
    pub config: GenerationConfig,
}

impl RunSpec {
    /// Load a run description from a JSON file
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> crate::error::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::WordlistError::io(e.to_string(), Some(path.display().to_string()))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> crate::error::Result<Self> {
        serde_json::from_str(content).map_err(|e| {
            crate::error::WordlistError::parse(e.to_string(), Some(content.to_string()))
        })
    }
}

/// Summary of a finished generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub base_word: String,
    pub mode: GenerationMode,
    pub entries: usize,
    pub output: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub duration: Duration,
}

/// Thread-safe generation counters
#[derive(Debug)]
pub struct GenerationMetrics {
    runs: AtomicU64,
    rejected: AtomicU64,
    variants_expanded: AtomicU64,
    combinations_built: AtomicU64,
    entries_emitted: AtomicU64,
    started: Instant,
}

impl GenerationMetrics {
    pub fn new() -> Self {
        Self {
            runs: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            variants_expanded: AtomicU64::new(0),
            combinations_built: AtomicU64::new(0),
            entries_emitted: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    pub fn increment_runs(&self) {
        self.runs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_variants(&self, count: u64) {
        self.variants_expanded.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_combinations(&self, count: u64) {
        self.combinations_built.fetch_add(count, Ordering::Relaxed);
    }

    pub fn add_entries(&self, count: u64) {
        self.entries_emitted.fetch_add(count, Ordering::Relaxed);
    }

    /// Copy the current counter values
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            runs: self.runs.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            variants_expanded: self.variants_expanded.load(Ordering::Relaxed),
            combinations_built: self.combinations_built.load(Ordering::Relaxed),
            entries_emitted: self.entries_emitted.load(Ordering::Relaxed),
            uptime: self.started.elapsed(),
        }
    }
}

impl Default for GenerationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of [`GenerationMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub runs: u64,
    pub rejected: u64,
    pub variants_expanded: u64,
    pub combinations_built: u64,
    pub entries_emitted: u64,
    pub uptime: Duration,
}

impl MetricsSnapshot {
    /// Share of generated combinations that survived deduplication
    pub fn unique_ratio(&self) -> f64 {
        if self.combinations_built == 0 {
            0.0
        } else {
            self.entries_emitted as f64 / self.combinations_built as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_range_defaults_end_to_start() {
        let range = YearRange::new(2020, None);
        assert_eq!(range.end, 2020);
        assert_eq!(range.len(), 1);
        assert_eq!(range.years().collect::<Vec<_>>(), vec![2020]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let range = YearRange { start: 2021, end: 2020 };
        assert!(range.is_empty());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("Complex".parse::<GenerationMode>().unwrap(), GenerationMode::Complex);
        assert!("fancy".parse::<GenerationMode>().is_err());
    }

    #[test]
    fn test_run_spec_json_defaults() {
        let spec = RunSpec::from_json(r#"{"base_word": "test", "prepend_symbols": true}"#).unwrap();
        assert_eq!(spec.base_word, "test");
        assert!(spec.config.prepend_symbols);
        assert!(spec.config.keep_base_forms);
        assert_eq!(spec.config.mode, GenerationMode::Simple);
    }

    #[test]
    fn test_run_spec_json_full() {
        let spec = RunSpec::from_json(
            r#"{
                "base_word": "test",
                "years": {"start": 2000, "end": 2002},
                "append_number": "007",
                "mode": "complex"
            }"#,
        )
        .unwrap();
        assert_eq!(spec.config.years, Some(YearRange::new(2000, Some(2002))));
        assert_eq!(spec.config.append_number.as_deref(), Some("007"));
        assert_eq!(spec.config.mode, GenerationMode::Complex);
    }

    #[test]
    fn test_run_spec_year_end_defaults_to_start() {
        let spec = RunSpec::from_json(r#"{"base_word":"ab","years":{"start":2020}}"#).unwrap();
        assert_eq!(spec.config.years, Some(YearRange::new(2020, None)));
        assert_eq!(spec.config.years.map(|y| y.end), Some(2020));
    }

    #[test]
    fn test_between_symbols_needs_year_or_number() {
        let mut cfg = GenerationConfig {
            between_symbols: true,
            ..Default::default()
        };
        assert!(!cfg.has_affixes());

        cfg.append_number = Some("7".to_string());
        assert!(cfg.has_affixes());
    }

    #[test]
    fn test_metrics_snapshot() {
        let metrics = GenerationMetrics::new();
        metrics.increment_runs();
        metrics.add_combinations(10);
        metrics.add_entries(4);
        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.runs, 1);
        assert!((snapshot.unique_ratio() - 0.4).abs() < f64::EPSILON);
    }
}

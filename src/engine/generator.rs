//! Wordlist generator - orchestrates expansion, affixes and deduplication

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;

use super::affix::{combination_upper_bound, combine};
use super::case::{case_variant_count, expand_case};
use super::substitution::{complex_variant_count, expand_substitutions};
use super::validator::ConfigValidator;
use crate::error::{Result, WordlistError};
use crate::types::{GenerationConfig, GenerationMetrics, GenerationMode, MetricsSnapshot};

/// Default cap on the number of entries one run may produce
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000_000;

/// Size limits applied before generation starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationLimits {
    /// Upper bound on entries; runs estimated above it are refused
    pub max_entries: u64,
}

impl Default for GenerationLimits {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}

/// Wordlist generator with capacity guard and shared metrics
#[derive(Debug, Clone)]
pub struct WordlistGenerator {
    validator: ConfigValidator,
    limits: GenerationLimits,
    metrics: Arc<GenerationMetrics>,
}

impl WordlistGenerator {
    /// Create a generator with default limits
    pub fn new() -> Self {
        Self::with_limits(GenerationLimits::default())
    }

    /// Create a generator with custom limits
    pub fn with_limits(limits: GenerationLimits) -> Self {
        Self {
            validator: ConfigValidator::new(),
            limits,
            metrics: Arc::new(GenerationMetrics::new()),
        }
    }

    /// Get a copy of the current metrics
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Expand a base word into its case (and, in complex mode, leetspeak) variants
    pub fn expand_variants(base_word: &str, mode: GenerationMode) -> HashSet<String> {
        let cased = expand_case(base_word);
        match mode {
            GenerationMode::Simple => cased,
            GenerationMode::Complex => cased
                .iter()
                .flat_map(|variant| expand_substitutions(variant))
                .collect(),
        }
    }

    /// Upper bound on the number of entries `generate` would return
    pub fn estimate(base_word: &str, cfg: &GenerationConfig) -> u128 {
        let variants = match cfg.mode {
            GenerationMode::Simple => case_variant_count(base_word),
            GenerationMode::Complex => complex_variant_count(base_word),
        };
        let bare = if cfg.keep_base_forms { variants } else { 0 };
        let yearless = variants.saturating_mul(combination_upper_bound(cfg, false));

        match &cfg.years {
            Some(range) => {
                let per_year = variants.saturating_mul(combination_upper_bound(cfg, true));
                let dated = per_year.saturating_mul(range.len() as u128);
                let extra = if cfg.keep_base_forms { yearless.saturating_add(bare) } else { 0 };
                dated.saturating_add(extra)
            }
            None => yearless.saturating_add(bare),
        }
    }

    /// Validate input and refuse runs that would exceed the entry limit
    pub fn prepare(&self, base_word: &str, cfg: &GenerationConfig) -> Result<u128> {
        if let Err(e) = self.validator.validate(base_word, cfg) {
            self.metrics.increment_rejected();
            return Err(e);
        }

        let estimated = Self::estimate(base_word, cfg);
        if estimated > self.limits.max_entries as u128 {
            self.metrics.increment_rejected();
            tracing::warn!(
                base_len = base_word.len(),
                estimated = %estimated,
                limit = self.limits.max_entries,
                "Generation refused: capacity exceeded"
            );
            return Err(WordlistError::capacity(estimated, self.limits.max_entries));
        }

        Ok(estimated)
    }

    /// Generate the deduplicated, sorted wordlist for one base word
    pub fn generate(&self, base_word: &str, cfg: &GenerationConfig) -> Result<Vec<String>> {
        let start_time = Instant::now();
        let estimated = self.prepare(base_word, cfg)?;

        let variants: Vec<String> = Self::expand_variants(base_word, cfg.mode).into_iter().collect();
        self.metrics.add_variants(variants.len() as u64);
        tracing::debug!(
            variants = variants.len(),
            mode = %cfg.mode,
            estimated = %estimated,
            "Expanded base word"
        );

        let mut wordlist: HashSet<String> = HashSet::new();
        for year in partitions(cfg) {
            let part = build_partition(&variants, cfg, year);
            self.metrics.add_combinations(part.len() as u64);
            wordlist.extend(part);
        }

        Ok(self.finish(base_word, cfg, wordlist, variants, start_time))
    }

    /// Generate with one blocking task per year partition, merged sequentially.
    ///
    /// Produces exactly the same output as [`generate`](Self::generate).
    pub async fn generate_concurrent(
        &self,
        base_word: &str,
        cfg: &GenerationConfig,
    ) -> Result<Vec<String>> {
        let start_time = Instant::now();
        let estimated = self.prepare(base_word, cfg)?;

        let variants: Arc<Vec<String>> =
            Arc::new(Self::expand_variants(base_word, cfg.mode).into_iter().collect());
        self.metrics.add_variants(variants.len() as u64);

        let shared_cfg = Arc::new(cfg.clone());
        let tasks = partitions(cfg).into_iter().map(|year| {
            let variants = Arc::clone(&variants);
            let cfg = Arc::clone(&shared_cfg);
            tokio::task::spawn_blocking(move || build_partition(&variants, &cfg, year))
        });

        let parts = join_all(tasks).await;
        tracing::debug!(
            partitions = parts.len(),
            estimated = %estimated,
            "Partitions completed"
        );

        let mut wordlist: HashSet<String> = HashSet::new();
        for part in parts {
            let part = part?;
            self.metrics.add_combinations(part.len() as u64);
            wordlist.extend(part);
        }

        let variants = Arc::try_unwrap(variants).unwrap_or_else(|shared| (*shared).clone());
        Ok(self.finish(base_word, cfg, wordlist, variants, start_time))
    }

    fn finish(
        &self,
        base_word: &str,
        cfg: &GenerationConfig,
        mut wordlist: HashSet<String>,
        variants: Vec<String>,
        start_time: Instant,
    ) -> Vec<String> {
        if cfg.keep_base_forms {
            wordlist.extend(variants);
        }

        let mut sorted: Vec<String> = wordlist.into_iter().collect();
        sorted.sort_unstable();

        self.metrics.increment_runs();
        self.metrics.add_entries(sorted.len() as u64);
        tracing::info!(
            base_len = base_word.len(),
            mode = %cfg.mode,
            entries = sorted.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "Wordlist generation completed"
        );

        sorted
    }
}

impl Default for WordlistGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Year partitions for a config; `None` is the year-less partition
fn partitions(cfg: &GenerationConfig) -> Vec<Option<u32>> {
    match &cfg.years {
        Some(range) => {
            let mut parts: Vec<Option<u32>> = range.years().map(Some).collect();
            if cfg.keep_base_forms {
                parts.push(None);
            }
            parts
        }
        None => vec![None],
    }
}

fn build_partition(variants: &[String], cfg: &GenerationConfig, year: Option<u32>) -> HashSet<String> {
    let mut part = HashSet::new();
    for variant in variants {
        part.extend(combine(variant, cfg, year));
    }
    part
}

/// Generate with a default [`WordlistGenerator`]
pub fn generate(base_word: &str, cfg: &GenerationConfig) -> Result<Vec<String>> {
    WordlistGenerator::new().generate(base_word, cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SYMBOLS;
    use crate::types::YearRange;

    #[test]
    fn test_simple_two_letters() {
        let result = generate("ab", &GenerationConfig::default()).unwrap();
        assert_eq!(result, vec!["AB", "Ab", "aB", "ab"]);
    }

    #[test]
    fn test_prepend_symbols_scenario() {
        let cfg = GenerationConfig {
            prepend_symbols: true,
            ..Default::default()
        };
        let result = generate("a", &cfg).unwrap();
        let mut expected = vec!["a".to_string(), "A".to_string()];
        for symbol in SYMBOLS {
            expected.push(format!("{}a", symbol));
            expected.push(format!("{}A", symbol));
        }
        expected.sort();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_complex_mode_includes_substitutions() {
        let cfg = GenerationConfig {
            mode: GenerationMode::Complex,
            ..Default::default()
        };
        let result = generate("a", &cfg).unwrap();
        assert_eq!(result, vec!["@", "A", "a"]);
    }

    #[test]
    fn test_year_inclusion() {
        let cfg = GenerationConfig {
            years: Some(YearRange::new(2020, Some(2021))),
            ..Default::default()
        };
        let result = generate("ab", &cfg).unwrap();
        for variant in ["ab", "aB", "Ab", "AB"] {
            assert!(result.contains(&format!("{}2020", variant)));
            assert!(result.contains(&format!("{}2021", variant)));
            assert!(result.contains(&variant.to_string()));
        }
        for entry in &result {
            let tail: String = entry.chars().rev().take(4).collect();
            if entry.len() >= 4 && tail.chars().all(|c| c.is_ascii_digit()) {
                assert!(entry.ends_with("2020") || entry.ends_with("2021"));
            }
        }
    }

    #[test]
    fn test_keep_base_forms_disabled() {
        let cfg = GenerationConfig {
            years: Some(YearRange::new(2020, None)),
            prepend_number: Some("1".to_string()),
            keep_base_forms: false,
            ..Default::default()
        };
        let result = generate("a", &cfg).unwrap();
        assert_eq!(result, vec!["1A", "1A2020", "1a", "1a2020"]);
    }

    #[test]
    fn test_sorted_and_unique() {
        let cfg = GenerationConfig {
            years: Some(YearRange::new(1999, Some(2001))),
            append_symbols: true,
            between_symbols: true,
            mode: GenerationMode::Complex,
            ..Default::default()
        };
        let result = generate("ose", &cfg).unwrap();
        assert!(result.windows(2).all(|w| w[0] < w[1]));
        assert!(result.len() as u128 <= WordlistGenerator::estimate("ose", &cfg));
    }

    #[test]
    fn test_deterministic() {
        let cfg = GenerationConfig {
            prepend_symbols: true,
            append_number: Some("12".to_string()),
            ..Default::default()
        };
        assert_eq!(generate("pass", &cfg).unwrap(), generate("pass", &cfg).unwrap());
    }

    #[test]
    fn test_capacity_guard() {
        let generator = WordlistGenerator::with_limits(GenerationLimits { max_entries: 100 });
        let err = generator
            .generate("password", &GenerationConfig::default())
            .unwrap_err();
        assert!(matches!(err, WordlistError::CapacityExceeded { .. }));
        assert_eq!(generator.metrics_snapshot().rejected, 1);
    }

    #[test]
    fn test_invalid_config_rejected_before_generation() {
        let cfg = GenerationConfig {
            years: Some(YearRange { start: 2010, end: 2000 }),
            ..Default::default()
        };
        let generator = WordlistGenerator::new();
        assert!(generator.generate("test", &cfg).is_err());
        assert_eq!(generator.metrics_snapshot().runs, 0);
    }

    #[test]
    fn test_metrics_recorded() {
        let generator = WordlistGenerator::new();
        generator.generate("ab", &GenerationConfig::default()).unwrap();
        let snapshot = generator.metrics_snapshot();
        assert_eq!(snapshot.runs, 1);
        assert_eq!(snapshot.variants_expanded, 4);
        assert_eq!(snapshot.entries_emitted, 4);
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let cfg = GenerationConfig {
            years: Some(YearRange::new(2018, Some(2022))),
            prepend_symbols: true,
            between_symbols: true,
            append_number: Some("1".to_string()),
            ..Default::default()
        };
        let generator = WordlistGenerator::new();
        let sequential = generator.generate("abc", &cfg).unwrap();
        let concurrent = generator.generate_concurrent("abc", &cfg).await.unwrap();
        assert_eq!(sequential, concurrent);
    }
}

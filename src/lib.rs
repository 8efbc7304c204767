//! Wordlist Forge - combinatorial password candidate generation
//!
//! Expands a base word with case permutations, leetspeak substitutions,
//! numeric and year affixes and symbol placements, then deduplicates and
//! sorts the result.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{Result, WordlistError};
pub use types::{
    GenerationConfig, GenerationMetrics, GenerationMode, GenerationReport, MetricsSnapshot,
    RunSpec, YearRange,
};

// Re-export main functionality
pub use config::AppSettings;
pub use engine::{generate, GenerationLimits, NumericPreset, NumericRange, WordlistGenerator};
pub use output::{FileSink, MemorySink, WordlistSink};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}

//! Command line parsing and interactive prompts

use std::path::PathBuf;

use inquire::validator::Validation;
use inquire::{Confirm, Select, Text};

use crate::engine::{ConfigValidator, NumericPreset};
use crate::error::{Result, WordlistError};
use crate::types::{GenerationConfig, GenerationMode, RunSpec, YearRange};

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Prompt for every setting
    Interactive,
    /// Run from a JSON run file
    Run { config_path: PathBuf },
    /// Numeric range list
    Numbers {
        preset: NumericPreset,
        start: Option<String>,
    },
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    pub output: Option<String>,
    pub verbose: bool,
}

/// Parse arguments (without the program name)
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut command = Command::Interactive;
    let mut output = None;
    let mut verbose = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                return Ok(CliArgs {
                    command: Command::Help,
                    output,
                    verbose,
                })
            }
            "-v" | "--verbose" => verbose = true,
            "-o" | "--output" => {
                let path = iter
                    .next()
                    .ok_or_else(|| WordlistError::cli(format!("{} requires a path", arg)))?;
                output = Some(path.clone());
            }
            "-c" | "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| WordlistError::cli(format!("{} requires a path", arg)))?;
                command = set_command(command, Command::Run {
                    config_path: PathBuf::from(path),
                })?;
            }
            "dates" | "phones" => {
                let preset = if arg == "dates" {
                    NumericPreset::Dates
                } else {
                    NumericPreset::Phones
                };
                let start = match iter.clone().next() {
                    Some(next) if !next.starts_with('-') => iter.next().cloned(),
                    _ => None,
                };
                command = set_command(command, Command::Numbers { preset, start })?;
            }
            other => {
                return Err(WordlistError::cli(format!("Unknown argument '{}'", other)));
            }
        }
    }

    Ok(CliArgs {
        command,
        output,
        verbose,
    })
}

fn set_command(current: Command, next: Command) -> Result<Command> {
    if current != Command::Interactive {
        return Err(WordlistError::cli("Only one of --config, dates or phones may be given"));
    }
    Ok(next)
}

/// Raw answers collected from the user before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAnswers {
    pub base_word: String,
    pub start_year: String,
    pub end_year: String,
    pub prepend_number: String,
    pub append_number: String,
    pub prepend_symbols: bool,
    pub append_symbols: bool,
    pub between_symbols: bool,
    pub mode: GenerationMode,
}

impl RawAnswers {
    /// Turn prompt answers into a validated run.
    ///
    /// Blank year or number answers mean "skip"; a blank end year reuses the
    /// start year.
    pub fn into_run_spec(self) -> Result<RunSpec> {
        let validator = ConfigValidator::new();

        let years = match self.start_year.trim() {
            "" => None,
            start => {
                let start = validator.parse_non_negative("Start year", start)?;
                let end = match self.end_year.trim() {
                    "" => None,
                    end => Some(validator.parse_non_negative("End year", end)?),
                };
                Some(YearRange::new(start, end))
            }
        };

        let config = GenerationConfig {
            prepend_number: optional(&self.prepend_number),
            append_number: optional(&self.append_number),
            years,
            prepend_symbols: self.prepend_symbols,
            append_symbols: self.append_symbols,
            between_symbols: self.between_symbols,
            mode: self.mode,
            keep_base_forms: true,
        };

        let base_word = self.base_word.trim().to_string();
        validator.validate(&base_word, &config)?;
        Ok(RunSpec { base_word, config })
    }
}

fn optional(answer: &str) -> Option<String> {
    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}

fn digits_or_blank(input: &str) -> std::result::Result<Validation, inquire::CustomUserError> {
    let input = input.trim();
    if input.is_empty() || ConfigValidator::new().is_digits(input)? {
        Ok(Validation::Valid)
    } else {
        Ok(Validation::Invalid("Please enter digits only, or leave empty".into()))
    }
}

/// Ask the user for a base word and every generation option
pub fn prompt_run_spec() -> Result<RunSpec> {
    let base_word = Text::new("Enter the base word (e.g., test):").prompt()?;

    let start_year = Text::new("Enter the start year for the range (e.g., 2000) or press Enter to skip:")
        .with_validator(digits_or_blank)
        .prompt()?;

    let end_year = if start_year.trim().is_empty() {
        String::new()
    } else {
        Text::new("Enter the end year for the range (e.g., 2010) or press Enter to use the start year:")
            .with_validator(digits_or_blank)
            .prompt()?
    };

    let prepend_number = Text::new("Enter a number to prepend to the word (leave empty to skip):")
        .with_validator(digits_or_blank)
        .prompt()?;
    let append_number = Text::new("Enter a number to append to the word (leave empty to skip):")
        .with_validator(digits_or_blank)
        .prompt()?;

    let prepend_symbols = Confirm::new("Should symbols be added at the beginning of the word?")
        .with_default(false)
        .prompt()?;
    let append_symbols = Confirm::new("Should symbols be added at the end of the word?")
        .with_default(false)
        .prompt()?;
    let between_symbols = Confirm::new("Should symbols be added between the word and the number?")
        .with_default(false)
        .prompt()?;

    let mode = Select::new(
        "Generation mode:",
        vec![GenerationMode::Simple, GenerationMode::Complex],
    )
    .with_help_message("complex also applies leetspeak substitutions (a→@, e→3, i→1, o→0, s→$)")
    .prompt()?;

    RawAnswers {
        base_word,
        start_year,
        end_year,
        prepend_number,
        append_number,
        prepend_symbols,
        append_symbols,
        between_symbols,
        mode,
    }
    .into_run_spec()
}

/// Ask for the first number of a numeric range
pub fn prompt_numeric_start(preset: NumericPreset) -> Result<String> {
    let width = preset.width();
    let answer = Text::new(&format!("Enter the first number ({} digits):", width))
        .with_validator(move |input: &str| {
            let input = input.trim();
            if input.len() == width && ConfigValidator::new().is_digits(input)? {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    format!("First number needs to have {} digits", width).into(),
                ))
            }
        })
        .prompt()?;
    Ok(answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_digits_or_blank_prompt_validator() {
        assert!(matches!(digits_or_blank("").unwrap(), Validation::Valid));
        assert!(matches!(digits_or_blank(" 0042 ").unwrap(), Validation::Valid));
        assert!(matches!(digits_or_blank("12a").unwrap(), Validation::Invalid(_)));
        assert!(matches!(digits_or_blank("-1").unwrap(), Validation::Invalid(_)));
    }

    #[test]
    fn test_no_args_is_interactive() {
        let parsed = parse_args(&[]).unwrap();
        assert_eq!(parsed.command, Command::Interactive);
        assert!(!parsed.verbose);
    }

    #[test]
    fn test_config_and_output() {
        let parsed = parse_args(&args(&["--config", "run.json", "-o", "out.txt", "-v"])).unwrap();
        assert_eq!(
            parsed.command,
            Command::Run {
                config_path: PathBuf::from("run.json")
            }
        );
        assert_eq!(parsed.output.as_deref(), Some("out.txt"));
        assert!(parsed.verbose);
    }

    #[test]
    fn test_numbers_with_and_without_start() {
        let parsed = parse_args(&args(&["dates", "01011990"])).unwrap();
        assert_eq!(
            parsed.command,
            Command::Numbers {
                preset: NumericPreset::Dates,
                start: Some("01011990".to_string())
            }
        );

        let parsed = parse_args(&args(&["phones", "--verbose"])).unwrap();
        assert_eq!(
            parsed.command,
            Command::Numbers {
                preset: NumericPreset::Phones,
                start: None
            }
        );
        assert!(parsed.verbose);
    }

    #[test]
    fn test_bad_args() {
        assert!(parse_args(&args(&["--output"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["dates", "--config", "x.json"])).is_err());
    }

    #[test]
    fn test_help_wins() {
        let parsed = parse_args(&args(&["-v", "--help", "--bogus"])).unwrap();
        assert_eq!(parsed.command, Command::Help);
    }

    #[test]
    fn test_answers_end_year_defaults_to_start() {
        let spec = RawAnswers {
            base_word: " test ".to_string(),
            start_year: "2000".to_string(),
            prepend_number: "01".to_string(),
            ..Default::default()
        }
        .into_run_spec()
        .unwrap();
        assert_eq!(spec.base_word, "test");
        assert_eq!(spec.config.years, Some(YearRange::new(2000, Some(2000))));
        assert_eq!(spec.config.prepend_number.as_deref(), Some("01"));
        assert_eq!(spec.config.append_number, None);
    }

    #[test]
    fn test_answers_rejected() {
        let inverted = RawAnswers {
            base_word: "test".to_string(),
            start_year: "2010".to_string(),
            end_year: "2000".to_string(),
            ..Default::default()
        };
        assert!(inverted.into_run_spec().is_err());

        let empty = RawAnswers::default();
        assert!(empty.into_run_spec().is_err());
    }
}

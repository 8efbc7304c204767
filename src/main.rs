//! Wordlist Forge - combinatorial password candidate generation
//!
//! Builds case, leetspeak, number, year and symbol variants of a base word
//! and writes them as a sorted, deduplicated wordlist.

use wordlist_forge::{
    cli::{self, CliArgs, Command},
    output::{write_all_lines, FileSink, WordlistSink},
    AppSettings, GenerationReport, NumericPreset, NumericRange, Result, RunSpec,
    WordlistGenerator,
};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use std::env;
use std::process;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = wordlist_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match cli::parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    if args.command == Command::Help {
        print_help();
        return Ok(());
    }

    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main workflow
async fn run(args: CliArgs) -> Result<()> {
    let settings = AppSettings::from_env()?;

    match args.command {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Interactive => {
            print_banner();
            let spec = cli::prompt_run_spec()?;
            let output = args.output.unwrap_or_else(|| settings.output.clone());
            run_wordlist(&settings, spec, output).await
        }
        Command::Run { config_path } => {
            let spec = RunSpec::from_json_file(&config_path)?;
            tracing::info!(path = %config_path.display(), "Loaded run file");
            let output = args.output.unwrap_or_else(|| settings.output.clone());
            run_wordlist(&settings, spec, output).await
        }
        Command::Numbers { preset, start } => {
            let start = match start {
                Some(start) => start,
                None => cli::prompt_numeric_start(preset)?,
            };
            let output = args.output.unwrap_or_else(|| settings.numbers_output.clone());
            run_numbers(&settings, preset, &start, output).await
        }
    }
}

/// Generate, write and summarize one wordlist
async fn run_wordlist(settings: &AppSettings, spec: RunSpec, output: String) -> Result<()> {
    let generator = WordlistGenerator::with_limits(settings.limits());
    let started = Instant::now();

    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Generating variants of '{}'...", spec.base_word));
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    let result = generator.generate_concurrent(&spec.base_word, &spec.config).await;
    spinner.finish_and_clear();
    let wordlist = result?;

    let mut sink = FileSink::create(&output).await?;
    let progress = writing_bar(wordlist.len() as u64);
    let bar = progress.clone();
    write_all_lines(&mut sink, &wordlist, settings.batch_size, move |written| {
        bar.set_position(written)
    })
    .await?;
    progress.finish_and_clear();

    let report = GenerationReport {
        base_word: spec.base_word.clone(),
        mode: spec.config.mode,
        entries: wordlist.len(),
        output: Some(sink.describe()),
        generated_at: Utc::now(),
        duration: started.elapsed(),
    };
    display_summary(&report, &wordlist);

    Ok(())
}

/// Stream a numeric range to the output file
async fn run_numbers(
    settings: &AppSettings,
    preset: NumericPreset,
    start: &str,
    output: String,
) -> Result<()> {
    let mut range = NumericRange::from_preset(preset, start)?;
    let mut sink = FileSink::create(&output).await?;
    let progress = writing_bar(range.total());

    while !range.is_exhausted() {
        let batch = range.next_batch(settings.batch_size);
        sink.write_batch(&batch).await?;
        progress.set_position(range.current_index());
        progress.set_message(format!("{:.1}%", range.progress_percent()));
    }
    sink.finish().await?;
    progress.finish_and_clear();

    tracing::info!(preset = %preset, entries = range.total(), "Numeric list written");
    println!("✅ Wordlist generated in {}. Total numbers: {}", sink.describe(), range.total());
    Ok(())
}

fn writing_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
    {
        bar.set_style(style.progress_chars("#>-"));
    }
    bar
}

/// Display the result summary with a random preview
fn display_summary(report: &GenerationReport, wordlist: &[String]) {
    println!();
    println!("🎨 Preview:");
    println!("═══════════");
    let mut rng = rand::thread_rng();
    let mut sample: Vec<&String> = wordlist.choose_multiple(&mut rng, 9).collect();
    sample.sort();
    for (i, entry) in sample.iter().enumerate() {
        print!("{:<20}", entry);
        if (i + 1) % 3 == 0 {
            println!();
        }
    }
    if sample.len() % 3 != 0 {
        println!();
    }
    println!();

    println!("📈 Summary:");
    println!("   🔤 Base word: {}", report.base_word);
    println!("   ⚙️  Mode: {}", report.mode);
    println!("   📊 Total words: {}", report.entries);
    println!("   ⏱️  Total time: {:.2}s", report.duration.as_secs_f32());
    if let Some(output) = &report.output {
        println!();
        println!("✅ Wordlist generated and saved to '{}'. Total words: {}", output, report.entries);
    }
}

fn print_banner() {
    println!("🔥 Wordlist Forge - password candidate generation");
    println!("══════════════════════════════════════════════════");
    println!();
}

/// Print help information
fn print_help() {
    println!("🔥 Wordlist Forge - password candidate generation");
    println!("══════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    wordlist-forge [OPTIONS]");
    println!("    wordlist-forge --config <RUN.json> [OPTIONS]");
    println!("    wordlist-forge dates [START] [OPTIONS]");
    println!("    wordlist-forge phones [START] [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>   Run non-interactively from a JSON run file");
    println!("    -o, --output <FILE>   Output file (overwritten)");
    println!("    -v, --verbose         Debug logging on stderr");
    println!("    -h, --help            Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    wordlist-forge                           # Interactive session");
    println!("    wordlist-forge -c run.json -o list.txt   # From a run file");
    println!("    wordlist-forge dates 01011990            # 8-digit dates up to 99999999");
    println!("    wordlist-forge phones 0700000000         # 10-digit numbers up to 0799999999");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    WORDLIST_OUTPUT          Wordlist file (default: generated_wordlist.txt)");
    println!("    WORDLIST_NUMBERS_OUTPUT  Numeric list file (default: numbers.txt)");
    println!("    WORDLIST_MAX_ENTRIES     Refuse runs above this size (default: 10000000)");
    println!("    WORDLIST_BATCH_SIZE      Lines per write batch (default: 10000)");
    println!();
    println!("Made with ❤️ and 🦀 Rust");
}

//! Command implementations for Weaver CLI.

use std::path::Path;
use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{
    WeaverConfig, load_words_file, parse_numbers_arg, parse_patterns, parse_specials_arg,
    parse_words_arg, reset_config,
};
use crate::error::{Result, WeaverError};
use crate::filter::ConflictGroups;
use crate::generate::Pools;
use crate::normalize::generalize_pool;
use crate::output::write_wordlist;
use crate::wordlist::WordlistRequest;

/// Execute a CLI command.
pub fn execute_command(args: WeaverArgs) -> Result<()> {
    match &args.command {
        Command::Generate(generate_args) => generate(generate_args.clone(), &args),
        Command::Config(config_args) => run_config(config_args.clone(), &args),
        Command::ResetConfig(reset_args) => run_reset(reset_args.clone(), &args),
    }
}

/// Build a request from `generate` flags.
fn request_from_args(args: &GenerateArgs) -> Result<WordlistRequest> {
    let raw_patterns = args
        .patterns
        .as_deref()
        .ok_or_else(|| WeaverError::config("No patterns provided. Use --patterns"))?;
    let patterns = parse_patterns(raw_patterns, args.pattern_mode);
    if patterns.is_empty() {
        return Err(WeaverError::pattern(format!(
            "No usable patterns in '{raw_patterns}'"
        )));
    }
    if args.min_length > args.max_length {
        return Err(WeaverError::invalid_argument(format!(
            "--min-length ({}) is greater than --max-length ({})",
            args.min_length, args.max_length
        )));
    }

    let words = args.words.as_deref().map(parse_words_arg).transpose()?;
    let numbers = args.numbers.as_deref().map(parse_numbers_arg).transpose()?;
    let specials = args.specials.as_deref().map(parse_specials_arg).transpose()?;

    let mut groups = ConflictGroups::default();
    let (mut word_values, mut number_values, mut special_values) =
        (Vec::new(), Vec::new(), Vec::new());

    if let Some(parsed) = words {
        word_values = parsed.values;
        groups.words = parsed.groups;
    }
    if let Some(parsed) = numbers {
        number_values = parsed.values;
        groups.numbers = parsed.groups;
    }
    if let Some(parsed) = specials {
        special_values = parsed.values;
        groups.specials = parsed.groups;
    }

    if let Some(path) = &args.words_file {
        let file = load_words_file(path)?;
        info!(
            "Loaded {} words, {} numbers, {} specials from {}",
            file.words.len(),
            file.numbers.len(),
            file.specials.len(),
            path.display()
        );
        word_values.extend(file.words);
        number_values.extend(file.numbers);
        special_values.extend(file.specials);
        groups.words.extend(file.groups);
    }

    if args.normalize {
        word_values = generalize_pool(&word_values);
    }

    Ok(WordlistRequest {
        patterns,
        pools: Pools::new(word_values, number_values, special_values),
        groups,
        min_len: args.min_length,
        max_len: args.max_length,
    })
}

/// Build a request from a configuration file.
fn request_from_config(config: &WeaverConfig) -> Result<WordlistRequest> {
    config.validate()?;
    Ok(WordlistRequest {
        patterns: config.expanded_patterns(),
        pools: config.pools(),
        groups: config.groups(),
        min_len: config.min_length,
        max_len: config.max_length,
    })
}

/// Build, write and summarize one wordlist.
fn run_request(
    request: &WordlistRequest,
    output: &Path,
    external: Option<&Path>,
) -> Result<GenerationReport> {
    let start = Instant::now();
    let wordlist = request.build();
    let written = write_wordlist(output, &wordlist.candidates, external)?;

    Ok(GenerationReport {
        output_file: output.to_string_lossy().to_string(),
        patterns: request.patterns.len(),
        words: request.pools.words.len(),
        numbers: request.pools.numbers.len(),
        specials: request.pools.specials.len(),
        conflict_rules: request.groups.active_rules(),
        generated: wordlist.generated,
        written,
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Generate a wordlist from flags.
fn generate(args: GenerateArgs, cli_args: &WeaverArgs) -> Result<()> {
    let request = request_from_args(&args)?;
    if cli_args.verbosity() > 1 {
        println!("Patterns: {}", request.patterns.join(", "));
    }

    let report = run_request(&request, &args.output, args.external_wordlist.as_deref())?;
    output_result("Wordlist generated", &report, cli_args)
}

/// Generate a wordlist from a configuration file.
fn run_config(args: ConfigArgs, cli_args: &WeaverArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading configuration from: {}", args.config_file.display());
    }
    let config = WeaverConfig::load(&args.config_file)?;
    let request = request_from_config(&config)?;
    let output = args.output.unwrap_or_else(|| config.output_file.clone());

    let report = run_request(&request, &output, config.external_wordlist.as_deref())?;
    output_result("Wordlist generated", &report, cli_args)
}

/// Clear personal data from a configuration file.
fn run_reset(args: ResetConfigArgs, cli_args: &WeaverArgs) -> Result<()> {
    let fields_cleared = reset_config(&args.config_file)?;
    output_result(
        "Configuration reset",
        &ResetReport {
            config_file: args.config_file.to_string_lossy().to_string(),
            fields_cleared,
        },
        cli_args,
    )
}

//! Command line argument parsing for the Weaver CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::PatternMode;

/// Weaver - Generate targeted wordlists for password testing
#[derive(Parser, Debug, Clone)]
#[command(name = "weaver")]
#[command(about = "Generate targeted wordlists for password testing")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WeaverArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format for the run summary
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WeaverArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a wordlist from command line values
    Generate(GenerateArgs),

    /// Generate a wordlist from a JSON configuration file
    Config(ConfigArgs),

    /// Clear personal data, words and numbers from a configuration file
    #[command(name = "reset-config")]
    ResetConfig(ResetConfigArgs),
}

/// Arguments for generating from flags
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Patterns: shorthand like "Wns;ww" or templates like "{Word1}{number}"
    #[arg(short, long)]
    pub patterns: Option<String>,

    /// Words: comma-grouped, semicolon-separated, or @file
    #[arg(short, long)]
    pub words: Option<String>,

    /// Numbers: semicolon-separated (commas group), or @file
    #[arg(short, long)]
    pub numbers: Option<String>,

    /// Specials: a string of characters, semicolon-separated, or @file
    #[arg(short, long)]
    pub specials: Option<String>,

    /// Mixed file of words, numbers, specials and comma-grouped words
    #[arg(long, value_name = "FILE")]
    pub words_file: Option<PathBuf>,

    /// Output file path
    #[arg(short, long, default_value = "wordlist.txt")]
    pub output: PathBuf,

    /// Minimum password length
    #[arg(long, default_value = "1")]
    pub min_length: usize,

    /// Maximum password length
    #[arg(long, default_value = "100")]
    pub max_length: usize,

    /// Strip diacritics from words
    #[arg(long, alias = "generalize")]
    pub normalize: bool,

    /// How shorthand word slots are cased
    #[arg(long, value_enum, default_value = "as-is")]
    pub pattern_mode: PatternMode,

    /// Wordlist appended verbatim after the generated candidates
    #[arg(long, value_name = "FILE")]
    pub external_wordlist: Option<PathBuf>,
}

/// Arguments for generating from a configuration file
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    /// Configuration file (JSON)
    #[arg(value_name = "CONFIG_FILE", default_value = "config.json")]
    pub config_file: PathBuf,

    /// Override the configured output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for resetting a configuration file
#[derive(Parser, Debug, Clone)]
pub struct ResetConfigArgs {
    /// Configuration file (JSON)
    #[arg(value_name = "CONFIG_FILE", default_value = "config.json")]
    pub config_file: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

//! # Weaver
//!
//! Targeted wordlist generation for password testing.
//!
//! Patterns such as `{Word1}{number}{special}` are filled from word, number
//! and special-character pools. Candidates are then filtered by length and
//! by conflict groups of values that must not appear together.
//!
//! ## Features
//!
//! - Placeholder patterns with case modes and wildcard words
//! - Lazy Cartesian product with word uniqueness per candidate
//! - Pluggable candidate filters
//! - Unicode canonicalization and diacritic stripping
//! - JSON configuration with personal data extraction

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod generate;
pub mod normalize;
pub mod output;
pub mod pattern;
pub mod personal;
pub mod wordlist;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Compact pattern notation.
//!
//! `--patterns "Wns;ww"` is shorthand for placeholder patterns: `w` is a word
//! slot, `n` a number and `s` a special, case-insensitively. A word slot is
//! numbered by its character position, so `"Wns;ww"` with the default mode
//! becomes `{word0}{number}{special}` and `{word0}{word1}`. Entries that
//! already contain `{` are taken verbatim.

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::lists::parse_semicolon_list;

/// How word slots are cased.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternMode {
    /// Lowercase words only
    #[default]
    AsIs,
    /// Lowercase and capitalized words
    Cap,
    /// Lowercase, capitalized and uppercase words
    Any,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Word(usize),
    Literal(&'static str),
}

/// Compile one compact entry into placeholder patterns.
///
/// `cap` mode yields one pattern per lower/capitalized combination of the
/// word slots. Unsupported letters are skipped with a warning.
pub fn compile_pattern(entry: &str, mode: PatternMode) -> Vec<String> {
    if entry.contains('{') {
        return vec![entry.to_string()];
    }

    let slots: Vec<Slot> = entry
        .chars()
        .enumerate()
        .filter_map(|(i, ch)| match ch.to_ascii_lowercase() {
            'w' => Some(Slot::Word(i)),
            'n' => Some(Slot::Literal("{number}")),
            's' => Some(Slot::Literal("{special}")),
            _ => {
                warn!("Unsupported pattern character: {ch}");
                None
            }
        })
        .collect();

    if slots.is_empty() {
        warn!("Pattern {entry:?} has no usable slots");
        return Vec::new();
    }

    let mut patterns = vec![String::new()];
    for slot in slots {
        match slot {
            Slot::Literal(text) => patterns.iter_mut().for_each(|p| p.push_str(text)),
            Slot::Word(i) => match mode {
                PatternMode::AsIs => patterns
                    .iter_mut()
                    .for_each(|p| p.push_str(&format!("{{word{i}}}"))),
                PatternMode::Any => patterns
                    .iter_mut()
                    .for_each(|p| p.push_str(&format!("{{word{i}*}}"))),
                PatternMode::Cap => {
                    patterns = patterns
                        .into_iter()
                        .flat_map(|p| {
                            [format!("{p}{{word{i}}}"), format!("{p}{{Word{i}}}")]
                        })
                        .collect();
                }
            },
        }
    }
    patterns
}

/// Compile a `;`-separated list of compact entries, dropping repeats.
pub fn parse_patterns(value: &str, mode: PatternMode) -> Vec<String> {
    let mut patterns: Vec<String> = Vec::new();
    for entry in parse_semicolon_list(value) {
        for pattern in compile_pattern(&entry, mode) {
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
    }
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_is_mode() {
        assert_eq!(
            compile_pattern("Wns", PatternMode::AsIs),
            vec!["{word0}{number}{special}"]
        );
        assert_eq!(compile_pattern("ww", PatternMode::AsIs), vec!["{word0}{word1}"]);
    }

    #[test]
    fn test_any_mode() {
        assert_eq!(compile_pattern("WN", PatternMode::Any), vec!["{word0*}{number}"]);
    }

    #[test]
    fn test_cap_mode_expands() {
        assert_eq!(
            compile_pattern("wnw", PatternMode::Cap),
            vec![
                "{word0}{number}{word2}",
                "{word0}{number}{Word2}",
                "{Word0}{number}{word2}",
                "{Word0}{number}{Word2}",
            ]
        );
    }

    #[test]
    fn test_unsupported_characters_skipped() {
        assert_eq!(compile_pattern("wxn", PatternMode::AsIs), vec!["{word0}{number}"]);
        assert!(compile_pattern("xyz", PatternMode::AsIs).is_empty());
    }

    #[test]
    fn test_verbatim_templates() {
        assert_eq!(
            parse_patterns("{Word1}-{number};Ws", PatternMode::Any),
            vec!["{Word1}-{number}", "{word0*}{special}"]
        );
    }

    #[test]
    fn test_parse_patterns_dedups() {
        assert_eq!(
            parse_patterns("Wn; wn ;;ns", PatternMode::AsIs),
            vec!["{word0}{number}", "{number}{special}"]
        );
    }
}

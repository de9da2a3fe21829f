//! Placeholder parsing for pattern strings.
//!
//! A pattern is arbitrary literal text interleaved with brace-delimited
//! placeholders. Recognized names are:
//!
//! - `word`, optionally followed by digits, in any letter case: `{word1}`,
//!   `{WORD2}`, `{Word3}`. A trailing `*` (`{word4*}`) requests every case
//!   variant of the value.
//! - `number`
//! - `special`
//!
//! Anything else between braces, including `{}`, stays literal text. An
//! unterminated `{` never produces a placeholder.
//!
//! # Examples
//!
//! ```
//! use weaver::pattern::{CaseMode, PlaceholderKind, parse_placeholders};
//!
//! let tokens = parse_placeholders("{Word1}-{number}{special}");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].kind, PlaceholderKind::Word);
//! assert_eq!(tokens[0].case, CaseMode::Capitalize);
//! assert_eq!(tokens[1].kind, PlaceholderKind::Number);
//! assert_eq!(tokens[2].kind, PlaceholderKind::Special);
//! ```

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::pattern::case::{CaseMode, is_all_uppercase};

/// Shortest-match brace scanner.
static BRACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.*?)\}").expect("Brace pattern should be valid"));

/// `word` plus optional digits, any letter case.
static WORD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^word\d*$").expect("Word pattern should be valid"));

/// The value pool a placeholder draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    Word,
    Number,
    Special,
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderKind::Word => write!(f, "word"),
            PlaceholderKind::Number => write!(f, "number"),
            PlaceholderKind::Special => write!(f, "special"),
        }
    }
}

/// A typed placeholder found in a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// The text between the braces, including any trailing `*`.
    pub name: String,

    /// Which pool the placeholder draws from.
    pub kind: PlaceholderKind,

    /// Case transform applied to the drawn value.
    pub case: CaseMode,

    /// Byte range of `{name}` in the pattern.
    pub span: Range<usize>,
}

impl Placeholder {
    /// The literal placeholder text, braces included.
    pub fn text(&self) -> String {
        format!("{{{}}}", self.name)
    }

    /// Whether this placeholder draws from the word pool.
    pub fn is_word(&self) -> bool {
        self.kind == PlaceholderKind::Word
    }

    /// Render a pool value for this placeholder.
    pub fn render(&self, value: &str) -> String {
        self.case.apply(value)
    }
}

/// Classify a placeholder name.
///
/// Precedence is fixed: word, then number, then special. Returns `None` for
/// names that are not placeholders.
pub fn classify(name: &str) -> Option<(PlaceholderKind, CaseMode)> {
    let base = name.trim_end_matches('*');
    let wildcard = name.ends_with('*');

    if WORD_NAME.is_match(base) {
        let case = if wildcard {
            CaseMode::Any
        } else if is_all_uppercase(base) {
            CaseMode::Upper
        } else if base.chars().next().is_some_and(char::is_uppercase) {
            CaseMode::Capitalize
        } else {
            CaseMode::Lower
        };
        Some((PlaceholderKind::Word, case))
    } else if base == "number" {
        Some((PlaceholderKind::Number, CaseMode::Verbatim))
    } else if base == "special" {
        Some((PlaceholderKind::Special, CaseMode::Verbatim))
    } else {
        None
    }
}

/// Parse the placeholders of a pattern in left-to-right order.
///
/// Never fails: malformed or unknown placeholders are simply not returned.
pub fn parse_placeholders(pattern: &str) -> Vec<Placeholder> {
    BRACES
        .captures_iter(pattern)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str();
            let (kind, case) = classify(name)?;
            Some(Placeholder {
                name: name.to_string(),
                kind,
                case,
                span: whole.range(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(pattern: &str) -> Vec<(String, PlaceholderKind, CaseMode)> {
        parse_placeholders(pattern)
            .into_iter()
            .map(|p| (p.name, p.kind, p.case))
            .collect()
    }

    #[test]
    fn test_word_case_modes() {
        assert_eq!(
            summary("{word1}{WORD2}{Word3}{word4*}"),
            vec![
                ("word1".to_string(), PlaceholderKind::Word, CaseMode::Lower),
                ("WORD2".to_string(), PlaceholderKind::Word, CaseMode::Upper),
                ("Word3".to_string(), PlaceholderKind::Word, CaseMode::Capitalize),
                ("word4*".to_string(), PlaceholderKind::Word, CaseMode::Any),
            ]
        );
    }

    #[test]
    fn test_number_and_special() {
        assert_eq!(
            summary("{number}{special}"),
            vec![
                ("number".to_string(), PlaceholderKind::Number, CaseMode::Verbatim),
                ("special".to_string(), PlaceholderKind::Special, CaseMode::Verbatim),
            ]
        );
    }

    #[test]
    fn test_mixed_pattern_order() {
        let kinds: Vec<_> = parse_placeholders("{Word1}{number}{special}{word2*}{WORD3}")
            .into_iter()
            .map(|p| (p.kind, p.case))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (PlaceholderKind::Word, CaseMode::Capitalize),
                (PlaceholderKind::Number, CaseMode::Verbatim),
                (PlaceholderKind::Special, CaseMode::Verbatim),
                (PlaceholderKind::Word, CaseMode::Any),
                (PlaceholderKind::Word, CaseMode::Upper),
            ]
        );
    }

    #[test]
    fn test_malformed_patterns_are_literal() {
        assert!(parse_placeholders("static_password_123").is_empty());
        assert!(parse_placeholders("{word1").is_empty());
        assert!(parse_placeholders("{}").is_empty());
        assert!(parse_placeholders("{invalid}").is_empty());
        assert!(parse_placeholders("{Number}").is_empty());
        assert!(parse_placeholders("{words}").is_empty());
    }

    #[test]
    fn test_shortest_match_skips_nested_name() {
        // "{a{word1}" is one non-token match, so only the second placeholder counts.
        let tokens = parse_placeholders("{a{word1}{word2}");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].name, "word2");
        assert_eq!(tokens[0].span, 9..16);
    }

    #[test]
    fn test_spans_and_text() {
        let tokens = parse_placeholders("pre{word1}mid{number}");
        assert_eq!(tokens[0].span, 3..10);
        assert_eq!(tokens[0].text(), "{word1}");
        assert_eq!(tokens[1].span, 13..21);
        assert_eq!(tokens[1].text(), "{number}");
    }

    #[test]
    fn test_repeated_placeholders() {
        let pattern = "{word1}".repeat(100);
        assert_eq!(parse_placeholders(&pattern).len(), 100);
    }

    #[test]
    fn test_classify_precedence() {
        assert_eq!(
            classify("word"),
            Some((PlaceholderKind::Word, CaseMode::Lower))
        );
        assert_eq!(
            classify("WoRd7**"),
            Some((PlaceholderKind::Word, CaseMode::Any))
        );
        assert_eq!(
            classify("number*"),
            Some((PlaceholderKind::Number, CaseMode::Verbatim))
        );
        assert_eq!(classify("word_1"), None);
    }
}

//! Candidate generation from patterns and pools.
//!
//! Every pattern is parsed into placeholders, each placeholder gets its
//! resolved pool, and the Cartesian product of those pools is walked lazily.
//! A combination that puts the same word value into two word placeholders is
//! skipped; every other combination is rendered into one candidate.
//!
//! # Examples
//!
//! ```
//! use weaver::generate::{Generator, Pools};
//!
//! let pools = Pools::default()
//!     .with_words(["admin", "user"])
//!     .with_numbers(["123", "456"]);
//! let generator = Generator::new(&pools);
//!
//! let candidates = generator.generate(["{word1}{number}"]);
//! assert_eq!(candidates.len(), 4);
//! assert!(candidates.contains("admin123"));
//! assert!(candidates.contains("user456"));
//! ```

use ahash::AHashSet;
use log::{debug, warn};

use crate::generate::pool::{Pools, resolve_pools};
use crate::generate::product::IndexProduct;
use crate::normalize::into_canonical;
use crate::pattern::{Placeholder, parse_placeholders};

/// Deduplicated, unordered collection of candidates.
pub type CandidateSet = AHashSet<String>;

/// Generates candidates from patterns against a fixed set of pools.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    pools: &'a Pools,
}

impl<'a> Generator<'a> {
    pub fn new(pools: &'a Pools) -> Self {
        Generator { pools }
    }

    /// Lazily enumerate the candidates of one pattern.
    ///
    /// The iterator may yield the same candidate more than once; dropping it
    /// early needs no cleanup.
    pub fn candidates<'p>(&self, pattern: &'p str) -> PatternCandidates<'p> {
        let placeholders = parse_placeholders(pattern);
        let pools = resolve_pools(&placeholders, self.pools);
        let product = IndexProduct::new(pools.iter().map(Vec::len).collect());
        match product.total() {
            Some(total) => debug!(
                "pattern {:?}: {} placeholders, {} combinations",
                pattern,
                placeholders.len(),
                total
            ),
            None => warn!(
                "pattern {:?}: combination count overflows usize",
                pattern
            ),
        }

        PatternCandidates {
            pattern,
            placeholders,
            pools,
            product,
        }
    }

    /// Generate the deduplicated candidates of every pattern.
    pub fn generate<I, S>(&self, patterns: I) -> CandidateSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = CandidateSet::new();
        for pattern in patterns {
            let before = results.len();
            results.extend(self.candidates(pattern.as_ref()));
            debug!(
                "pattern {:?} added {} candidates",
                pattern.as_ref(),
                results.len() - before
            );
        }
        results
    }
}

/// Generate the deduplicated candidates of every pattern against `pools`.
pub fn generate_passwords<I, S>(patterns: I, pools: &Pools) -> CandidateSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Generator::new(pools).generate(patterns)
}

/// Lazy candidate stream for a single pattern.
#[derive(Debug, Clone)]
pub struct PatternCandidates<'p> {
    pattern: &'p str,
    placeholders: Vec<Placeholder>,
    pools: Vec<Vec<String>>,
    product: IndexProduct,
}

impl Iterator for PatternCandidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let indices = self.product.next()?;
            let values: Vec<&str> = indices
                .iter()
                .zip(&self.pools)
                .map(|(&i, pool)| pool[i].as_str())
                .collect();

            if has_repeated_word(&self.placeholders, &values) {
                continue;
            }
            return Some(render(self.pattern, &self.placeholders, &values));
        }
    }
}

/// True when two word placeholders received the same pool value.
pub fn has_repeated_word(placeholders: &[Placeholder], values: &[&str]) -> bool {
    let words: Vec<&str> = placeholders
        .iter()
        .zip(values)
        .filter(|(p, _)| p.is_word())
        .map(|(_, v)| *v)
        .collect();

    words
        .iter()
        .enumerate()
        .any(|(i, w)| words[i + 1..].contains(w))
}

/// Substitute values into the pattern.
///
/// Placeholders are applied in scan order. Each one replaces the next
/// remaining occurrence of its own `{name}` text in the working string, so
/// literal text and earlier substitutions can be matched as well. The result
/// is in canonical (NFC) form.
pub fn render(pattern: &str, placeholders: &[Placeholder], values: &[&str]) -> String {
    let mut out = pattern.to_string();
    for (placeholder, value) in placeholders.iter().zip(values) {
        out = out.replacen(&placeholder.text(), &placeholder.render(value), 1);
    }
    into_canonical(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> CandidateSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_word_cases() {
        let pattern = "{word1}{WORD2}{Word3}{word4*}";
        let placeholders = parse_placeholders(pattern);
        let rendered = render(pattern, &placeholders, &["ADMIN", "password", "ROOT", "user"]);
        assert_eq!(rendered, "adminPASSWORDRootuser");
    }

    #[test]
    fn test_render_mixed_kinds() {
        let pattern = "{Word1}{number}{special}";
        let placeholders = parse_placeholders(pattern);
        assert_eq!(
            render(pattern, &placeholders, &["admin", "123", "!"]),
            "Admin123!"
        );
    }

    #[test]
    fn test_render_keeps_literals() {
        let pattern = "{x}{word1}-{}-{number";
        let placeholders = parse_placeholders(pattern);
        assert_eq!(render(pattern, &placeholders, &["Bob"]), "{x}bob-{}-{number");
    }

    #[test]
    fn test_render_identical_placeholders_in_order() {
        let pattern = "{number}.{number}";
        let placeholders = parse_placeholders(pattern);
        assert_eq!(render(pattern, &placeholders, &["1", "2"]), "1.2");
    }

    #[test]
    fn test_render_value_with_braces_is_substituted_again() {
        let pattern = "{word1}{number}";
        let placeholders = parse_placeholders(pattern);
        assert_eq!(
            render(pattern, &placeholders, &["{number}", "7"]),
            "7{number}"
        );
    }

    #[test]
    fn test_render_first_occurrence_inside_literal() {
        // "{a{word1}" is literal, but its "{word1}" is the first occurrence.
        let pools = Pools::default().with_words(["x"]);
        let result = generate_passwords(["{a{word1}{word1}"], &pools);
        assert_eq!(result, set(&["{ax{word1}"]));
    }

    #[test]
    fn test_render_value_containing_placeholder() {
        let pools = Pools::default()
            .with_words(["{number}"])
            .with_numbers(["7"]);
        let result = generate_passwords(["{word1}{number}"], &pools);
        assert_eq!(result, set(&["7{number}"]));
    }

    #[test]
    fn test_zero_placeholders_yield_pattern() {
        let pools = Pools::default().with_words(["admin"]);
        let result = generate_passwords(["static_password_123"], &pools);
        assert_eq!(result, set(&["static_password_123"]));
    }

    #[test]
    fn test_simple_pattern() {
        let pools = Pools::default()
            .with_words(["admin", "user"])
            .with_numbers(["123", "456"])
            .with_specials(["!", "@"]);
        let result = generate_passwords(["{word1}{number}"], &pools);
        assert_eq!(result, set(&["admin123", "admin456", "user123", "user456"]));
    }

    #[test]
    fn test_capitalized_with_number_and_special() {
        let pools = Pools::default()
            .with_words(["admin"])
            .with_numbers(["123"])
            .with_specials(["!"]);
        let result = generate_passwords(["{Word1}{number}{special}"], &pools);
        assert_eq!(result, set(&["Admin123!"]));
    }

    #[test]
    fn test_wildcard_word() {
        let pools = Pools::default().with_words(["Admin"]);
        let result = generate_passwords(["{word1*}"], &pools);
        assert_eq!(result, set(&["admin", "Admin", "ADMIN"]));
    }

    #[test]
    fn test_repeated_words_are_skipped() {
        let pools = Pools::default().with_words(["admin", "user"]);
        let result = generate_passwords(["{word1}{word2}"], &pools);
        assert_eq!(result, set(&["adminuser", "useradmin"]));
    }

    #[test]
    fn test_three_word_slots() {
        let pools = Pools::default().with_words(["a", "b", "c", "d"]);
        let result = generate_passwords(["{word1}{word2}{word3}"], &pools);
        assert!(result.contains("abc"));
        assert!(result.contains("bcd"));
        assert!(!result.contains("aaa"));
        assert!(!result.contains("aba"));
        assert_eq!(result.len(), 4 * 3 * 2);
    }

    #[test]
    fn test_uniqueness_ignores_case_rendering() {
        // Same pool value under different case modes is still a repeat.
        let pools = Pools::default().with_words(["admin", "user"]);
        let result = generate_passwords(["{word1}{WORD2}"], &pools);
        assert!(!result.contains("adminADMIN"));
        assert!(result.contains("adminUSER"));
    }

    #[test]
    fn test_wildcard_and_plain_word_mix() {
        let pools = Pools::default()
            .with_words(["admin", "user"])
            .with_numbers(["123"])
            .with_specials(["!"]);
        let result = generate_passwords(["{Word1}{number}{special}", "{word1*}{word2}"], &pools);
        for expected in ["Admin123!", "User123!", "adminuser", "Adminuser", "ADMINuser"] {
            assert!(result.contains(expected), "missing {expected}");
        }
        assert!(!result.contains("adminadmin"));
    }

    #[test]
    fn test_empty_pools_yield_nothing() {
        let pools = Pools::default()
            .with_numbers(["123"])
            .with_specials(["!"]);
        assert!(generate_passwords(["{word1}"], &pools).is_empty());

        let pools = Pools::default().with_words(["admin"]).with_specials(["!"]);
        assert!(generate_passwords(["{number}"], &pools).is_empty());
        assert!(generate_passwords(["{word1}{number}"], &pools).is_empty());

        let pools = Pools::default().with_words(["admin"]).with_numbers(["123"]);
        assert!(generate_passwords(["{special}"], &pools).is_empty());
    }

    #[test]
    fn test_empty_pattern_list() {
        let pools = Pools::default().with_words(["admin"]);
        assert!(generate_passwords(Vec::<String>::new(), &pools).is_empty());
    }

    #[test]
    fn test_static_text_around_placeholders() {
        let pools = Pools::default()
            .with_words(["admin"])
            .with_numbers(["123"]);
        let result = generate_passwords(["prefix_{word1}_suffix", "test{number}end"], &pools);
        assert!(result.contains("prefix_admin_suffix"));
        assert!(result.contains("test123end"));
    }

    #[test]
    fn test_case_modes_across_patterns() {
        let pools = Pools::default().with_words(["TeSt"]);
        let result = generate_passwords(["{word1}", "{WORD1}", "{Word1}"], &pools);
        assert_eq!(result, set(&["test", "TEST", "Test"]));
    }

    #[test]
    fn test_whitespace_values_are_kept() {
        let pools = Pools::default().with_words(["hello world", "test space"]);
        let result = generate_passwords(["{word1}"], &pools);
        assert_eq!(result, set(&["hello world", "test space"]));
    }

    #[test]
    fn test_duplicate_pool_values_do_not_double_count() {
        let pools = Pools::default().with_words(["admin", "admin", "user"]);
        let result = generate_passwords(["{word1}{word2}"], &pools);
        assert_eq!(result, set(&["adminuser", "useradmin"]));
    }

    #[test]
    fn test_composed_and_decomposed_collapse() {
        let pools = Pools::default().with_words(["caf\u{e9}"]);
        let result = generate_passwords(["{word1}", "cafe\u{301}"], &pools);
        assert_eq!(result, set(&["caf\u{e9}"]));
    }

    #[test]
    fn test_deterministic() {
        let pools = Pools::default()
            .with_words(["alpha", "beta", "gamma"])
            .with_numbers(["1", "22"])
            .with_specials(["!", "#"]);
        let patterns = ["{word1*}{number}{special}", "{Word1}{word2}"];
        assert_eq!(
            generate_passwords(patterns, &pools),
            generate_passwords(patterns, &pools)
        );
    }

    #[test]
    fn test_lazy_stream_can_stop_early() {
        let words: Vec<String> = (0..100).map(|i| format!("w{i}")).collect();
        let pools = Pools::default().with_words(&words);
        let generator = Generator::new(&pools);
        let first: Vec<String> = generator
            .candidates("{word1}{word2}{word3}{word4}")
            .take(5)
            .collect();
        assert_eq!(first.len(), 5);
        assert_eq!(first[0], "w0w1w2w3");
    }

    #[test]
    fn test_large_combination() {
        let pools = Pools::new(
            (0..10).map(|i| format!("word{i}")),
            (0..10).map(|i| i.to_string()),
            (0..10u8).map(|i| char::from(33 + i).to_string()),
        );
        let result = generate_passwords(["{word1}{number}{special}"], &pools);
        assert!(result.len() <= 1000);
        assert!(!result.is_empty());
    }
}

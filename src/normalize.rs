//! Unicode normalization for word pools and candidates.
//!
//! NFC is the canonical form for every stored or compared string, so that a
//! composed `é` and a decomposed `e\u{301}` never produce two candidates.

use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;
use unicode_normalization::{UnicodeNormalization, is_nfc};

/// Nonspacing marks (general category Mn). Spacing vowel signs stay.
static NONSPACING_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Mn}+").expect("Mark pattern should be valid"));

/// Canonical (NFC) form of a string.
pub fn canonical(s: &str) -> String {
    s.nfc().collect()
}

/// Canonical form of an owned string, reusing it when already NFC.
pub fn into_canonical(s: String) -> String {
    if is_nfc(&s) { s } else { canonical(&s) }
}

/// Strip diacritics: NFD decomposition, nonspacing marks dropped, NFC again.
///
/// ```
/// use weaver::normalize::generalize;
///
/// assert_eq!(generalize("résumé"), "resume");
/// assert_eq!(generalize("PASSWORD"), "PASSWORD");
/// ```
pub fn generalize(s: &str) -> String {
    let decomposed: String = s.nfd().collect();
    let stripped = NONSPACING_MARKS.replace_all(&decomposed, "");
    stripped.chars().nfc().collect()
}

/// Generalize every word of a pool, keeping the first occurrence of each result.
pub fn generalize_pool<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut seen = AHashSet::with_capacity(words.len());
    words
        .iter()
        .map(|w| generalize(w.as_ref()))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generalize_strips_diacritics() {
        assert_eq!(generalize("résumé"), "resume");
        assert_eq!(generalize("naïve"), "naive");
        assert_eq!(generalize("café"), "cafe");
        assert_eq!(generalize("admin"), "admin");
    }

    #[test]
    fn test_generalize_edge_cases() {
        assert_eq!(generalize(""), "");
        assert_eq!(generalize("\u{301}\u{301}\u{301}"), "");
        assert_eq!(generalize("αβγ123"), "αβγ123");
    }

    #[test]
    fn test_generalize_keeps_spacing_marks() {
        // Devanagari vowel sign I (U+093F) is a spacing mark.
        assert_eq!(generalize("कि"), "कि");
        // Anusvara (U+0902) is nonspacing and is dropped.
        assert_eq!(generalize("\u{915}\u{902}"), "\u{915}");
        // Enclosing keycap (U+20E3) is not nonspacing either.
        assert_eq!(generalize("1\u{20E3}"), "1\u{20E3}");
    }

    #[test]
    fn test_canonical_composes() {
        assert_eq!(canonical("Am\u{0065}\u{0301}lie"), "Am\u{00e9}lie");
        assert_eq!(canonical("Am\u{00e9}lie"), "Am\u{00e9}lie");
    }

    #[test]
    fn test_into_canonical() {
        assert_eq!(into_canonical("plain".to_string()), "plain");
        assert_eq!(into_canonical("e\u{301}".to_string()), "\u{e9}");
    }

    #[test]
    fn test_generalize_pool_dedups_in_order() {
        let words = ["café", "cafe", "résumé", "Café"];
        assert_eq!(generalize_pool(&words), vec!["cafe", "resume", "Cafe"]);
    }
}

//! Value pools and per-placeholder pool resolution.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::normalize::canonical;
use crate::pattern::case::capitalize;
use crate::pattern::{CaseMode, Placeholder, PlaceholderKind};

/// The three value pools a pattern draws from.
///
/// Values are stored in canonical (NFC) form. Duplicates are allowed and
/// collapse during resolution.
///
/// # Examples
///
/// ```
/// use weaver::generate::Pools;
///
/// let pools = Pools::default()
///     .with_words(["admin", "user"])
///     .with_numbers(["123"])
///     .with_specials(["!"]);
///
/// assert_eq!(pools.words, vec!["admin", "user"]);
/// assert_eq!(pools.numbers, vec!["123"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pools {
    #[serde(default)]
    pub words: Vec<String>,
    #[serde(default)]
    pub numbers: Vec<String>,
    #[serde(default)]
    pub specials: Vec<String>,
}

fn canonical_list<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values.into_iter().map(|v| canonical(v.as_ref())).collect()
}

impl Pools {
    /// Create pools from the three value lists.
    pub fn new<W, N, S>(words: W, numbers: N, specials: S) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Pools {
            words: canonical_list(words),
            numbers: canonical_list(numbers),
            specials: canonical_list(specials),
        }
    }

    /// Replace the word pool.
    pub fn with_words<I>(mut self, words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.words = canonical_list(words);
        self
    }

    /// Replace the number pool.
    pub fn with_numbers<I>(mut self, numbers: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.numbers = canonical_list(numbers);
        self
    }

    /// Replace the special pool.
    pub fn with_specials<I>(mut self, specials: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.specials = canonical_list(specials);
        self
    }

    /// The base pool for a placeholder kind.
    pub fn get(&self, kind: PlaceholderKind) -> &[String] {
        match kind {
            PlaceholderKind::Word => &self.words,
            PlaceholderKind::Number => &self.numbers,
            PlaceholderKind::Special => &self.specials,
        }
    }
}

/// Drop repeated values, keeping first occurrences in order.
fn dedup_in_order<I: IntoIterator<Item = String>>(values: I) -> Vec<String> {
    let mut seen = AHashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

/// Lower, capitalized and upper variants of every word, deduplicated.
pub fn case_variants(words: &[String]) -> Vec<String> {
    dedup_in_order(
        words
            .iter()
            .flat_map(|w| [w.to_lowercase(), capitalize(w), w.to_uppercase()]),
    )
}

/// Resolve the value pool for one placeholder.
///
/// Wildcard word placeholders get the case-variant pool. Every other
/// placeholder gets its base pool; the case transform happens at render time.
pub fn resolve_pool(placeholder: &Placeholder, pools: &Pools) -> Vec<String> {
    let base = pools.get(placeholder.kind);
    if placeholder.kind == PlaceholderKind::Word && placeholder.case == CaseMode::Any {
        case_variants(base)
    } else {
        dedup_in_order(base.iter().cloned())
    }
}

/// Resolve the value pools for every placeholder of a pattern, in order.
pub fn resolve_pools(placeholders: &[Placeholder], pools: &Pools) -> Vec<Vec<String>> {
    placeholders
        .iter()
        .map(|p| resolve_pool(p, pools))
        .collect()
}

//! Length bound filter.

use crate::filter::CandidateFilter;

/// Accepts candidates whose length, in chars, lies in `[min_len, max_len]`.
///
/// When `min_len > max_len` nothing is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthFilter {
    min_len: usize,
    max_len: usize,
}

impl LengthFilter {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        LengthFilter { min_len, max_len }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl CandidateFilter for LengthFilter {
    fn accepts(&self, candidate: &str) -> bool {
        let len = candidate.chars().count();
        self.min_len <= len && len <= self.max_len
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kept(filter: &LengthFilter, candidates: &[&str]) -> Vec<String> {
        candidates
            .iter()
            .filter(|c| filter.accepts(c))
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let candidates = ["a", "ab", "abc", "abcd", "abcde"];
        assert_eq!(
            kept(&LengthFilter::new(3, 100), &candidates),
            vec!["abc", "abcd", "abcde"]
        );
        assert_eq!(kept(&LengthFilter::new(1, 3), &candidates), vec!["a", "ab", "abc"]);
        assert_eq!(
            kept(&LengthFilter::new(2, 4), &candidates),
            vec!["ab", "abc", "abcd"]
        );
    }

    #[test]
    fn test_exact_length() {
        let candidates = ["a", "ab", "abc", "abcdefghijklmnopqrstuvwxyz"];
        assert_eq!(kept(&LengthFilter::new(2, 2), &candidates), vec!["ab"]);
        assert_eq!(kept(&LengthFilter::new(0, 100), &candidates).len(), 4);
    }

    #[test]
    fn test_inverted_bounds_reject_all() {
        assert!(!LengthFilter::new(10, 5).accepts("test"));
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let filter = LengthFilter::new(4, 4);
        assert!(filter.accepts("café"));
        assert!(filter.accepts("αβγδ"));
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LengthFilter::new(1, 2).name(), "length");
    }
}

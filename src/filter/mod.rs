//! Candidate filtering.
//!
//! Filters are pure predicates over a candidate string. They are combined
//! in a [`CandidatePipeline`], which keeps the candidates every filter
//! accepts, in input order.
//!
//! # Examples
//!
//! ```
//! use weaver::filter::{CandidatePipeline, ConflictGroups};
//!
//! let groups = ConflictGroups::default().with_word_groups(vec![vec!["admin", "user"]]);
//! let pipeline = CandidatePipeline::standard(4, 12, &groups);
//!
//! let kept = pipeline.filter(["adminuser", "admin1", "usr", "user2024"]);
//! assert_eq!(kept, vec!["admin1", "user2024"]);
//! ```

pub mod conflict;
pub mod length;

pub use conflict::{ConflictFilter, ConflictGroups};
pub use length::LengthFilter;

/// Trait for predicates that decide whether a candidate survives.
pub trait CandidateFilter: Send + Sync {
    /// Whether the candidate is kept.
    fn accepts(&self, candidate: &str) -> bool;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// An ordered chain of filters. A candidate survives if every filter accepts it.
#[derive(Default)]
pub struct CandidatePipeline {
    filters: Vec<Box<dyn CandidateFilter>>,
}

impl CandidatePipeline {
    pub fn new() -> Self {
        CandidatePipeline {
            filters: Vec::new(),
        }
    }

    /// Length bounds first, then the conflict groups when any can reject.
    pub fn standard(min_len: usize, max_len: usize, groups: &ConflictGroups) -> Self {
        let pipeline =
            CandidatePipeline::new().add_filter(Box::new(LengthFilter::new(min_len, max_len)));
        let conflict = ConflictFilter::new(groups);
        if conflict.is_inert() {
            pipeline
        } else {
            pipeline.add_filter(Box::new(conflict))
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn CandidateFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Names of the filters, in order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn accepts(&self, candidate: &str) -> bool {
        self.filters.iter().all(|f| f.accepts(candidate))
    }

    /// Keep the accepted candidates, preserving input order.
    pub fn filter<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String> + AsRef<str>,
    {
        candidates
            .into_iter()
            .filter(|c| self.accepts(c.as_ref()))
            .map(Into::into)
            .collect()
    }
}

/// Apply the length bounds and conflict groups to `candidates`.
pub fn filter_passwords<I, S>(
    candidates: I,
    min_len: usize,
    max_len: usize,
    groups: &ConflictGroups,
) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String> + AsRef<str>,
{
    CandidatePipeline::standard(min_len, max_len, groups).filter(candidates)
}

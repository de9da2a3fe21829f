//! Mutual-exclusion group filter.
//!
//! A conflict group lists values of one kind that must not appear together.
//! A candidate containing two or more distinct members of any group is
//! rejected. Word groups match case-insensitively; number and special groups
//! match exactly. Groups with fewer than two members never reject anything.
//!
//! # Examples
//!
//! ```
//! use weaver::filter::{CandidateFilter, ConflictFilter, ConflictGroups};
//!
//! let groups = ConflictGroups::default().with_word_groups(vec![vec!["admin", "user"]]);
//! let filter = ConflictFilter::new(&groups);
//!
//! assert!(!filter.accepts("AdminUser"));
//! assert!(filter.accepts("admin123"));
//! ```

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::filter::CandidateFilter;
use crate::pattern::PlaceholderKind;

/// Conflict groups for each placeholder kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictGroups {
    #[serde(default)]
    pub words: Vec<Vec<String>>,
    #[serde(default)]
    pub numbers: Vec<Vec<String>>,
    #[serde(default)]
    pub specials: Vec<Vec<String>>,
}

fn to_groups<G, S>(groups: G) -> Vec<Vec<String>>
where
    G: IntoIterator,
    G::Item: IntoIterator<Item = S>,
    S: Into<String>,
{
    groups
        .into_iter()
        .map(|g| g.into_iter().map(Into::into).collect())
        .collect()
}

impl ConflictGroups {
    pub fn with_word_groups<G, S>(mut self, groups: G) -> Self
    where
        G: IntoIterator,
        G::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = to_groups(groups);
        self
    }

    pub fn with_number_groups<G, S>(mut self, groups: G) -> Self
    where
        G: IntoIterator,
        G::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.numbers = to_groups(groups);
        self
    }

    pub fn with_special_groups<G, S>(mut self, groups: G) -> Self
    where
        G: IntoIterator,
        G::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specials = to_groups(groups);
        self
    }

    /// Groups of one kind.
    pub fn get(&self, kind: PlaceholderKind) -> &[Vec<String>] {
        match kind {
            PlaceholderKind::Word => &self.words,
            PlaceholderKind::Number => &self.numbers,
            PlaceholderKind::Special => &self.specials,
        }
    }

    /// Number of groups that can actually reject a candidate.
    pub fn active_rules(&self) -> usize {
        [&self.words, &self.numbers, &self.specials]
            .iter()
            .flat_map(|groups| groups.iter())
            .filter(|g| g.len() > 1)
            .count()
    }

    /// Total number of groups across all kinds.
    pub fn len(&self) -> usize {
        self.words.len() + self.numbers.len() + self.specials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Prepared groups of one kind: distinct members, size >= 2 only.
#[derive(Clone, Debug, Default)]
struct GroupSet {
    groups: Vec<Vec<String>>,
    case_insensitive: bool,
}

impl GroupSet {
    fn new(groups: &[Vec<String>], case_insensitive: bool) -> Self {
        let groups = groups
            .iter()
            .map(|group| {
                let mut seen = AHashSet::new();
                group
                    .iter()
                    .map(|m| {
                        if case_insensitive {
                            m.to_lowercase()
                        } else {
                            m.clone()
                        }
                    })
                    .filter(|m| seen.insert(m.clone()))
                    .collect::<Vec<_>>()
            })
            .filter(|group| group.len() > 1)
            .collect();

        GroupSet {
            groups,
            case_insensitive,
        }
    }

    /// True if any group has two or more members inside `candidate`.
    fn conflicts(&self, candidate: &str) -> bool {
        if self.groups.is_empty() {
            return false;
        }
        if self.case_insensitive {
            self.any_group_hits(&candidate.to_lowercase())
        } else {
            self.any_group_hits(candidate)
        }
    }

    fn any_group_hits(&self, haystack: &str) -> bool {
        self.groups.iter().any(|group| {
            group
                .iter()
                .filter(|member| haystack.contains(member.as_str()))
                .nth(1)
                .is_some()
        })
    }
}

/// Rejects candidates that combine members of a conflict group.
#[derive(Clone, Debug)]
pub struct ConflictFilter {
    words: GroupSet,
    numbers: GroupSet,
    specials: GroupSet,
}

impl ConflictFilter {
    pub fn new(groups: &ConflictGroups) -> Self {
        ConflictFilter {
            words: GroupSet::new(&groups.words, true),
            numbers: GroupSet::new(&groups.numbers, false),
            specials: GroupSet::new(&groups.specials, false),
        }
    }

    /// The kind whose groups reject `candidate`, checked word, number, special.
    pub fn conflicting_kind(&self, candidate: &str) -> Option<PlaceholderKind> {
        if self.words.conflicts(candidate) {
            return Some(PlaceholderKind::Word);
        }
        if self.numbers.conflicts(candidate) {
            return Some(PlaceholderKind::Number);
        }
        if self.specials.conflicts(candidate) {
            return Some(PlaceholderKind::Special);
        }
        None
    }

    /// Whether no group can reject anything.
    pub fn is_inert(&self) -> bool {
        [&self.words, &self.numbers, &self.specials]
            .iter()
            .all(|set| set.groups.is_empty())
    }
}

impl CandidateFilter for ConflictFilter {
    fn accepts(&self, candidate: &str) -> bool {
        self.conflicting_kind(candidate).is_none()
    }

    fn name(&self) -> &'static str {
        "conflict"
    }
}

//! End-to-end wordlist building: generate, then filter.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::filter::{CandidatePipeline, ConflictGroups};
use crate::generate::{Generator, Pools};

/// Everything needed to build a wordlist in memory.
///
/// # Examples
///
/// ```
/// use weaver::filter::ConflictGroups;
/// use weaver::generate::Pools;
/// use weaver::wordlist::WordlistRequest;
///
/// let request = WordlistRequest {
///     patterns: vec!["{word1}{word2}".to_string()],
///     pools: Pools::default().with_words(["admin", "user", "root"]),
///     groups: ConflictGroups::default().with_word_groups(vec![vec!["admin", "root"]]),
///     min_len: 1,
///     max_len: 100,
/// };
///
/// let wordlist = request.build();
/// assert_eq!(
///     wordlist.candidates,
///     vec!["adminuser", "rootuser", "useradmin", "userroot"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordlistRequest {
    pub patterns: Vec<String>,
    pub pools: Pools,
    pub groups: ConflictGroups,
    pub min_len: usize,
    pub max_len: usize,
}

/// The filtered, sorted result of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wordlist {
    /// Accepted candidates in sorted order.
    pub candidates: Vec<String>,

    /// Distinct candidates before filtering.
    pub generated: usize,
}

impl WordlistRequest {
    pub fn build(&self) -> Wordlist {
        let raw = Generator::new(&self.pools).generate(&self.patterns);
        let generated = raw.len();

        let pipeline = CandidatePipeline::standard(self.min_len, self.max_len, &self.groups);
        debug!("filters: {:?}", pipeline.filter_names());
        let mut candidates = pipeline.filter(raw);
        candidates.sort_unstable();

        info!(
            "Generated {} candidates, {} passed filters",
            generated,
            candidates.len()
        );
        Wordlist {
            candidates,
            generated,
        }
    }
}

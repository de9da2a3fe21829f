//! JSON configuration file.
//!
//! ```json
//! {
//!     "patterns": ["{Word1}{number}{special}", "{word1*}{word2}"],
//!     "words": ["acme", "admin"],
//!     "numbers": ["2024"],
//!     "specials": ["!", "#"],
//!     "word_groups": [["admin", "root"]],
//!     "personal_info": { "name": "Jane Doe", "birthdate": "1990-05-17" },
//!     "min_length": 8,
//!     "max_length": 16,
//!     "output_file": "wordlist.txt"
//! }
//! ```
//!
//! The nested layout is read as well: `word_patterns`, `common_words`,
//! `common_numbers`, `common_special_chars`, a `custom` section holding
//! `words`, `numbers` and `personal_info`, a flat
//! `excluded_word_combinations` list and the `all_cases` switch. Both
//! layouts may be mixed, and every field is optional.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, WeaverError};
use crate::filter::ConflictGroups;
use crate::generate::Pools;
use crate::normalize::generalize_pool;
use crate::personal::{extract_personal_data, split_personal};

fn default_min_length() -> usize {
    1
}

fn default_max_length() -> usize {
    100
}

fn default_output_file() -> PathBuf {
    PathBuf::from("wordlist.txt")
}

/// Subject-specific values kept apart from the shared lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomData {
    #[serde(default)]
    pub words: Vec<String>,

    #[serde(default)]
    pub numbers: Vec<String>,

    #[serde(default)]
    pub personal_info: Map<String, Value>,
}

/// Settings for one wordlist run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaverConfig {
    #[serde(default, alias = "word_patterns")]
    pub patterns: Vec<String>,

    #[serde(default)]
    pub words: Vec<String>,

    #[serde(default)]
    pub numbers: Vec<String>,

    #[serde(default, alias = "special_chars")]
    pub specials: Vec<String>,

    #[serde(default)]
    pub common_words: Vec<String>,

    #[serde(default)]
    pub common_numbers: Vec<String>,

    #[serde(default)]
    pub common_special_chars: Vec<String>,

    #[serde(default)]
    pub custom: CustomData,

    #[serde(default)]
    pub word_groups: Vec<Vec<String>>,

    #[serde(default)]
    pub number_groups: Vec<Vec<String>>,

    #[serde(default)]
    pub special_groups: Vec<Vec<String>>,

    /// Words of which at most one may appear in a candidate.
    #[serde(default)]
    pub excluded_word_combinations: Vec<String>,

    /// Facts about the subject; see [`crate::personal`].
    #[serde(default)]
    pub personal_info: Map<String, Value>,

    /// Add a `{Word}` copy of every pattern using `{word}`.
    #[serde(default)]
    pub all_cases: bool,

    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Strip diacritics from words.
    #[serde(default)]
    pub normalize: bool,

    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,

    /// Wordlist appended verbatim after the generated candidates.
    #[serde(default)]
    pub external_wordlist: Option<PathBuf>,
}

impl Default for WeaverConfig {
    fn default() -> Self {
        WeaverConfig {
            patterns: Vec::new(),
            words: Vec::new(),
            numbers: Vec::new(),
            specials: Vec::new(),
            common_words: Vec::new(),
            common_numbers: Vec::new(),
            common_special_chars: Vec::new(),
            custom: CustomData::default(),
            word_groups: Vec::new(),
            number_groups: Vec::new(),
            special_groups: Vec::new(),
            excluded_word_combinations: Vec::new(),
            personal_info: Map::new(),
            all_cases: false,
            min_length: default_min_length(),
            max_length: default_max_length(),
            normalize: false,
            output_file: default_output_file(),
            external_wordlist: None,
        }
    }
}

impl WeaverConfig {
    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: WeaverConfig = serde_json::from_str(&content)?;
        debug!(
            "loaded config {}: {} patterns, {} words",
            path.display(),
            config.patterns.len(),
            config.words.len() + config.common_words.len() + config.custom.words.len()
        );
        Ok(config)
    }

    /// Check the settings that the generator itself trusts.
    pub fn validate(&self) -> Result<()> {
        if self.patterns.is_empty() {
            return Err(WeaverError::config("No patterns provided"));
        }
        if self.min_length > self.max_length {
            return Err(WeaverError::invalid_argument(format!(
                "min_length ({}) is greater than max_length ({})",
                self.min_length, self.max_length
            )));
        }
        Ok(())
    }

    /// Patterns to generate from, with the `{Word}` copies when `all_cases` is set.
    pub fn expanded_patterns(&self) -> Vec<String> {
        let mut patterns = self.patterns.clone();
        if self.all_cases {
            for pattern in &self.patterns {
                let capitalized = pattern.replace("{word}", "{Word}");
                if !patterns.contains(&capitalized) {
                    patterns.push(capitalized);
                }
            }
        }
        patterns
    }

    /// Value pools: shared lists, configured values, custom values and
    /// personal data, in that order.
    ///
    /// Specials containing digits are dropped.
    pub fn pools(&self) -> Pools {
        let personal = [&self.personal_info, &self.custom.personal_info]
            .into_iter()
            .flat_map(|info| extract_personal_data(&Value::Object(info.clone())))
            .collect();
        let (personal_words, personal_numbers) = split_personal(personal);

        let mut words: Vec<String> = self
            .common_words
            .iter()
            .chain(&self.words)
            .chain(&self.custom.words)
            .cloned()
            .chain(personal_words)
            .collect();
        if self.normalize {
            words = generalize_pool(&words);
        }
        let numbers = self
            .common_numbers
            .iter()
            .chain(&self.numbers)
            .chain(&self.custom.numbers)
            .cloned()
            .chain(personal_numbers);
        let specials = self
            .common_special_chars
            .iter()
            .chain(&self.specials)
            .filter(|s| !s.chars().any(|c| c.is_ascii_digit()));

        Pools::new(words, numbers, specials)
    }

    /// Conflict groups. A non-empty `excluded_word_combinations` is one word group.
    pub fn groups(&self) -> ConflictGroups {
        let mut words = self.word_groups.clone();
        if !self.excluded_word_combinations.is_empty() {
            words.push(self.excluded_word_combinations.clone());
        }
        ConflictGroups {
            words,
            numbers: self.number_groups.clone(),
            specials: self.special_groups.clone(),
        }
    }
}

/// Empty `personal_info` strings and lists plus `words` and `numbers` in one
/// object. Returns the number of personal fields cleared.
fn clear_subject_data(object: &mut Map<String, Value>) -> usize {
    let mut cleared = 0;
    if let Some(Value::Object(info)) = object.get_mut("personal_info") {
        for value in info.values_mut() {
            match value {
                Value::String(s) => {
                    s.clear();
                    cleared += 1;
                }
                Value::Array(items) => {
                    items.clear();
                    cleared += 1;
                }
                _ => {}
            }
        }
    }
    for key in ["words", "numbers"] {
        if let Some(Value::Array(items)) = object.get_mut(key) {
            items.clear();
        }
    }
    cleared
}

/// Clear subject-specific data from a configuration file in place.
///
/// Applies to the top level and to the `custom` section. Shared lists such
/// as `common_words` and every other key are written back unchanged.
/// Returns the number of personal fields cleared.
pub fn reset_config<P: AsRef<Path>>(path: P) -> Result<usize> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let mut root: Value = serde_json::from_str(&content)?;
    let object = root
        .as_object_mut()
        .ok_or_else(|| WeaverError::config("Configuration root must be an object"))?;

    let mut cleared = clear_subject_data(object);
    if let Some(Value::Object(custom)) = object.get_mut("custom") {
        cleared += clear_subject_data(custom);
    }

    fs::write(path, serde_json::to_string_pretty(&root)?)?;
    Ok(cleared)
}

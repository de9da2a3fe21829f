//! Compact list and group syntax.
//!
//! Values are separated by `;`. Inside a segment, `,` joins members of one
//! conflict group. A value starting with `@` names a file with one item per
//! line.
//!
//! ```text
//! --words    "admin,user;pass,password;acme"
//! --numbers  "1990,90;2024"
//! --specials "!@#"          (no `;`: one special per character)
//! --words    @words.txt
//! ```

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Result, WeaverError};

/// Prefix marking a list that is read from a file.
pub const FILE_MARKER: char = '@';

/// Values plus the conflict groups declared alongside them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedList {
    pub values: Vec<String>,
    pub groups: Vec<Vec<String>>,
}

impl ParsedList {
    fn plain(values: Vec<String>) -> Self {
        ParsedList {
            values,
            groups: Vec::new(),
        }
    }
}

fn split_members(segment: &str) -> Vec<String> {
    segment
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split on `;`, trimming and dropping empty items.
pub fn parse_semicolon_list(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Every `;` segment is a group; every member is also a word.
///
/// Single-word segments become one-member groups, which never conflict.
pub fn parse_word_groups(value: &str) -> ParsedList {
    let mut parsed = ParsedList::default();
    for segment in value.split(';') {
        let group = split_members(segment);
        if !group.is_empty() {
            parsed.values.extend(group.iter().cloned());
            parsed.groups.push(group);
        }
    }
    parsed
}

/// Segments with `,` are groups; plain segments are values only.
fn parse_grouped_values(value: &str) -> ParsedList {
    let mut parsed = ParsedList::default();
    for segment in value.split(';') {
        if segment.contains(',') {
            let group = split_members(segment);
            if !group.is_empty() {
                parsed.values.extend(group.iter().cloned());
                parsed.groups.push(group);
            }
        } else {
            let item = segment.trim();
            if !item.is_empty() {
                parsed.values.push(item.to_string());
            }
        }
    }
    parsed
}

pub fn parse_number_groups(value: &str) -> ParsedList {
    parse_grouped_values(value)
}

pub fn parse_special_groups(value: &str) -> ParsedList {
    parse_grouped_values(value)
}

/// Read one trimmed, non-empty item per line.
pub fn load_list_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(WeaverError::not_found(format!(
            "File not found: {}",
            path.display()
        )));
    }
    let content = fs::read_to_string(path)?;
    let items: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    debug!("loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

fn from_file(value: &str) -> Option<&str> {
    value.strip_prefix(FILE_MARKER)
}

/// Parse a `--words` value.
pub fn parse_words_arg(value: &str) -> Result<ParsedList> {
    match from_file(value) {
        Some(path) => Ok(ParsedList::plain(load_list_from_file(path)?)),
        None => Ok(parse_word_groups(value)),
    }
}

/// Parse a `--numbers` value.
pub fn parse_numbers_arg(value: &str) -> Result<ParsedList> {
    match from_file(value) {
        Some(path) => Ok(ParsedList::plain(load_list_from_file(path)?)),
        None => Ok(parse_number_groups(value)),
    }
}

/// Parse a `--specials` value. Without `;` every character is one special.
pub fn parse_specials_arg(value: &str) -> Result<ParsedList> {
    if let Some(path) = from_file(value) {
        return Ok(ParsedList::plain(load_list_from_file(path)?));
    }
    if value.contains(';') {
        Ok(parse_special_groups(value))
    } else {
        Ok(ParsedList::plain(
            value.chars().map(|c| c.to_string()).collect(),
        ))
    }
}

/// Contents of a mixed words file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordsFile {
    pub words: Vec<String>,
    pub numbers: Vec<String>,
    pub specials: Vec<String>,
    pub groups: Vec<Vec<String>>,
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Load a mixed file, classifying each line.
///
/// - a line with `,` is a word group (its members are words too)
/// - an all-digit line is a number
/// - a line without letters or digits is a special
/// - anything else is a word
pub fn load_words_file<P: AsRef<Path>>(path: P) -> Result<WordsFile> {
    let mut file = WordsFile::default();
    for line in load_list_from_file(path)? {
        if line.contains(',') {
            let group = split_members(&line);
            if !group.is_empty() {
                file.words.extend(group.iter().cloned());
                file.groups.push(group);
            }
        } else if is_all_digits(&line) {
            file.numbers.push(line);
        } else if !line.chars().any(char::is_alphanumeric) {
            file.specials.push(line);
        } else {
            file.words.push(line);
        }
    }
    Ok(file)
}

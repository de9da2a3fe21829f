//! Word and number extraction from facts about a subject.
//!
//! The input is a JSON object such as:
//!
//! ```json
//! {
//!     "first_name": "Jane",
//!     "full_name": "Jane Q Doe",
//!     "birthdate": "1990-05-17",
//!     "pets": ["Rex", "Mittens"]
//! }
//! ```
//!
//! Dates contribute their parts and common recombinations, multi-word text
//! contributes its words, and every digit run becomes a number.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})").expect("Date pattern should be valid")
});

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("Digit pattern should be valid"));

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn extract_text(text: &str, items: &mut Vec<String>) {
    let s = text.to_lowercase();
    if let Some(caps) = ISO_DATE.captures(&s) {
        let (y, m, d) = (&caps[1], &caps[2], &caps[3]);
        items.extend([
            y.to_string(),
            y[2..].to_string(),
            m.to_string(),
            d.to_string(),
            format!("{m}{d}"),
            format!("{d}{m}"),
        ]);
    } else if s.contains(' ') {
        items.extend(
            s.split_whitespace()
                .filter(|w| w.chars().count() > 1)
                .map(str::to_string),
        );
    } else {
        items.push(s.clone());
    }
    items.extend(DIGITS.find_iter(&s).map(|m| m.as_str().to_string()));
}

/// Extract candidate words and numbers from the values of a JSON object.
///
/// Non-object input yields nothing. Blank values are skipped.
pub fn extract_personal_data(info: &Value) -> Vec<String> {
    let mut items = Vec::new();
    let Some(map) = info.as_object() else {
        return items;
    };

    for value in map.values() {
        if is_blank(value) {
            continue;
        }
        match value {
            Value::Array(list) => items.extend(
                list.iter()
                    .filter(|v| !is_blank(v))
                    .map(|v| to_text(v).to_lowercase()),
            ),
            other => extract_text(&to_text(other), &mut items),
        }
    }
    items
}

/// Split extracted items into (words, numbers).
pub fn split_personal(items: Vec<String>) -> (Vec<String>, Vec<String>) {
    items
        .into_iter()
        .partition(|item| item.is_empty() || !item.chars().all(|c| c.is_ascii_digit()))
}

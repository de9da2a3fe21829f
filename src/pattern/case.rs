//! Case transforms applied to word values.

use serde::{Deserialize, Serialize};

/// How a placeholder wants its value cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMode {
    /// `{word}`: all lowercase.
    Lower,
    /// `{WORD}`: all uppercase.
    Upper,
    /// `{Word}`: first character uppercase, the rest lowercase.
    Capitalize,
    /// `{word*}`: lower, capitalized and upper variants are all generated.
    /// The variant is already baked into the pool value.
    Any,
    /// Number and special placeholders: the value is used unchanged.
    Verbatim,
}

impl CaseMode {
    /// Apply this case mode to a value.
    pub fn apply(self, value: &str) -> String {
        match self {
            CaseMode::Lower => value.to_lowercase(),
            CaseMode::Upper => value.to_uppercase(),
            CaseMode::Capitalize => capitalize(value),
            CaseMode::Any | CaseMode::Verbatim => value.to_string(),
        }
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(value.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// True when the text has at least one uppercase character and no lowercase ones.
pub fn is_all_uppercase(value: &str) -> bool {
    value.chars().any(char::is_uppercase) && !value.chars().any(char::is_lowercase)
}

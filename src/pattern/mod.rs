//! Pattern parsing: placeholders and their case transforms.

pub mod case;
pub mod placeholder;

pub use case::CaseMode;
pub use placeholder::{Placeholder, PlaceholderKind, classify, parse_placeholders};

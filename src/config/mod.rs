//! Input loading: compact list syntax, pattern shorthand and JSON files.

pub mod dsl;
pub mod file;
pub mod lists;

pub use dsl::{PatternMode, compile_pattern, parse_patterns};
pub use file::{CustomData, WeaverConfig, reset_config};
pub use lists::{
    FILE_MARKER, ParsedList, WordsFile, load_list_from_file, load_words_file, parse_numbers_arg,
    parse_semicolon_list, parse_specials_arg, parse_word_groups, parse_words_arg,
};

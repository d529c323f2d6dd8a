//! Glob translation and regex replacement helpers.

mod glob;
mod replace;

pub use glob::{GlobOptions, PatternError, compile_glob, glob_to_regex, glob_to_regex_with};
pub use replace::{escape_regex_replace, is_digit_string};

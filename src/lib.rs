//! ktools - small text and byte utilities.
//!
//! Shell-style argument splitting, glob to regex translation, escaping of
//! regex replacement templates, and a handful of formatting helpers (hex
//! dumps, byte sizes, table padding, directory listings).

pub mod audit;
pub mod bytes;
pub mod config;
pub mod lookup;
pub mod outcome;
pub mod output;
pub mod pattern;
pub mod request;
pub mod run;
pub mod shell;
pub mod table;
pub mod tree;

pub use config::{CompiledConfig, Config};
pub use outcome::Outcome;
pub use output::format_response;
pub use pattern::{GlobOptions, escape_regex_replace, glob_to_regex, is_digit_string};
pub use request::Request;
pub use run::run;
pub use shell::{TokenizeError, tokenize};

//! Dispatching requests to the library.

use std::path::Path;

use crate::bytes::{bytes_to_int, format_size, hexdump, reverse_bytes};
use crate::config::{CompiledConfig, parse_delimiter};
use crate::lookup::find_key_ignore_case;
use crate::outcome::{FailureInfo, Outcome};
use crate::pattern::{
    GlobOptions, compile_glob, escape_regex_replace, glob_to_regex_with, is_digit_string,
};
use crate::request::Operation;
use crate::shell::tokenize;
use crate::table::pad_table;
use crate::tree::dir_tree;

/// Run one operation with the given configuration.
pub fn run(op: &Operation, config: &CompiledConfig) -> Outcome {
    match op {
        Operation::Tokenize { input } => match tokenize(input) {
            Ok(args) => Outcome::success(args),
            Err(e) => Outcome::Failure(
                FailureInfo::new("tokenize.malformed_quote", e.to_string())
                    .with_position(e.position()),
            ),
        },
        Operation::Glob {
            pattern,
            delimiter,
            anchor,
        } => {
            let options = match glob_options(config, delimiter.as_deref(), *anchor) {
                Ok(o) => o,
                Err(outcome) => return outcome,
            };
            Outcome::success(glob_to_regex_with(pattern, &options))
        }
        Operation::Match {
            pattern,
            candidates,
        } => match compile_glob(pattern, &config.glob) {
            Ok(re) => Outcome::success(
                candidates
                    .iter()
                    .filter(|c| re.is_match(c))
                    .collect::<Vec<_>>(),
            ),
            Err(e) => Outcome::failure("glob.invalid", e.to_string()),
        },
        Operation::EscapeReplace { input } => Outcome::success(escape_regex_replace(input)),
        Operation::IsDigit { input } => Outcome::success(is_digit_string(input)),
        Operation::Hexdump { input, reverse } => {
            Outcome::success(hexdump(&input_bytes(input, *reverse)))
        }
        Operation::ToInt { input, reverse } => match bytes_to_int(&input_bytes(input, *reverse)) {
            Some(n) => Outcome::success(n),
            None => Outcome::failure("to_int.overflow", "value does not fit in 64 bits"),
        },
        Operation::FormatSize { bytes } => Outcome::success(format_size(*bytes)),
        Operation::Pad { rows } => Outcome::success(pad_table(rows)),
        Operation::FindKey { key, keys } => Outcome::success(find_key_ignore_case(key, keys)),
        Operation::Tree { dir, extension } => {
            let extension = match extension.as_deref() {
                Some("") => None,
                Some(ext) => Some(ext),
                None => config.tree_extension(),
            };
            match dir_tree(Path::new(dir), extension) {
                Ok(files) => Outcome::success(
                    files
                        .iter()
                        .map(|p| p.to_string_lossy().into_owned())
                        .collect::<Vec<_>>(),
                ),
                Err(e) => Outcome::failure("tree.failed", e.to_string()),
            }
        }
    }
}

fn input_bytes(input: &str, reverse: bool) -> Vec<u8> {
    if reverse {
        reverse_bytes(input.as_bytes())
    } else {
        input.as_bytes().to_vec()
    }
}

fn glob_options(
    config: &CompiledConfig,
    delimiter: Option<&str>,
    anchor: Option<bool>,
) -> Result<GlobOptions, Outcome> {
    let mut options = config.glob.clone();
    if let Some(d) = delimiter {
        options.delimiter =
            parse_delimiter(d).map_err(|e| Outcome::failure("glob.delimiter", e.to_string()))?;
    }
    if let Some(anchor) = anchor {
        options.anchor = anchor;
    }
    Ok(options)
}

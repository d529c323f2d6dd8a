//! Command line splitting.

mod tokenizer;

pub use tokenizer::{TokenizeError, tokenize};
